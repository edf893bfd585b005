// Copyright 2023 the Pointer Events Authors
// SPDX-License-Identifier: Apache-2.0

//! The unified pointer event record and its supporting types.
//!
//! This module is based on the [W3C Pointer Events recommendation].
//!
//! [W3C Pointer Events recommendation]: https://www.w3.org/TR/pointerevents/

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::kurbo::Vec2;
use crate::{Error, Modifiers, Point};

/// The transition described by a pointer event.
///
/// This is a closed tag set; [`Display`] renders the conventional
/// lower-case event names (`"pointerdown"` and so on) and [`FromStr`]
/// parses them back.
///
/// [`Display`]: fmt::Display
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum PointerEventType {
    /// A pointer moved into the hit test boundaries of a target.
    Over,
    /// A pointer entered a target or one of its descendants.
    Enter,
    /// A pointer made contact, or a button was pressed.
    Down,
    /// A pointer changed position.
    Move,
    /// A pointer broke contact, or a button was released.
    Up,
    /// The system cancelled the pointer.
    ///
    /// This happens when the pointer (touch or pen contact) is removed from
    /// the system. Common reasons include a touch contact cancelled by a pen
    /// coming into range of the surface, the device not reporting an active
    /// contact for too long, a monitor mapping change while contacts are
    /// active, the desktop being locked, or the number of simultaneous
    /// contacts exceeding what the device supports.
    Cancel,
    /// A pointer moved out of the hit test boundaries of a target.
    Out,
    /// A pointer left a target and all of its descendants.
    Leave,
    /// A pointer scrolled a wheel or trackpad.
    Scroll,
}

impl fmt::Display for PointerEventType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            PointerEventType::Over => "pointerover",
            PointerEventType::Enter => "pointerenter",
            PointerEventType::Down => "pointerdown",
            PointerEventType::Move => "pointermove",
            PointerEventType::Up => "pointerup",
            PointerEventType::Cancel => "pointercancel",
            PointerEventType::Out => "pointerout",
            PointerEventType::Leave => "pointerleave",
            PointerEventType::Scroll => "pointerscroll",
        };
        write!(f, "{name}")
    }
}

impl FromStr for PointerEventType {
    type Err = Error;

    fn from_str(s: &str) -> Result<PointerEventType, Error> {
        match s {
            "pointerover" => Ok(PointerEventType::Over),
            "pointerenter" => Ok(PointerEventType::Enter),
            "pointerdown" => Ok(PointerEventType::Down),
            "pointermove" => Ok(PointerEventType::Move),
            "pointerup" => Ok(PointerEventType::Up),
            "pointercancel" => Ok(PointerEventType::Cancel),
            "pointerout" => Ok(PointerEventType::Out),
            "pointerleave" => Ok(PointerEventType::Leave),
            "pointerscroll" => Ok(PointerEventType::Scroll),
            other => Err(Error::UnknownEventType(other.to_string())),
        }
    }
}

/// The types of devices that can cause pointer events.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum PointerType {
    Mouse,
    Touch,
    Pen,
    Eraser,
    /// A device the source could not classify.
    Unknown,
}

impl fmt::Display for PointerType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            PointerType::Mouse => "mouse",
            PointerType::Touch => "touch",
            PointerType::Pen => "pen",
            PointerType::Eraser => "eraser",
            PointerType::Unknown => "unknown",
        };
        write!(f, "{name}")
    }
}

/// An indicator of which pointer button was pressed.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
#[repr(u8)]
pub enum Button {
    /// No button.
    // MUST BE FIRST (== 0)
    None,
    /// Left mouse button, or the primary touch/pen contact.
    Left,
    /// Right mouse button, or the pen barrel button.
    Right,
    /// Middle mouse button.
    Middle,
    /// First X button.
    X1,
    /// Second X button.
    X2,
}

impl Button {
    /// Returns `true` if this is [`Button::Left`].
    #[inline]
    pub fn is_left(self) -> bool {
        self == Button::Left
    }

    /// Returns `true` if this is [`Button::Right`].
    #[inline]
    pub fn is_right(self) -> bool {
        self == Button::Right
    }

    /// Returns `true` if this is [`Button::Middle`].
    #[inline]
    pub fn is_middle(self) -> bool {
        self == Button::Middle
    }
}

/// A set of [`Button`]s.
#[derive(PartialEq, Eq, Clone, Copy, Default, Hash)]
pub struct Buttons(u8);

impl Buttons {
    /// Create a new empty set.
    #[inline]
    pub fn new() -> Buttons {
        Buttons(0)
    }

    /// Add the `button` to the set.
    ///
    /// [`Button::None`] is not representable in a set and is ignored.
    #[inline]
    pub fn insert(&mut self, button: Button) {
        self.0 |= 1.min(button as u8) << button as u8;
    }

    /// Remove the `button` from the set.
    #[inline]
    pub fn remove(&mut self, button: Button) {
        self.0 &= !(1.min(button as u8) << button as u8);
    }

    /// Builder-style method for adding the `button` to the set.
    #[inline]
    pub fn with(mut self, button: Button) -> Buttons {
        self.insert(button);
        self
    }

    /// Builder-style method for removing the `button` from the set.
    #[inline]
    pub fn without(mut self, button: Button) -> Buttons {
        self.remove(button);
        self
    }

    /// Returns `true` if the `button` is in the set.
    #[inline]
    pub fn contains(self, button: Button) -> bool {
        button != Button::None && (self.0 & (1 << button as u8)) != 0
    }

    /// Returns `true` if the set is empty.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if [`Button::Left`] is in the set.
    #[inline]
    pub fn has_left(self) -> bool {
        self.contains(Button::Left)
    }

    /// Returns `true` if [`Button::Right`] is in the set.
    #[inline]
    pub fn has_right(self) -> bool {
        self.contains(Button::Right)
    }

    /// Returns `true` if [`Button::Middle`] is in the set.
    #[inline]
    pub fn has_middle(self) -> bool {
        self.contains(Button::Middle)
    }

    /// Returns a union of the values in `self` and `other`.
    #[inline]
    pub fn union(mut self, other: Buttons) -> Buttons {
        self.0 |= other.0;
        self
    }

    /// Clear the set.
    #[inline]
    pub fn clear(&mut self) {
        self.0 = 0;
    }

    /// Count the number of pressed buttons in the set.
    #[inline]
    pub fn count(self) -> u32 {
        self.0.count_ones()
    }
}

impl fmt::Debug for Buttons {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Buttons({:05b})", self.0 >> 1)
    }
}

/// A unique identifier for a pointer.
///
/// The id is derived from the device id, the per-device contact index, and
/// the pointer type, so a physical contact keeps the same id for as long as
/// it stays active. Ids can be reused once a contact is lifted, matching how
/// multi-touch hardware recycles contact indices.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct PointerId(u64);

impl PointerId {
    fn new(device_id: u64, pointer_index: i64, pointer_type: PointerType) -> PointerId {
        let mut hasher = DefaultHasher::new();
        device_id.hash(&mut hasher);
        pointer_index.hash(&mut hasher);
        (pointer_type as u8).hash(&mut hasher);
        PointerId(hasher.finish())
    }
}

/// Correlates the down and up halves of a press.
///
/// Tap counting needs to match a release to the press that started it; the
/// pointer id alone is not enough because a mouse can hold several buttons at
/// once.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct EventKey {
    pub pointer_id: PointerId,
    pub button: Button,
}

/// An event caused by a pointer.
///
/// This unifies events caused by several different input devices, including
/// mice, touch input, and pen input.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerEvent {
    /// The transition this event describes.
    pub event_type: PointerEventType,
    /// The spatial sample taken when the event fired.
    pub point: Point,
    /// The id of the input device that produced the event. A single-seat
    /// application will usually see only device `0`.
    pub device_id: u64,
    /// The per-device contact index. Distinct simultaneous touches on a
    /// multi-touch device get distinct indices; indices may be reused once a
    /// contact is lifted.
    pub pointer_index: i64,
    /// The type of device that caused this event.
    pub pointer_type: PointerType,
    /// Whether the device can hover without contact (mice and pens can,
    /// touch contacts cannot).
    pub can_hover: bool,
    /// Indicates whether this is the primary pointer of its type. For
    /// example, the first finger to come down in a multi-touch event is the
    /// primary one.
    pub is_primary: bool,
    /// The button whose state-change caused this event. When this event was
    /// caused by something other than a button press (for example, a pointer
    /// move), this will be `Button::None`.
    pub button: Button,
    /// Buttons being held down during this event. Thus it will contain the
    /// `button` that triggered a pointer-down event, and it will not contain
    /// the `button` that triggered a pointer-up event.
    pub buttons: Buttons,
    /// Keyboard modifiers at the time of the event.
    pub mods: Modifiers,
    /// The number of successive taps associated with this event: `1` on an
    /// ordinary pointer-down, higher when taps land inside the tap timeout,
    /// and `0` for moves. The matching pointer-up inherits the count.
    pub count: u8,
    /// The wheel movement. Non-zero only for [`PointerEventType::Scroll`].
    ///
    /// The polarity is the amount to be added to the scroll position, in
    /// other words the opposite of the direction the content should move on
    /// scrolling.
    pub wheel_delta: Vec2,
    /// The event time, in milliseconds on the crate clock
    /// ([`crate::util::timestamp_millis`]).
    pub timestamp: u64,
}

impl PointerEvent {
    /// The derived identity of the pointer that caused this event.
    ///
    /// See [`PointerId`].
    pub fn pointer_id(&self) -> PointerId {
        PointerId::new(self.device_id, self.pointer_index, self.pointer_type)
    }

    /// The key correlating this event's press/release pair, for tap
    /// counting.
    pub fn event_key(&self) -> EventKey {
        EventKey {
            pointer_id: self.pointer_id(),
            button: self.button,
        }
    }

    /// Clone this event under a different event type.
    ///
    /// Used when one event is synthesized from another, for example gesture
    /// events derived from a press.
    pub fn with_event_type(&self, event_type: PointerEventType) -> PointerEvent {
        PointerEvent {
            event_type,
            ..self.clone()
        }
    }

    /// Shorthand for the window-relative position of the event.
    #[inline]
    pub fn pos(&self) -> crate::kurbo::Point {
        self.point.pos()
    }
}

impl Default for PointerEvent {
    fn default() -> PointerEvent {
        PointerEvent {
            event_type: PointerEventType::Move,
            point: Point::default(),
            device_id: 0,
            pointer_index: -1,
            pointer_type: PointerType::Unknown,
            can_hover: false,
            is_primary: false,
            button: Button::None,
            buttons: Buttons::new(),
            mods: Modifiers::empty(),
            count: 0,
            wheel_delta: Vec2::ZERO,
            timestamp: 0,
        }
    }
}

impl fmt::Display for PointerEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} pos={:?} button={:?} buttons={:?} count={} t={}ms",
            self.event_type,
            self.pointer_type,
            self.pos(),
            self.button,
            self.buttons,
            self.count,
            self.timestamp,
        )
    }
}
