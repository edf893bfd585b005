// Copyright 2023 the Pointer Events Authors
// SPDX-License-Identifier: Apache-2.0

//! Raw touch events and their translation into pointer events.

use crate::kurbo::{self, Vec2};
use crate::util::timestamp_millis;
use crate::{
    Button, Buttons, Modifiers, Point, PointShape, PointerEvent, PointerEventType, PointerType,
};

/// The state change reported by a touch source.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum TouchEventKind {
    /// A contact touched the surface.
    Down,
    /// A contact was lifted off the surface.
    Up,
    /// A contact moved.
    Moved,
    /// The system cancelled the contact.
    Cancelled,
    /// A legacy double-tap notification.
    ///
    /// The unified model derives multi-taps from tap counts instead, so
    /// [`PointerEvents`] drops these without dispatching.
    ///
    /// [`PointerEvents`]: crate::PointerEvents
    DoubleTap,
}

/// A touch event as delivered by the embedding application.
///
/// One `TouchEvent` describes one contact; simultaneous contacts are told
/// apart by `index`. Feed it to [`PointerEvents::touch_event`] (or convert it
/// with [`PointerEvent::from_touch`]) to join the unified pointer stream.
///
/// [`PointerEvents::touch_event`]: crate::PointerEvents::touch_event
#[derive(Clone, Debug, PartialEq)]
pub struct TouchEvent {
    /// Which state change happened.
    pub kind: TouchEventKind,
    /// The contact index. Distinct simultaneous contacts get distinct
    /// indices; indices may be reused once a contact is lifted.
    pub index: i64,
    /// The position of the contact in relation to the window.
    pub pos: kurbo::Point,
    /// The normalized contact pressure, or `0.0` if unsupported.
    pub pressure: f64,
    /// The width of the contact patch, or `0.0` if unsupported.
    pub width: f64,
    /// The height of the contact patch, or `0.0` if unsupported.
    pub height: f64,
    /// The major axis of the contact ellipse, or `0.0` if unsupported.
    pub ellipse_major_axis: f64,
    /// The minor axis of the contact ellipse, or `0.0` if unsupported.
    pub ellipse_minor_axis: f64,
    /// The angle of the contact ellipse in degrees, or `0.0` if unsupported.
    pub ellipse_angle: f64,
    /// Keyboard modifiers at the time of the event.
    pub mods: Modifiers,
}

impl TouchEvent {
    /// Create an event of `kind` for contact `index` at `pos`, with the
    /// shape and pressure fields zeroed.
    pub fn new(kind: TouchEventKind, index: i64, pos: impl Into<kurbo::Point>) -> TouchEvent {
        TouchEvent {
            kind,
            index,
            pos: pos.into(),
            pressure: 0.0,
            width: 0.0,
            height: 0.0,
            ellipse_major_axis: 0.0,
            ellipse_minor_axis: 0.0,
            ellipse_angle: 0.0,
            mods: Modifiers::empty(),
        }
    }

    /// Builder-style method for setting the contact pressure.
    pub fn with_pressure(mut self, pressure: f64) -> TouchEvent {
        self.pressure = pressure;
        self
    }

    /// Builder-style method for setting the contact patch size.
    pub fn with_size(mut self, width: f64, height: f64) -> TouchEvent {
        self.width = width;
        self.height = height;
        self
    }

    /// Builder-style method for setting the contact ellipse.
    pub fn with_ellipse(mut self, major: f64, minor: f64, angle: f64) -> TouchEvent {
        self.ellipse_major_axis = major;
        self.ellipse_minor_axis = minor;
        self.ellipse_angle = angle;
        self
    }

    /// Builder-style method for setting the keyboard modifiers.
    pub fn with_mods(mut self, mods: Modifiers) -> TouchEvent {
        self.mods = mods;
        self
    }
}

impl PointerEvent {
    /// Translate a raw touch event into the unified pointer model.
    ///
    /// A contact acts as the primary button: it is held from down through
    /// move and released on up. Touch contacts cannot hover. A legacy
    /// [`TouchEventKind::DoubleTap`] converts as a down so that conversion is
    /// total, but the dispatcher never feeds one through.
    pub fn from_touch(event: &TouchEvent) -> PointerEvent {
        let (event_type, button, buttons) = match event.kind {
            TouchEventKind::Down | TouchEventKind::DoubleTap => (
                PointerEventType::Down,
                Button::Left,
                Buttons::new().with(Button::Left),
            ),
            TouchEventKind::Up => (PointerEventType::Up, Button::Left, Buttons::new()),
            TouchEventKind::Moved => (
                PointerEventType::Move,
                Button::None,
                Buttons::new().with(Button::Left),
            ),
            TouchEventKind::Cancelled => {
                (PointerEventType::Cancel, Button::None, Buttons::new())
            }
        };

        let count = match event_type {
            PointerEventType::Down => 1,
            _ => 0,
        };

        let shape = PointShape::with_ellipse(
            event.width,
            event.height,
            event.ellipse_major_axis,
            event.ellipse_minor_axis,
            event.ellipse_angle,
        );

        PointerEvent {
            event_type,
            point: Point::new(event.pos)
                .with_shape(shape)
                .with_pressure(event.pressure),
            device_id: 0,
            pointer_index: event.index,
            pointer_type: PointerType::Touch,
            can_hover: false,
            is_primary: false,
            button,
            buttons,
            mods: event.mods,
            count,
            wheel_delta: Vec2::ZERO,
            timestamp: timestamp_millis(),
        }
    }
}
