// Copyright 2023 the Pointer Events Authors
// SPDX-License-Identifier: Apache-2.0

//! Raw mouse events and their translation into pointer events.

use crate::kurbo::{self, Vec2};
use crate::util::timestamp_millis;
use crate::{
    Button, Buttons, Modifiers, Point, PointerEvent, PointerEventType, PointerType,
};

/// The state change reported by a mouse source.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum MouseEventKind {
    /// The mouse moved with no buttons held.
    Moved,
    /// The mouse moved while at least one button was held.
    Dragged,
    /// A button was pressed.
    Pressed,
    /// A button was released.
    Released,
    /// The wheel or trackpad was scrolled.
    Scrolled,
    /// The mouse entered the window.
    Entered,
    /// The mouse left the window.
    Exited,
}

/// A mouse event as delivered by the embedding application.
///
/// This is the raw, mouse-specific half of the input stream; feed it to
/// [`PointerEvents::mouse_event`] (or convert it with
/// [`PointerEvent::from_mouse`]) to join the unified pointer stream.
///
/// [`PointerEvents::mouse_event`]: crate::PointerEvents::mouse_event
#[derive(Clone, Debug, PartialEq)]
pub struct MouseEvent {
    /// Which state change happened.
    pub kind: MouseEventKind,
    /// The position of the cursor in relation to the window.
    pub pos: kurbo::Point,
    /// The button that changed state, `Button::None` for moves and scrolls.
    pub button: Button,
    /// The buttons held down, as tracked by the source.
    pub buttons: Buttons,
    /// Keyboard modifiers at the time of the event.
    pub mods: Modifiers,
    /// The wheel movement, for [`MouseEventKind::Scrolled`].
    pub wheel_delta: Vec2,
}

impl MouseEvent {
    /// Create an event of `kind` at `pos` with everything else defaulted.
    pub fn new(kind: MouseEventKind, pos: impl Into<kurbo::Point>) -> MouseEvent {
        MouseEvent {
            kind,
            pos: pos.into(),
            button: Button::None,
            buttons: Buttons::new(),
            mods: Modifiers::empty(),
            wheel_delta: Vec2::ZERO,
        }
    }

    /// Builder-style method for setting the changed button.
    pub fn with_button(mut self, button: Button) -> MouseEvent {
        self.button = button;
        self
    }

    /// Builder-style method for setting the held button set.
    pub fn with_buttons(mut self, buttons: Buttons) -> MouseEvent {
        self.buttons = buttons;
        self
    }

    /// Builder-style method for setting the keyboard modifiers.
    pub fn with_mods(mut self, mods: Modifiers) -> MouseEvent {
        self.mods = mods;
        self
    }

    /// Builder-style method for setting the wheel movement.
    pub fn with_wheel_delta(mut self, wheel_delta: impl Into<Vec2>) -> MouseEvent {
        self.wheel_delta = wheel_delta.into();
        self
    }
}

impl PointerEvent {
    /// Translate a raw mouse event into the unified pointer model.
    ///
    /// Mice can hover and are always the primary pointer of their type. On
    /// hardware without pressure reporting, pressure reads `0.5` while a
    /// button is held and `0.0` otherwise. The held-button set is normalized
    /// so that a press includes the pressed button and a release excludes the
    /// released one.
    pub fn from_mouse(event: &MouseEvent) -> PointerEvent {
        let (event_type, pressure) = match event.kind {
            MouseEventKind::Pressed => (PointerEventType::Down, 0.5),
            MouseEventKind::Dragged => (PointerEventType::Move, 0.5),
            MouseEventKind::Moved => (PointerEventType::Move, 0.0),
            MouseEventKind::Released => (PointerEventType::Up, 0.0),
            MouseEventKind::Scrolled => (PointerEventType::Scroll, 0.0),
            MouseEventKind::Entered => (PointerEventType::Enter, 0.0),
            MouseEventKind::Exited => (PointerEventType::Leave, 0.0),
        };

        let (button, buttons) = match event.kind {
            MouseEventKind::Pressed => (event.button, event.buttons.with(event.button)),
            MouseEventKind::Released => (event.button, event.buttons.without(event.button)),
            _ => (Button::None, event.buttons),
        };

        let count = match event.kind {
            MouseEventKind::Pressed => 1,
            _ => 0,
        };

        PointerEvent {
            event_type,
            point: Point::new(event.pos).with_pressure(pressure),
            device_id: 0,
            pointer_index: 0,
            pointer_type: PointerType::Mouse,
            can_hover: true,
            is_primary: true,
            button,
            buttons,
            mods: event.mods,
            count,
            wheel_delta: event.wheel_delta,
            timestamp: timestamp_millis(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_becomes_pointer_down() {
        let event = MouseEvent::new(MouseEventKind::Pressed, (10.0, 20.0))
            .with_button(Button::Left);
        let pointer = PointerEvent::from_mouse(&event);

        assert_eq!(pointer.event_type, PointerEventType::Down);
        assert_eq!(pointer.pointer_type, PointerType::Mouse);
        assert_eq!(pointer.button, Button::Left);
        assert!(pointer.buttons.has_left());
        assert_eq!(pointer.count, 1);
        assert_eq!(pointer.point.pressure(), 0.5);
        assert!(pointer.can_hover);
        assert!(pointer.is_primary);
    }

    #[test]
    fn release_excludes_released_button() {
        let event = MouseEvent::new(MouseEventKind::Released, (0.0, 0.0))
            .with_button(Button::Left)
            .with_buttons(Buttons::new().with(Button::Left).with(Button::Right));
        let pointer = PointerEvent::from_mouse(&event);

        assert_eq!(pointer.event_type, PointerEventType::Up);
        assert!(!pointer.buttons.has_left());
        assert!(pointer.buttons.has_right());
        assert_eq!(pointer.count, 0);
        assert_eq!(pointer.point.pressure(), 0.0);
    }

    #[test]
    fn drag_keeps_pressure_but_not_button() {
        let event = MouseEvent::new(MouseEventKind::Dragged, (5.0, 5.0))
            .with_buttons(Buttons::new().with(Button::Left));
        let pointer = PointerEvent::from_mouse(&event);

        assert_eq!(pointer.event_type, PointerEventType::Move);
        assert_eq!(pointer.button, Button::None);
        assert!(pointer.buttons.has_left());
        assert_eq!(pointer.point.pressure(), 0.5);
    }

    #[test]
    fn scroll_carries_wheel_delta() {
        let event =
            MouseEvent::new(MouseEventKind::Scrolled, (0.0, 0.0)).with_wheel_delta((0.0, -3.0));
        let pointer = PointerEvent::from_mouse(&event);

        assert_eq!(pointer.event_type, PointerEventType::Scroll);
        assert_eq!(pointer.wheel_delta, Vec2::new(0.0, -3.0));
    }

    #[test]
    fn window_crossings_are_explicit() {
        let entered = PointerEvent::from_mouse(&MouseEvent::new(MouseEventKind::Entered, (0., 0.)));
        let exited = PointerEvent::from_mouse(&MouseEvent::new(MouseEventKind::Exited, (0., 0.)));
        assert_eq!(entered.event_type, PointerEventType::Enter);
        assert_eq!(exited.event_type, PointerEventType::Leave);
    }

    #[test]
    fn mouse_pointers_share_one_identity() {
        let a = PointerEvent::from_mouse(&MouseEvent::new(MouseEventKind::Moved, (0., 0.)));
        let b = PointerEvent::from_mouse(&MouseEvent::new(MouseEventKind::Pressed, (9., 9.)));
        assert_eq!(a.pointer_id(), b.pointer_id());
    }
}
