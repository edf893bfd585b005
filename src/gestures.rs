// Copyright 2023 the Pointer Events Authors
// SPDX-License-Identifier: Apache-2.0

//! Gesture events synthesized from the pointer stream.

use std::collections::HashMap;
use std::time::Duration;

use crate::events::EventChannel;
use crate::util::{long_press_timeout, timestamp_millis};
use crate::{PointerEvent, PointerEventType, PointerId};

/// How far a pointer may drift, in display points, before a pending
/// press-and-hold is abandoned.
pub const DEFAULT_PRESS_AND_HOLD_MOVE_TOLERANCE: f64 = 8.0;

struct HoldRecord {
    event: PointerEvent,
    fired: bool,
}

/// Synthesizes gesture events from already-dispatched pointer events.
///
/// Feed the recognizer every pointer event (typically from a listener on the
/// catch-all channel of [`PointerEvents`]) and call [`update`] once per
/// frame so that press-and-hold can fire while the pointer is stationary.
///
/// [`PointerEvents`]: crate::PointerEvents
/// [`update`]: GestureEvents::update
pub struct GestureEvents {
    /// Event that is triggered on the second successive tap or click.
    pub on_double_press: EventChannel,
    /// Event that is triggered when a pointer has stayed pressed, without
    /// drifting, for the long press timeout.
    pub on_press_and_hold: EventChannel,
    holds: HashMap<PointerId, HoldRecord>,
    long_press_timeout_ms: u64,
    move_tolerance: f64,
}

impl Default for GestureEvents {
    fn default() -> GestureEvents {
        GestureEvents::new()
    }
}

impl GestureEvents {
    /// Create a recognizer with the default timeouts.
    pub fn new() -> GestureEvents {
        GestureEvents {
            on_double_press: EventChannel::new(),
            on_press_and_hold: EventChannel::new(),
            holds: HashMap::new(),
            long_press_timeout_ms: long_press_timeout().as_millis() as u64,
            move_tolerance: DEFAULT_PRESS_AND_HOLD_MOVE_TOLERANCE,
        }
    }

    /// Override the long press timeout.
    pub fn set_long_press_timeout(&mut self, timeout: Duration) {
        self.long_press_timeout_ms = timeout.as_millis() as u64;
    }

    /// Override the press-and-hold movement tolerance, in display points.
    pub fn set_move_tolerance(&mut self, tolerance: f64) {
        self.move_tolerance = tolerance;
    }

    /// Observe one pointer event.
    ///
    /// A down whose tap count reaches two fires [`on_double_press`]
    /// immediately. Downs also open press-and-hold tracking, which an up,
    /// a cancel, or drifting beyond the movement tolerance closes.
    ///
    /// [`on_double_press`]: GestureEvents::on_double_press
    pub fn pointer_event(&mut self, event: &PointerEvent) {
        let id = event.pointer_id();
        match event.event_type {
            PointerEventType::Down => {
                if event.count == 2 {
                    self.on_double_press.notify(event);
                }
                self.holds.insert(
                    id,
                    HoldRecord {
                        event: event.clone(),
                        fired: false,
                    },
                );
            }
            PointerEventType::Up | PointerEventType::Cancel => {
                self.holds.remove(&id);
            }
            PointerEventType::Move => {
                let drifted = self
                    .holds
                    .get(&id)
                    .map(|hold| event.pos().distance(hold.event.pos()) > self.move_tolerance)
                    .unwrap_or(false);
                if drifted {
                    self.holds.remove(&id);
                }
            }
            _ => {}
        }
    }

    /// Fire pending press-and-hold gestures, judged against the crate clock.
    ///
    /// Call once per frame.
    pub fn update(&mut self) {
        self.update_at(timestamp_millis());
    }

    /// Fire pending press-and-hold gestures, judged against `now` (crate
    /// clock milliseconds). Hosts with their own frame clock can use this
    /// directly.
    pub fn update_at(&mut self, now: u64) {
        for hold in self.holds.values_mut() {
            if !hold.fired && now >= hold.event.timestamp + self.long_press_timeout_ms {
                hold.fired = true;
                self.on_press_and_hold.notify(&hold.event);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Button, Buttons, PointerEvents};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn down_at(timestamp: u64, pos: (f64, f64), count: u8) -> PointerEvent {
        PointerEvent {
            event_type: PointerEventType::Down,
            point: crate::Point::new(pos),
            button: Button::Left,
            buttons: Buttons::new().with(Button::Left),
            count,
            timestamp,
            ..PointerEvent::default()
        }
    }

    fn move_to(timestamp: u64, pos: (f64, f64)) -> PointerEvent {
        PointerEvent {
            event_type: PointerEventType::Move,
            point: crate::Point::new(pos),
            buttons: Buttons::new().with(Button::Left),
            timestamp,
            ..PointerEvent::default()
        }
    }

    fn up_at(timestamp: u64) -> PointerEvent {
        PointerEvent {
            event_type: PointerEventType::Up,
            button: Button::Left,
            timestamp,
            ..PointerEvent::default()
        }
    }

    fn counting_sink(channel: &mut EventChannel) -> Rc<RefCell<u32>> {
        let count = Rc::new(RefCell::new(0u32));
        let sink = count.clone();
        channel.add_listener(move |_| {
            *sink.borrow_mut() += 1;
            false
        });
        count
    }

    #[test]
    fn second_tap_fires_double_press() {
        let mut gestures = GestureEvents::new();
        let fired = counting_sink(&mut gestures.on_double_press);

        gestures.pointer_event(&down_at(0, (0.0, 0.0), 1));
        assert_eq!(*fired.borrow(), 0);
        gestures.pointer_event(&down_at(100, (0.0, 0.0), 2));
        assert_eq!(*fired.borrow(), 1);
    }

    #[test]
    fn hold_fires_once_after_the_timeout() {
        let mut gestures = GestureEvents::new();
        let fired = counting_sink(&mut gestures.on_press_and_hold);

        gestures.pointer_event(&down_at(0, (0.0, 0.0), 1));
        gestures.update_at(499);
        assert_eq!(*fired.borrow(), 0);
        gestures.update_at(500);
        assert_eq!(*fired.borrow(), 1);
        gestures.update_at(600);
        assert_eq!(*fired.borrow(), 1);
    }

    #[test]
    fn release_abandons_the_hold() {
        let mut gestures = GestureEvents::new();
        let fired = counting_sink(&mut gestures.on_press_and_hold);

        gestures.pointer_event(&down_at(0, (0.0, 0.0), 1));
        gestures.pointer_event(&up_at(100));
        gestures.update_at(600);
        assert_eq!(*fired.borrow(), 0);
    }

    #[test]
    fn drifting_abandons_the_hold_but_jitter_does_not() {
        let mut gestures = GestureEvents::new();
        let fired = counting_sink(&mut gestures.on_press_and_hold);

        gestures.pointer_event(&down_at(0, (0.0, 0.0), 1));
        gestures.pointer_event(&move_to(50, (3.0, 0.0)));
        gestures.update_at(600);
        assert_eq!(*fired.borrow(), 1);

        gestures.pointer_event(&down_at(1000, (0.0, 0.0), 1));
        gestures.pointer_event(&move_to(1050, (20.0, 0.0)));
        gestures.update_at(1600);
        assert_eq!(*fired.borrow(), 1);
    }

    #[test]
    fn recognizer_wires_into_the_registry() {
        let mut events = PointerEvents::new();
        let gestures = Rc::new(RefCell::new(GestureEvents::new()));
        let fired = counting_sink(&mut gestures.borrow_mut().on_double_press);

        let recognizer = gestures.clone();
        events.on_pointer_event.add_listener(move |e| {
            recognizer.borrow_mut().pointer_event(e);
            false
        });

        // Two presses inside the tap timeout; the registry accumulates the
        // count and the recognizer reacts to it.
        events.pointer_event(down_at(0, (0.0, 0.0), 1));
        events.pointer_event(up_at(20));
        events.pointer_event(down_at(150, (0.0, 0.0), 1));

        assert_eq!(*fired.borrow(), 1);
    }
}
