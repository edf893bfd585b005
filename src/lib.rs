// Copyright 2023 the Pointer Events Authors
// SPDX-License-Identifier: Apache-2.0

//! A platform-independent pointer event abstraction.
//!
//! This crate unifies events caused by several different input devices,
//! including mice, touch input, and pen input, into a single pointer event
//! model based on the [W3C Pointer Events recommendation].
//!
//! Raw [`MouseEvent`]s and [`TouchEvent`]s from the embedding application
//! are fed into a [`PointerEvents`] registry, which converts them, counts
//! successive taps, and dispatches them over named channels. A
//! [`GestureEvents`] recognizer synthesizes double-press and press-and-hold
//! gestures from the same stream, and a [`PointerHistory`] records trails
//! for inspection.
//!
//! ```
//! use pointer_events::{Button, MouseEvent, MouseEventKind, PointerEvents};
//!
//! let mut events = PointerEvents::new();
//! events.on_pointer_down.add_listener(|event| {
//!     println!("{event}");
//!     false // leave the event for other listeners
//! });
//!
//! let press = MouseEvent::new(MouseEventKind::Pressed, (12.0, 34.0))
//!     .with_button(Button::Left);
//! events.mouse_event(&press);
//! ```
//!
//! [W3C Pointer Events recommendation]: https://www.w3.org/TR/pointerevents/

pub use kurbo;

pub use keyboard_types::Modifiers;

mod error;
mod events;
mod gestures;
mod history;
mod manager;
mod mouse;
mod point;
mod pointer;
mod touch;
pub mod util;

pub use error::Error;
pub use events::{
    EventChannel, ListenerId, ListenerPriority, PointerEventHandler, PointerEvents,
};
pub use gestures::{GestureEvents, DEFAULT_PRESS_AND_HOLD_MOVE_TOLERANCE};
pub use history::{
    PointerHistory, PointerStroke, DEFAULT_MAX_EVENTS_PER_STROKE, DEFAULT_MAX_STROKES,
};
pub use manager::{PointerEventsManager, SourceId};
pub use mouse::{MouseEvent, MouseEventKind};
pub use point::{Point, PointShape};
pub use pointer::{
    Button, Buttons, EventKey, PointerEvent, PointerEventType, PointerId, PointerType,
};
pub use touch::{TouchEvent, TouchEventKind};
