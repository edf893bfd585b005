// Copyright 2023 the Pointer Events Authors
// SPDX-License-Identifier: Apache-2.0

//! The pointer event registry: named channels, listener management, and tap
//! counting.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use tracing::{debug, warn};

use crate::util::{tap_timeout, Counter};
use crate::{
    Error, EventKey, MouseEvent, PointerEvent, PointerEventType, TouchEvent, TouchEventKind,
};

/// A unique identifier for a registered listener.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ListenerId(u64);

impl ListenerId {
    /// Create a new, unique `ListenerId`.
    pub fn next() -> ListenerId {
        static LISTENER_COUNTER: Counter = Counter::new();
        ListenerId(LISTENER_COUNTER.next())
    }
}

/// When a listener runs relative to the embedding application.
///
/// Listeners on a channel fire in priority order; within one priority class
/// they fire in registration order.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub enum ListenerPriority {
    /// Before the application's own handling.
    BeforeApp,
    /// Alongside the application's own handling.
    App,
    /// After the application's own handling. This is the default.
    AfterApp,
}

type ListenerFn = Box<dyn FnMut(&PointerEvent) -> bool>;

struct ListenerEntry {
    id: ListenerId,
    priority: ListenerPriority,
    callback: ListenerFn,
}

/// One named event channel.
///
/// A channel owns an ordered list of listeners. Notifying the channel calls
/// each listener with the event until one returns `true`, which consumes the
/// event and stops propagation.
#[derive(Default)]
pub struct EventChannel {
    listeners: Vec<ListenerEntry>,
}

impl EventChannel {
    /// Create an empty channel.
    pub fn new() -> EventChannel {
        EventChannel::default()
    }

    /// Register `callback` at the default [`ListenerPriority::AfterApp`]
    /// priority, returning the id to unregister it with.
    pub fn add_listener(
        &mut self,
        callback: impl FnMut(&PointerEvent) -> bool + 'static,
    ) -> ListenerId {
        self.add_listener_with_priority(ListenerPriority::AfterApp, callback)
    }

    /// Register `callback` at `priority`, returning the id to unregister it
    /// with.
    pub fn add_listener_with_priority(
        &mut self,
        priority: ListenerPriority,
        callback: impl FnMut(&PointerEvent) -> bool + 'static,
    ) -> ListenerId {
        let id = ListenerId::next();
        let pos = self
            .listeners
            .partition_point(|entry| entry.priority <= priority);
        self.listeners.insert(
            pos,
            ListenerEntry {
                id,
                priority,
                callback: Box::new(callback),
            },
        );
        id
    }

    /// Unregister the listener registered under `id`.
    pub fn remove_listener(&mut self, id: ListenerId) -> Result<(), Error> {
        match self.listeners.iter().position(|entry| entry.id == id) {
            Some(pos) => {
                self.listeners.remove(pos);
                Ok(())
            }
            None => {
                warn!("tried to remove unregistered listener {:?}", id);
                Err(Error::ListenerNotFound)
            }
        }
    }

    /// Call each listener with `event`, in order, until one consumes it.
    ///
    /// Returns `true` if the event was consumed.
    pub fn notify(&mut self, event: &PointerEvent) -> bool {
        for entry in &mut self.listeners {
            if (entry.callback)(event) {
                return true;
            }
        }
        false
    }

    /// The number of registered listeners.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Whether the channel has no listeners.
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

#[derive(Clone, Copy)]
struct TapRecord {
    timestamp: u64,
    count: u8,
}

/// Accumulates tap counts across successive presses.
struct TapTracker {
    downs: HashMap<EventKey, TapRecord>,
    timeout_ms: u64,
}

impl TapTracker {
    fn new() -> TapTracker {
        TapTracker {
            downs: HashMap::new(),
            timeout_ms: tap_timeout().as_millis() as u64,
        }
    }

    /// Adjust `event.count` based on the press history of its key.
    ///
    /// A down within the tap timeout of the previous down on the same key
    /// accumulates that press's count; the matching up inherits the count of
    /// the down that opened it. Stale records are evicted when revisited.
    fn update(&mut self, event: &mut PointerEvent) {
        let key = event.event_key();
        match event.event_type {
            PointerEventType::Down => {
                if let Some(prev) = self.downs.get(&key) {
                    if event.timestamp <= prev.timestamp + self.timeout_ms {
                        event.count = event.count.saturating_add(prev.count);
                    }
                }
                self.downs.insert(
                    key,
                    TapRecord {
                        timestamp: event.timestamp,
                        count: event.count,
                    },
                );
            }
            PointerEventType::Up => {
                if let Some(prev) = self.downs.get(&key) {
                    event.count = event.count.saturating_add(prev.count);
                }
            }
            _ => {
                if let Some(prev) = self.downs.get(&key) {
                    if event.timestamp > prev.timestamp + self.timeout_ms {
                        self.downs.remove(&key);
                    }
                }
            }
        }
    }
}

/// Handles pointer events, in the manner of a window handler.
///
/// All methods default to doing nothing and leaving the event unconsumed;
/// implement the ones you care about. Returning `true` from any method
/// consumes the event.
#[allow(unused_variables)]
pub trait PointerEventHandler {
    /// A pointer made contact, or a button was pressed.
    fn pointer_down(&mut self, event: &PointerEvent) -> bool {
        false
    }

    /// A pointer broke contact, or a button was released.
    fn pointer_up(&mut self, event: &PointerEvent) -> bool {
        false
    }

    /// A pointer changed position.
    fn pointer_move(&mut self, event: &PointerEvent) -> bool {
        false
    }

    /// The system cancelled a pointer.
    fn pointer_cancel(&mut self, event: &PointerEvent) -> bool {
        false
    }

    /// A pointer scrolled a wheel or trackpad.
    fn pointer_scroll(&mut self, event: &PointerEvent) -> bool {
        false
    }

    /// Any event without a dedicated method (over, enter, out, leave).
    fn pointer_other(&mut self, event: &PointerEvent) -> bool {
        false
    }
}

/// The pointer event registry.
///
/// Raw [`MouseEvent`]s and [`TouchEvent`]s are fed in, converted to
/// [`PointerEvent`]s, tap-counted, and dispatched: first to the catch-all
/// [`on_pointer_event`] channel, then to the channel named after the event
/// type. Consumption on any channel stops propagation.
///
/// The registry is single-threaded; it is deliberately neither [`Send`] nor
/// [`Sync`].
///
/// [`on_pointer_event`]: PointerEvents::on_pointer_event
pub struct PointerEvents {
    /// Observes every event, before the typed channels.
    pub on_pointer_event: EventChannel,
    /// Event that is triggered when a pointer makes contact or a button is
    /// pressed.
    pub on_pointer_down: EventChannel,
    /// Event that is triggered when a pointer breaks contact or a button is
    /// released.
    pub on_pointer_up: EventChannel,
    /// Event that is triggered when a pointer moves.
    pub on_pointer_move: EventChannel,
    /// Event that is triggered when the system cancels a pointer.
    pub on_pointer_cancel: EventChannel,
    /// Event that is triggered when a pointer scrolls.
    pub on_pointer_scroll: EventChannel,
    consume_mouse_events: bool,
    consume_touch_events: bool,
    taps: TapTracker,
}

impl Default for PointerEvents {
    fn default() -> PointerEvents {
        PointerEvents::new()
    }
}

impl PointerEvents {
    /// Create an empty registry.
    pub fn new() -> PointerEvents {
        PointerEvents {
            on_pointer_event: EventChannel::new(),
            on_pointer_down: EventChannel::new(),
            on_pointer_up: EventChannel::new(),
            on_pointer_move: EventChannel::new(),
            on_pointer_cancel: EventChannel::new(),
            on_pointer_scroll: EventChannel::new(),
            consume_mouse_events: false,
            consume_touch_events: false,
            taps: TapTracker::new(),
        }
    }

    /// Whether raw mouse events should be reported as consumed to the
    /// embedding application even when no listener consumes them.
    pub fn set_consume_mouse_events(&mut self, consume: bool) {
        self.consume_mouse_events = consume;
    }

    /// The touch counterpart of [`set_consume_mouse_events`].
    ///
    /// [`set_consume_mouse_events`]: PointerEvents::set_consume_mouse_events
    pub fn set_consume_touch_events(&mut self, consume: bool) {
        self.consume_touch_events = consume;
    }

    /// Feed a raw mouse event.
    ///
    /// Returns `true` if the embedding application should treat the raw
    /// event as handled, either because a listener consumed it or because
    /// mouse consumption is switched on.
    pub fn mouse_event(&mut self, event: &MouseEvent) -> bool {
        let consumed = self.pointer_event(PointerEvent::from_mouse(event));
        self.consume_mouse_events || consumed
    }

    /// Feed a raw touch event.
    ///
    /// Legacy double-tap notifications are dropped without dispatch, since
    /// tap counts already encode multi-taps. Returns `true` under the same
    /// conditions as [`mouse_event`].
    ///
    /// [`mouse_event`]: PointerEvents::mouse_event
    pub fn touch_event(&mut self, event: &TouchEvent) -> bool {
        if event.kind == TouchEventKind::DoubleTap {
            debug!("dropping legacy double-tap feed; taps are counted instead");
            return self.consume_touch_events;
        }
        let consumed = self.pointer_event(PointerEvent::from_touch(event));
        self.consume_touch_events || consumed
    }

    /// Inject an already-formed pointer event.
    ///
    /// The event is tap-counted and dispatched exactly like a converted raw
    /// event. Returns `true` if a listener consumed it.
    pub fn pointer_event(&mut self, mut event: PointerEvent) -> bool {
        self.taps.update(&mut event);
        self.dispatch(&event)
    }

    fn dispatch(&mut self, event: &PointerEvent) -> bool {
        if self.on_pointer_event.notify(event) {
            return true;
        }
        match event.event_type {
            PointerEventType::Down => self.on_pointer_down.notify(event),
            PointerEventType::Up => self.on_pointer_up.notify(event),
            PointerEventType::Move => self.on_pointer_move.notify(event),
            PointerEventType::Cancel => self.on_pointer_cancel.notify(event),
            PointerEventType::Scroll => self.on_pointer_scroll.notify(event),
            // Boundary crossings only reach the catch-all channel.
            _ => false,
        }
    }

    /// Register a [`PointerEventHandler`] across every channel.
    ///
    /// The handler observes the full stream through the catch-all channel,
    /// with each event routed to the matching trait method. Unregister it
    /// with [`remove_handler`].
    ///
    /// [`remove_handler`]: PointerEvents::remove_handler
    pub fn add_handler(&mut self, handler: Rc<RefCell<dyn PointerEventHandler>>) -> ListenerId {
        self.on_pointer_event.add_listener(move |event| {
            let mut handler = handler.borrow_mut();
            match event.event_type {
                PointerEventType::Down => handler.pointer_down(event),
                PointerEventType::Up => handler.pointer_up(event),
                PointerEventType::Move => handler.pointer_move(event),
                PointerEventType::Cancel => handler.pointer_cancel(event),
                PointerEventType::Scroll => handler.pointer_scroll(event),
                _ => handler.pointer_other(event),
            }
        })
    }

    /// Unregister a handler previously added with [`add_handler`].
    ///
    /// [`add_handler`]: PointerEvents::add_handler
    pub fn remove_handler(&mut self, id: ListenerId) -> Result<(), Error> {
        self.on_pointer_event.remove_listener(id)
    }
}
