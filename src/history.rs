// Copyright 2023 the Pointer Events Authors
// SPDX-License-Identifier: Apache-2.0

//! Recording pointer trails for inspection and debugging.

use std::collections::{HashMap, VecDeque};

use crate::{PointerEvent, PointerEventType, PointerId, PointerType};

/// How many finished strokes a history keeps before discarding the oldest.
pub const DEFAULT_MAX_STROKES: usize = 64;

/// How many samples one stroke keeps before discarding the oldest.
pub const DEFAULT_MAX_EVENTS_PER_STROKE: usize = 1024;

/// One pointer's trail from down to up or cancel.
#[derive(Clone, Debug)]
pub struct PointerStroke {
    pointer_id: PointerId,
    pointer_type: PointerType,
    events: VecDeque<PointerEvent>,
    finished: bool,
}

impl PointerStroke {
    fn new(event: &PointerEvent, cap: usize) -> PointerStroke {
        let mut stroke = PointerStroke {
            pointer_id: event.pointer_id(),
            pointer_type: event.pointer_type,
            events: VecDeque::new(),
            finished: false,
        };
        stroke.push(event, cap);
        stroke
    }

    fn push(&mut self, event: &PointerEvent, cap: usize) {
        if self.events.len() == cap {
            self.events.pop_front();
        }
        self.events.push_back(event.clone());
    }

    /// The pointer this stroke belongs to.
    pub fn pointer_id(&self) -> PointerId {
        self.pointer_id
    }

    /// The device type that drew this stroke.
    pub fn pointer_type(&self) -> PointerType {
        self.pointer_type
    }

    /// The recorded samples, oldest first.
    pub fn events(&self) -> impl Iterator<Item = &PointerEvent> {
        self.events.iter()
    }

    /// The number of recorded samples.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the stroke holds no samples.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Whether the pointer has been lifted or cancelled.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

/// A bounded recorder of pointer trails.
///
/// Feed it the pointer stream; a down starts a stroke for that pointer,
/// moves extend it, and an up or cancel finishes it. Finished strokes are
/// kept, newest last, up to a cap.
pub struct PointerHistory {
    active: HashMap<PointerId, PointerStroke>,
    finished: VecDeque<PointerStroke>,
    max_strokes: usize,
    max_events_per_stroke: usize,
    enabled: bool,
}

impl Default for PointerHistory {
    fn default() -> PointerHistory {
        PointerHistory::new()
    }
}

impl PointerHistory {
    /// Create an empty, enabled history with the default caps.
    pub fn new() -> PointerHistory {
        PointerHistory {
            active: HashMap::new(),
            finished: VecDeque::new(),
            max_strokes: DEFAULT_MAX_STROKES,
            max_events_per_stroke: DEFAULT_MAX_EVENTS_PER_STROKE,
            enabled: true,
        }
    }

    /// Builder-style method for overriding the finished-stroke cap.
    pub fn with_max_strokes(mut self, max_strokes: usize) -> PointerHistory {
        self.max_strokes = max_strokes;
        self
    }

    /// Builder-style method for overriding the per-stroke sample cap.
    pub fn with_max_events_per_stroke(mut self, max_events: usize) -> PointerHistory {
        self.max_events_per_stroke = max_events;
        self
    }

    /// Switch recording on or off. While disabled, [`add`] is a no-op.
    ///
    /// [`add`]: PointerHistory::add
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Whether recording is switched on.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record one pointer event.
    pub fn add(&mut self, event: &PointerEvent) {
        if !self.enabled {
            return;
        }
        let id = event.pointer_id();
        match event.event_type {
            PointerEventType::Down => {
                if let Some(stale) = self
                    .active
                    .insert(id, PointerStroke::new(event, self.max_events_per_stroke))
                {
                    // A down without a matching up; keep what we saw.
                    self.finish(stale);
                }
            }
            PointerEventType::Up | PointerEventType::Cancel => {
                if let Some(mut stroke) = self.active.remove(&id) {
                    stroke.push(event, self.max_events_per_stroke);
                    self.finish(stroke);
                }
            }
            _ => {
                if let Some(stroke) = self.active.get_mut(&id) {
                    stroke.push(event, self.max_events_per_stroke);
                }
            }
        }
    }

    fn finish(&mut self, mut stroke: PointerStroke) {
        stroke.finished = true;
        if self.finished.len() == self.max_strokes {
            self.finished.pop_front();
        }
        self.finished.push_back(stroke);
    }

    /// The pointers with a stroke in progress.
    pub fn active_pointers(&self) -> impl Iterator<Item = PointerId> + '_ {
        self.active.keys().copied()
    }

    /// The in-progress stroke for `id`, if any.
    pub fn stroke_for(&self, id: PointerId) -> Option<&PointerStroke> {
        self.active.get(&id)
    }

    /// The finished strokes, oldest first.
    pub fn strokes(&self) -> impl Iterator<Item = &PointerStroke> {
        self.finished.iter()
    }

    /// Drop all recorded strokes, active and finished.
    pub fn clear(&mut self) {
        self.active.clear();
        self.finished.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Button, Buttons, Point};

    fn touch_event(event_type: PointerEventType, index: i64, pos: (f64, f64)) -> PointerEvent {
        PointerEvent {
            event_type,
            point: Point::new(pos),
            pointer_index: index,
            pointer_type: PointerType::Touch,
            button: Button::Left,
            buttons: Buttons::new().with(Button::Left),
            ..PointerEvent::default()
        }
    }

    #[test]
    fn stroke_lifecycle() {
        let mut history = PointerHistory::new();
        history.add(&touch_event(PointerEventType::Down, 0, (0.0, 0.0)));
        history.add(&touch_event(PointerEventType::Move, 0, (1.0, 1.0)));
        history.add(&touch_event(PointerEventType::Move, 0, (2.0, 2.0)));

        assert_eq!(history.active_pointers().count(), 1);
        let id = history.active_pointers().next().unwrap();
        assert_eq!(history.stroke_for(id).unwrap().len(), 3);
        assert!(!history.stroke_for(id).unwrap().is_finished());

        history.add(&touch_event(PointerEventType::Up, 0, (3.0, 3.0)));
        assert_eq!(history.active_pointers().count(), 0);

        let strokes: Vec<_> = history.strokes().collect();
        assert_eq!(strokes.len(), 1);
        assert_eq!(strokes[0].len(), 4);
        assert!(strokes[0].is_finished());
        assert_eq!(strokes[0].pointer_type(), PointerType::Touch);
    }

    #[test]
    fn concurrent_contacts_record_separately() {
        let mut history = PointerHistory::new();
        history.add(&touch_event(PointerEventType::Down, 0, (0.0, 0.0)));
        history.add(&touch_event(PointerEventType::Down, 1, (9.0, 9.0)));
        history.add(&touch_event(PointerEventType::Move, 1, (8.0, 8.0)));

        assert_eq!(history.active_pointers().count(), 2);
        history.add(&touch_event(PointerEventType::Up, 0, (0.0, 0.0)));
        assert_eq!(history.active_pointers().count(), 1);
        assert_eq!(history.strokes().count(), 1);
    }

    #[test]
    fn moves_without_a_down_are_ignored() {
        let mut history = PointerHistory::new();
        history.add(&touch_event(PointerEventType::Move, 0, (1.0, 1.0)));
        assert_eq!(history.active_pointers().count(), 0);
        assert_eq!(history.strokes().count(), 0);
    }

    #[test]
    fn caps_drop_the_oldest() {
        let mut history = PointerHistory::new()
            .with_max_strokes(2)
            .with_max_events_per_stroke(3);

        for _ in 0..3 {
            history.add(&touch_event(PointerEventType::Down, 0, (0.0, 0.0)));
            history.add(&touch_event(PointerEventType::Move, 0, (1.0, 0.0)));
            history.add(&touch_event(PointerEventType::Move, 0, (2.0, 0.0)));
            history.add(&touch_event(PointerEventType::Move, 0, (3.0, 0.0)));
            history.add(&touch_event(PointerEventType::Up, 0, (4.0, 0.0)));
        }

        assert_eq!(history.strokes().count(), 2);
        for stroke in history.strokes() {
            // Three samples survive of the five recorded.
            assert_eq!(stroke.len(), 3);
            assert_eq!(
                stroke.events().last().unwrap().event_type,
                PointerEventType::Up
            );
        }
    }

    #[test]
    fn disabled_history_records_nothing() {
        let mut history = PointerHistory::new();
        history.set_enabled(false);
        history.add(&touch_event(PointerEventType::Down, 0, (0.0, 0.0)));
        assert_eq!(history.active_pointers().count(), 0);

        history.set_enabled(true);
        history.add(&touch_event(PointerEventType::Down, 0, (0.0, 0.0)));
        assert_eq!(history.active_pointers().count(), 1);
    }

    #[test]
    fn clear_empties_everything() {
        let mut history = PointerHistory::new();
        history.add(&touch_event(PointerEventType::Down, 0, (0.0, 0.0)));
        history.add(&touch_event(PointerEventType::Up, 0, (1.0, 1.0)));
        history.add(&touch_event(PointerEventType::Down, 1, (2.0, 2.0)));

        history.clear();
        assert_eq!(history.active_pointers().count(), 0);
        assert_eq!(history.strokes().count(), 0);
    }
}
