// Copyright 2023 the Pointer Events Authors
// SPDX-License-Identifier: Apache-2.0

//! Routing pointer event registries to their sources.

use std::collections::HashMap;

use crate::util::Counter;
use crate::PointerEvents;

/// A unique identifier for an event source, typically a window.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct SourceId(u64);

impl SourceId {
    /// Create a new, unique `SourceId`.
    pub fn next() -> SourceId {
        static SOURCE_COUNTER: Counter = Counter::new();
        SourceId(SOURCE_COUNTER.next())
    }
}

/// Owns one [`PointerEvents`] registry per event source.
///
/// A multi-window application keeps one registry per window, plus a default
/// registry for listeners that want input from everywhere the application
/// chooses to forward. The embedding application owns the manager; there is
/// no process-wide instance.
#[derive(Default)]
pub struct PointerEventsManager {
    default_events: PointerEvents,
    sources: HashMap<SourceId, PointerEvents>,
}

impl PointerEventsManager {
    /// Create a manager with an empty default registry and no sources.
    pub fn new() -> PointerEventsManager {
        PointerEventsManager::default()
    }

    /// The default registry, unassociated with any particular source.
    pub fn events(&mut self) -> &mut PointerEvents {
        &mut self.default_events
    }

    /// The registry for `source`, created on first use.
    pub fn events_for_source(&mut self, source: SourceId) -> &mut PointerEvents {
        self.sources.entry(source).or_default()
    }

    /// Whether a registry exists for `source`.
    pub fn has_source(&self, source: SourceId) -> bool {
        self.sources.contains_key(&source)
    }

    /// Drop the registry for `source`, returning it if one existed.
    pub fn remove_source(&mut self, source: SourceId) -> Option<PointerEvents> {
        self.sources.remove(&source)
    }
}
