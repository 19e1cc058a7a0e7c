//! Event picker over the static catalog plus free-text custom vibes

use crate::domain::types::Event;

pub struct EventPicker {
    events: Vec<Event>,
}

impl EventPicker {
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Select a catalog event by its id
    pub fn select_by_id(&self, id: i64) -> Option<Event> {
        self.events.iter().find(|e| e.id == id).cloned()
    }

    /// Select a catalog event by list position (TUI cursor)
    pub fn select_by_index(&self, index: usize) -> Option<Event> {
        self.events.get(index).cloned()
    }

    /// Synthesize a custom event from free-text vibe input.
    ///
    /// Blank or whitespace-only input yields `None`; the caller treats that
    /// as a silent no-op.
    pub fn select_custom(&self, input: &str) -> Option<Event> {
        Event::custom(input)
    }
}
