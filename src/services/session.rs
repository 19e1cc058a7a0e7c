//! Session orchestrator - top-level state for one styling session.
//!
//! Linear flow: collect measurements once, select an event, run the search
//! sequencer while appending every emitted batch, then flip to a
//! display-only results state. Selecting a new event restarts from the
//! search stage with a cleared outfit list.

use crate::domain::types::{Event, Outfit, SearchProgress, UserSizes};
use crate::services::sequencer::SearchUpdate;
use tracing::debug;

/// Where the session currently is in the linear flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Profile,
    EventSelect,
    Searching,
    Results,
}

pub struct StylistSession {
    phase: Phase,
    sizes: Option<UserSizes>,
    event: Option<Event>,
    outfits: Vec<Outfit>,
    progress: Vec<SearchProgress>,
    status_message: String,
    /// Generation of the run whose updates we accept; everything else is stale
    expected_generation: u64,
}

impl StylistSession {
    pub fn new() -> Self {
        Self {
            phase: Phase::Profile,
            sizes: None,
            event: None,
            outfits: Vec::new(),
            progress: Vec::new(),
            status_message: String::new(),
            expected_generation: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn sizes(&self) -> Option<&UserSizes> {
        self.sizes.as_ref()
    }

    pub fn event(&self) -> Option<&Event> {
        self.event.as_ref()
    }

    pub fn outfits(&self) -> &[Outfit] {
        &self.outfits
    }

    pub fn progress(&self) -> &[SearchProgress] {
        &self.progress
    }

    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    pub fn is_searching(&self) -> bool {
        self.phase == Phase::Searching
    }

    /// Store the submitted measurement profile and advance to event selection
    pub fn save_sizes(&mut self, sizes: UserSizes) {
        self.sizes = Some(sizes);
        if self.phase == Phase::Profile {
            self.phase = Phase::EventSelect;
        }
    }

    /// Begin a search session for the given event and run generation.
    ///
    /// Clears accumulated outfits and the progress snapshot wholesale; the
    /// generation ties this session to exactly one sequencer run. Every
    /// search needs a submitted profile first; without one this is a no-op.
    pub fn begin_search(&mut self, event: Event, generation: u64) {
        if self.sizes.is_none() {
            debug!(event = %event.name, "search_without_profile_skipped");
            return;
        }
        self.event = Some(event);
        self.outfits.clear();
        self.progress.clear();
        self.status_message = "Initializing search...".to_string();
        self.expected_generation = generation;
        self.phase = Phase::Searching;
    }

    /// Apply a sequencer update. Updates stamped with a generation other
    /// than the expected one come from a superseded run and are dropped.
    pub fn apply(&mut self, update: SearchUpdate) {
        if update.generation() != self.expected_generation {
            debug!(
                generation = %update.generation(),
                expected = %self.expected_generation,
                "stale_search_update_dropped"
            );
            return;
        }

        match update {
            SearchUpdate::Status { message, .. } => self.status_message = message,
            SearchUpdate::Progress { stores, .. } => self.progress = stores,
            SearchUpdate::Outfits { outfits, .. } => self.outfits.extend(outfits),
            SearchUpdate::Done { .. } => self.phase = Phase::Results,
        }
    }

    /// Leave the results view to pick another event
    pub fn back_to_events(&mut self) {
        if self.phase == Phase::Results {
            self.phase = Phase::EventSelect;
        }
    }
}

impl Default for StylistSession {
    fn default() -> Self {
        Self::new()
    }
}
