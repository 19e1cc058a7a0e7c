//! Search sequencer - the simulated multi-store outfit search.
//!
//! Iterates the fixed store catalog strictly in order, one store at a time:
//! mark the store searching, sleep the configured per-store delay, emit a
//! batch of generated outfits, mark the store complete. Progress is
//! published as an immutable full snapshot on every transition.
//!
//! Each run carries a generation number. Starting a new run aborts the
//! in-flight task and bumps the generation, so consumers can discard any
//! update a superseded run managed to queue before the abort landed.

use crate::domain::types::{Event, Outfit, SearchProgress, Store, StoreStatus};
use crate::infra::Config;
use crate::services::generator::OutfitGenerator;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// Status line shown while the search is running
pub const STATUS_SEARCHING: &str = "Searching for outfits...";
/// Status line shown once every store has completed
pub const STATUS_COMPLETE: &str = "Search complete!";

/// Update emitted by a search run, stamped with its generation
#[derive(Debug, Clone)]
pub enum SearchUpdate {
    Status { generation: u64, message: String },
    Progress { generation: u64, stores: Vec<SearchProgress> },
    Outfits { generation: u64, outfits: Vec<Outfit> },
    Done { generation: u64 },
}

impl SearchUpdate {
    pub fn generation(&self) -> u64 {
        match self {
            SearchUpdate::Status { generation, .. }
            | SearchUpdate::Progress { generation, .. }
            | SearchUpdate::Outfits { generation, .. }
            | SearchUpdate::Done { generation } => *generation,
        }
    }
}

pub struct SearchSequencer {
    config: Config,
    tx: mpsc::Sender<SearchUpdate>,
    generation: u64,
    current: Option<JoinHandle<()>>,
}

impl SearchSequencer {
    pub fn new(config: Config, tx: mpsc::Sender<SearchUpdate>) -> Self {
        Self { config, tx, generation: 0, current: None }
    }

    /// Generation of the most recently started run (0 before any run)
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Start a search run for the given event.
    ///
    /// Any in-flight run is aborted first; its still-pending emissions are
    /// suppressed by the generation stamp. Returns the new run's generation.
    pub fn start(&mut self, event: Event, generator: OutfitGenerator) -> u64 {
        if let Some(handle) = self.current.take() {
            handle.abort();
            debug!(generation = %self.generation, "search_run_aborted");
        }

        self.generation += 1;
        let generation = self.generation;

        info!(
            generation = %generation,
            event = %event.name,
            stores = %self.config.stores().len(),
            delay_ms = %self.config.store_delay_ms(),
            "search_started"
        );

        let run = SearchRun {
            generation,
            event,
            stores: self.config.stores().to_vec(),
            delay: Duration::from_millis(self.config.store_delay_ms()),
            outfits_per_store: self.config.outfits_per_store(),
            tx: self.tx.clone(),
        };
        self.current = Some(tokio::spawn(run.execute(generator)));

        generation
    }
}

impl Drop for SearchSequencer {
    fn drop(&mut self) {
        if let Some(handle) = self.current.take() {
            handle.abort();
        }
    }
}

/// One search session from initialization to completion
struct SearchRun {
    generation: u64,
    event: Event,
    stores: Vec<Store>,
    delay: Duration,
    outfits_per_store: usize,
    tx: mpsc::Sender<SearchUpdate>,
}

impl SearchRun {
    async fn execute(self, mut generator: OutfitGenerator) {
        let generation = self.generation;

        if self
            .send(SearchUpdate::Status {
                generation,
                message: STATUS_SEARCHING.to_string(),
            })
            .await
            .is_err()
        {
            return;
        }

        // All-pending snapshot before the first store starts
        let mut progress: Vec<SearchProgress> =
            self.stores.iter().cloned().map(SearchProgress::pending).collect();
        if self.send_progress(&progress).await.is_err() {
            return;
        }

        for (index, store) in self.stores.iter().enumerate() {
            progress[index].status = StoreStatus::Searching;
            if self.send_progress(&progress).await.is_err() {
                return;
            }

            // Simulated network latency; the only suspension point
            tokio::time::sleep(self.delay).await;

            let outfits: Vec<Outfit> = generator
                .batch(&self.event.name, self.outfits_per_store)
                .into_iter()
                .map(|outfit| outfit.with_store(store))
                .collect();

            info!(
                generation = %generation,
                store = %store.name,
                count = %outfits.len(),
                event = %self.event.name,
                "store_search_complete"
            );

            if self.send(SearchUpdate::Outfits { generation, outfits }).await.is_err() {
                return;
            }

            progress[index].status = StoreStatus::Complete;
            progress[index].progress = 100;
            if self.send_progress(&progress).await.is_err() {
                return;
            }
        }

        if self
            .send(SearchUpdate::Status {
                generation,
                message: STATUS_COMPLETE.to_string(),
            })
            .await
            .is_err()
        {
            return;
        }

        info!(generation = %generation, event = %self.event.name, "search_complete");
        let _ = self.send(SearchUpdate::Done { generation }).await;
    }

    async fn send(&self, update: SearchUpdate) -> Result<(), ()> {
        self.tx.send(update).await.map_err(|_| ())
    }

    /// Publish a wholesale snapshot of the per-store progress list
    async fn send_progress(&self, progress: &[SearchProgress]) -> Result<(), ()> {
        self.send(SearchUpdate::Progress {
            generation: self.generation,
            stores: progress.to_vec(),
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::default_events;

    fn test_config() -> Config {
        let content = "[search]\nstore_delay_ms = 0\noutfits_per_store = 2\n";
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), content).unwrap();
        Config::from_file(file.path()).unwrap()
    }

    #[tokio::test]
    async fn test_run_emits_batches_in_store_order() {
        let config = test_config();
        let (tx, mut rx) = mpsc::channel(64);
        let mut sequencer = SearchSequencer::new(config.clone(), tx);

        let event = default_events().into_iter().next().unwrap();
        let generation = sequencer.start(event, OutfitGenerator::from_seed(1));
        assert_eq!(generation, 1);

        let mut batches: Vec<Vec<Outfit>> = Vec::new();
        let mut done_count = 0;
        let mut last_status = String::new();
        while let Some(update) = rx.recv().await {
            match update {
                SearchUpdate::Outfits { outfits, .. } => batches.push(outfits),
                SearchUpdate::Status { message, .. } => last_status = message,
                SearchUpdate::Done { .. } => {
                    done_count += 1;
                    break;
                }
                SearchUpdate::Progress { .. } => {}
            }
        }

        assert_eq!(done_count, 1);
        assert_eq!(last_status, STATUS_COMPLETE);
        assert_eq!(batches.len(), 4);
        let expected_stores: Vec<&str> =
            config.stores().iter().map(|s| s.name.as_str()).collect();
        for (batch, store_name) in batches.iter().zip(expected_stores) {
            assert_eq!(batch.len(), 2);
            for outfit in batch {
                assert_eq!(outfit.name, "Wedding Outfit");
                assert!(outfit
                    .items
                    .iter()
                    .all(|i| i.store.as_deref() == Some(store_name)));
            }
        }
    }

    #[tokio::test]
    async fn test_restart_bumps_generation() {
        let config = test_config();
        let (tx, mut rx) = mpsc::channel(64);
        let mut sequencer = SearchSequencer::new(config, tx);

        let events = default_events();
        let first = sequencer.start(events[0].clone(), OutfitGenerator::from_seed(1));
        let second = sequencer.start(events[1].clone(), OutfitGenerator::from_seed(2));
        assert!(second > first);

        // Drain until the second run's Done; every update from here on that
        // belongs to a finished progress set must carry the new generation.
        let mut saw_new_done = false;
        while let Some(update) = rx.recv().await {
            if let SearchUpdate::Done { generation } = update {
                if generation == second {
                    saw_new_done = true;
                    break;
                }
            }
        }
        assert!(saw_new_done);
    }
}
