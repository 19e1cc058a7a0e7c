//! End-to-end search session tests: sequencer + session orchestrator

use std::io::Write;
use stylist_poc::domain::types::{StoreStatus, UserSizes};
use stylist_poc::infra::Config;
use stylist_poc::services::sequencer::{SearchUpdate, STATUS_COMPLETE};
use stylist_poc::services::{EventPicker, OutfitGenerator, Phase, SearchSequencer, StylistSession};
use tempfile::NamedTempFile;
use tokio::sync::mpsc;

fn config_with_delay_ms(delay_ms: u64) -> Config {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "[search]\nstore_delay_ms = {}\n", delay_ms).unwrap();
    temp_file.flush().unwrap();
    Config::from_file(temp_file.path()).unwrap()
}

#[tokio::test]
async fn test_full_session_emits_four_batches_in_order() {
    let config = config_with_delay_ms(0);
    let (tx, mut rx) = mpsc::channel(64);
    let mut sequencer = SearchSequencer::new(config.clone(), tx);
    let mut session = StylistSession::new();

    session.save_sizes(UserSizes::default());

    let picker = EventPicker::new(config.events().to_vec());
    let event = picker.select_by_id(1).unwrap();
    let generation = sequencer.start(event.clone(), OutfitGenerator::from_seed(7));
    session.begin_search(event, generation);

    let mut batch_sizes = Vec::new();
    let mut batch_stores = Vec::new();
    let mut done_count = 0;
    while let Some(update) = rx.recv().await {
        if let SearchUpdate::Outfits { outfits, .. } = &update {
            batch_sizes.push(outfits.len());
            batch_stores.push(outfits[0].items[0].store.clone().unwrap());
            // Nothing may complete after Done
            assert_eq!(done_count, 0);
        }
        let done = matches!(update, SearchUpdate::Done { .. });
        session.apply(update);
        if done {
            done_count += 1;
            break;
        }
    }

    assert_eq!(done_count, 1);
    assert_eq!(batch_sizes, vec![2, 2, 2, 2]);
    let expected: Vec<String> = config.stores().iter().map(|s| s.name.clone()).collect();
    assert_eq!(batch_stores, expected);

    assert_eq!(session.phase(), Phase::Results);
    assert_eq!(session.outfits().len(), 8);
    assert!(session.outfits().iter().all(|o| o.name == "Wedding Outfit"));
    assert_eq!(session.status_message(), STATUS_COMPLETE);
    assert_eq!(session.progress().len(), 4);
    assert!(session
        .progress()
        .iter()
        .all(|p| p.status == StoreStatus::Complete && p.progress == 100));
}

#[tokio::test]
async fn test_restart_mid_flight_reflects_only_new_run() {
    let config = config_with_delay_ms(20);
    let (tx, mut rx) = mpsc::channel(64);
    let mut sequencer = SearchSequencer::new(config.clone(), tx);
    let mut session = StylistSession::new();

    session.save_sizes(UserSizes::default());

    let picker = EventPicker::new(config.events().to_vec());
    let event_a = picker.select_by_id(1).unwrap();
    let event_b = picker.select_by_id(2).unwrap();

    let gen_a = sequencer.start(event_a.clone(), OutfitGenerator::from_seed(1));
    session.begin_search(event_a, gen_a);

    // Let run A finish its first store, then switch to event B
    let mut switched = false;
    while let Some(update) = rx.recv().await {
        if !switched {
            if matches!(&update, SearchUpdate::Outfits { generation, .. } if *generation == gen_a) {
                session.apply(update);
                let gen_b = sequencer.start(event_b.clone(), OutfitGenerator::from_seed(2));
                session.begin_search(event_b.clone(), gen_b);
                switched = true;
                continue;
            }
            session.apply(update);
            continue;
        }

        let done_for_new_run =
            matches!(&update, SearchUpdate::Done { generation } if *generation > gen_a);
        session.apply(update);
        if done_for_new_run {
            break;
        }
    }

    // Final state reflects only run B: full store set re-run from Pending
    assert_eq!(session.phase(), Phase::Results);
    assert_eq!(session.outfits().len(), 8);
    assert!(session.outfits().iter().all(|o| o.name == "Birthday Party Outfit"));
    assert_eq!(session.progress().len(), 4);
    assert!(session
        .progress()
        .iter()
        .all(|p| p.status == StoreStatus::Complete && p.progress == 100));
}

#[tokio::test]
async fn test_outfits_tagged_with_custom_event_name() {
    let config = config_with_delay_ms(0);
    let (tx, mut rx) = mpsc::channel(64);
    let mut sequencer = SearchSequencer::new(config.clone(), tx);
    let mut session = StylistSession::new();

    session.save_sizes(UserSizes::default());

    let picker = EventPicker::new(config.events().to_vec());
    let event = picker.select_custom("Garden Party").unwrap();
    let generation = sequencer.start(event.clone(), OutfitGenerator::from_seed(3));
    session.begin_search(event, generation);

    while let Some(update) = rx.recv().await {
        let done = matches!(update, SearchUpdate::Done { .. });
        session.apply(update);
        if done {
            break;
        }
    }

    // Custom events search under the synthesized "Custom Event" name
    assert_eq!(session.outfits().len(), 8);
    assert!(session.outfits().iter().all(|o| o.name == "Custom Event Outfit"));
    assert!(session
        .outfits()
        .iter()
        .all(|o| o.total_price == o.items.iter().map(|i| i.price).sum::<u32>()));
}
