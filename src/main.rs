//! Smart Stylist PoC - headless demo binary
//!
//! Runs one full styling flow from the command line: build a measurement
//! profile from arguments, pick a catalog event (or synthesize one from a
//! free-text vibe), run the simulated multi-store search, and print the
//! accumulated outfits as JSON lines.
//!
//! Module structure:
//! - `domain/` - Core types (UserSizes, Event, Store, Outfit) and catalogs
//! - `services/` - Business logic (ProfileForm, EventPicker, OutfitGenerator,
//!   SearchSequencer, StylistSession)
//! - `infra/` - Infrastructure (Config)

use anyhow::anyhow;
use clap::Parser;
use stylist_poc::infra::Config;
use stylist_poc::services::profile::ProfileField;
use stylist_poc::services::sequencer::SearchUpdate;
use stylist_poc::services::{
    EventPicker, OutfitGenerator, ProfileForm, SearchSequencer, StylistSession,
};
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;

/// Smart Stylist PoC - simulated multi-store outfit search
#[derive(Parser, Debug)]
#[command(name = "stylist-poc", version, about)]
struct Args {
    /// Path to TOML configuration file (falls back to the CONFIG_FILE
    /// environment variable, then config/dev.toml)
    #[arg(short, long)]
    config: Option<String>,

    /// Catalog event id to search for
    #[arg(short, long, default_value_t = 1)]
    event: i64,

    /// Free-text vibe; overrides --event with a custom event
    #[arg(long)]
    vibe: Option<String>,

    /// Shoe size (required measurement)
    #[arg(long, default_value = "9")]
    shoe_size: String,

    /// Height in cm (required measurement)
    #[arg(long, default_value = "170")]
    height: String,

    /// Weight in kg (required measurement)
    #[arg(long, default_value = "70")]
    weight: String,

    /// Bust measurement
    #[arg(long, default_value = "")]
    bust: String,

    /// Waist measurement
    #[arg(long, default_value = "")]
    waist: String,

    /// Hips measurement
    #[arg(long, default_value = "")]
    hips: String,

    /// Fixed RNG seed for reproducible outfits
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured logging with configurable level via RUST_LOG env var
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(UtcTime::rfc_3339())
        .with_target(false)
        .init();

    info!("stylist-poc starting");

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => Config::load_from_path(path),
        None => Config::load(&std::env::args().collect::<Vec<_>>()),
    };

    info!(
        config_file = %config.config_file(),
        store_delay_ms = %config.store_delay_ms(),
        outfits_per_store = %config.outfits_per_store(),
        stores = %config.stores().len(),
        events = %config.events().len(),
        "config_loaded"
    );

    // Measurement profile from CLI arguments
    let mut form = ProfileForm::new();
    form.set(ProfileField::Bust, args.bust);
    form.set(ProfileField::Waist, args.waist);
    form.set(ProfileField::Hips, args.hips);
    form.set(ProfileField::ShoeSize, args.shoe_size);
    form.set(ProfileField::Height, args.height);
    form.set(ProfileField::Weight, args.weight);
    let sizes = form.submit()?;

    // Event selection: free-text vibe wins over the catalog id
    let picker = EventPicker::new(config.events().to_vec());
    let event = match &args.vibe {
        Some(vibe) => picker
            .select_custom(vibe)
            .ok_or_else(|| anyhow!("blank vibe given; nothing to search for"))?,
        None => picker
            .select_by_id(args.event)
            .ok_or_else(|| anyhow!("unknown event id {}", args.event))?,
    };

    info!(event = %event.name, description = %event.description, "event_selected");

    let generator = match args.seed {
        Some(seed) => OutfitGenerator::from_seed(seed),
        None => OutfitGenerator::new(),
    };

    let (tx, mut rx) = mpsc::channel(64);
    let mut sequencer = SearchSequencer::new(config, tx);
    let mut session = StylistSession::new();

    session.save_sizes(sizes);
    let generation = sequencer.start(event.clone(), generator);
    session.begin_search(event, generation);

    while let Some(update) = rx.recv().await {
        if let SearchUpdate::Progress { stores, .. } = &update {
            for entry in stores {
                info!(
                    store = %entry.store.name,
                    status = %entry.status.as_str(),
                    progress = %entry.progress,
                    "store_progress"
                );
            }
        }
        let done = matches!(update, SearchUpdate::Done { .. });
        session.apply(update);
        if done {
            break;
        }
    }

    info!(
        status = %session.status_message(),
        outfits = %session.outfits().len(),
        "search_finished"
    );

    for outfit in session.outfits() {
        println!("{}", serde_json::to_string(outfit)?);
    }

    Ok(())
}
