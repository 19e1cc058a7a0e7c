//! Shared types for the stylist PoC

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use uuid::Uuid;

/// Generate a new UUIDv7 (time-sortable) outfit identifier
pub fn new_outfit_id() -> String {
    Uuid::now_v7().to_string()
}

/// Reserved event id for user-authored custom events
pub const CUSTOM_EVENT_ID: i64 = -1;

/// Body measurement profile submitted by the user.
///
/// All fields are free-text as entered in the form; no unit parsing is done.
/// Immutable once submitted - the session keeps it read-only thereafter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserSizes {
    pub bust: String,
    pub waist: String,
    pub hips: String,
    #[serde(default)]
    pub top_size: Option<String>,
    #[serde(default)]
    pub bottom_size: Option<String>,
    #[serde(default)]
    pub shoe_size: Option<String>,
    #[serde(default)]
    pub height: Option<String>,
    #[serde(default)]
    pub weight: Option<String>,
}

/// A styling occasion driving outfit generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub vibe: Option<String>,
}

impl Event {
    /// Synthesize a custom event from free-text vibe input.
    ///
    /// Returns `None` for blank or whitespace-only input; the picker treats
    /// that as a silent no-op rather than an error.
    pub fn custom(input: &str) -> Option<Self> {
        let vibe = input.trim();
        if vibe.is_empty() {
            return None;
        }
        Some(Self {
            id: CUSTOM_EVENT_ID,
            name: "Custom Event".to_string(),
            description: vibe.to_string(),
            vibe: Some(vibe.to_string()),
        })
    }
}

/// Placeholder retailer entry, used only to pace the simulated search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
    pub id: String,
    pub name: String,
    pub url: String,
}

/// One priced slot in an outfit bundle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutfitItem {
    pub name: String,
    /// Whole dollars, non-negative
    pub price: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store: Option<String>,
}

/// A generated outfit bundle: four priced items plus aggregate fields.
///
/// Invariant: `total_price` always equals the exact sum of item prices. It
/// is recomputed via [`Outfit::recompute_total`] whenever items change and
/// is never set independently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Outfit {
    pub id: String,
    pub name: String,
    pub items: SmallVec<[OutfitItem; 4]>,
    pub total_price: u32,
    pub estimated_delivery: String,
}

impl Outfit {
    /// Recompute `total_price` from the current items
    pub fn recompute_total(&mut self) {
        self.total_price = self.items.iter().map(|item| item.price).sum();
    }

    /// Stamp every item with the sourcing store's name
    pub fn with_store(mut self, store: &Store) -> Self {
        for item in &mut self.items {
            item.store = Some(store.name.clone());
        }
        self
    }
}

/// Per-store status during a search session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreStatus {
    Pending,
    Searching,
    Complete,
    /// Defined for a future timeout path; never produced by the sequencer
    Error,
}

impl StoreStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreStatus::Pending => "pending",
            StoreStatus::Searching => "searching",
            StoreStatus::Complete => "complete",
            StoreStatus::Error => "error",
        }
    }
}

/// Transient per-store progress entry.
///
/// Exists only for the duration of one search session; the sequencer
/// publishes a full snapshot on every transition rather than mutating
/// entries in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchProgress {
    pub store: Store,
    /// 0-100
    pub progress: u8,
    pub status: StoreStatus,
}

impl SearchProgress {
    pub fn pending(store: Store) -> Self {
        Self { store, progress: 0, status: StoreStatus::Pending }
    }
}
