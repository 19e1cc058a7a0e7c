//! Randomized placeholder outfit generation.
//!
//! The RNG is injected at construction so tests can seed it for
//! deterministic output; production callers draw from OS entropy.

use crate::domain::types::{new_outfit_id, Outfit, OutfitItem};
use rand::{rngs::StdRng, Rng, SeedableRng};
use smallvec::SmallVec;

/// Fixed four-slot layout with per-slot price bounds (inclusive-exclusive)
const SLOTS: [(&str, u32, u32); 4] = [
    ("Top", 20, 70),
    ("Bottom", 30, 100),
    ("Shoes", 50, 150),
    ("Accessory", 10, 40),
];

pub struct OutfitGenerator {
    rng: StdRng,
}

impl OutfitGenerator {
    /// Generator seeded from OS entropy
    pub fn new() -> Self {
        Self { rng: StdRng::from_entropy() }
    }

    /// Generator with a fixed seed for reproducible output
    pub fn from_seed(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    /// Generate one outfit for the given event name.
    ///
    /// The result always has exactly four items (Top, Bottom, Shoes,
    /// Accessory in that order) and a total equal to the sum of item prices.
    pub fn generate(&mut self, event_name: &str) -> Outfit {
        let id = new_outfit_id();

        let items: SmallVec<[OutfitItem; 4]> = SLOTS
            .iter()
            .map(|&(slot, low, high)| OutfitItem {
                name: slot.to_string(),
                price: self.rng.gen_range(low..high),
                image_url: Some(format!(
                    "https://example.com/{}-{}.jpg",
                    slot.to_lowercase(),
                    id
                )),
                link: None,
                store: None,
            })
            .collect();

        // Delivery bounds are drawn independently; the two ranges are
        // disjoint so low < high always holds.
        let delivery_low: u8 = self.rng.gen_range(2..=6);
        let delivery_high: u8 = self.rng.gen_range(7..=11);

        let mut outfit = Outfit {
            id,
            name: format!("{} Outfit", event_name),
            items,
            total_price: 0,
            estimated_delivery: format!("{}-{} business days", delivery_low, delivery_high),
        };
        outfit.recompute_total();
        outfit
    }

    /// Generate `count` independent outfits for the given event name
    pub fn batch(&mut self, event_name: &str, count: usize) -> Vec<Outfit> {
        (0..count).map(|_| self.generate(event_name)).collect()
    }
}

impl Default for OutfitGenerator {
    fn default() -> Self {
        Self::new()
    }
}
