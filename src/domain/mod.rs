//! Domain models - core data types and static catalogs
//!
//! This module contains the canonical data types used throughout the system:
//! - `UserSizes` - the measurement profile submitted once per session
//! - `Event` - a styling occasion (catalog entry or user-authored vibe)
//! - `Store` - a placeholder retailer used to pace the simulated search
//! - `Outfit` / `OutfitItem` - a generated bundle of priced items
//! - `SearchProgress` - per-store transient status for one search session

pub mod catalog;
pub mod types;
