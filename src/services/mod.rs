//! Business logic - profile form, event picker, outfit generation,
//! search sequencing, and the session orchestrator

pub mod generator;
pub mod picker;
pub mod profile;
pub mod sequencer;
pub mod session;

pub use generator::OutfitGenerator;
pub use picker::EventPicker;
pub use profile::{ProfileError, ProfileForm};
pub use sequencer::{SearchSequencer, SearchUpdate};
pub use session::{Phase, StylistSession};
