//! Static event and store catalogs.
//!
//! Compiled-in defaults matching the reference demo; both lists can be
//! overridden from the TOML config file.

use crate::domain::types::{Event, Store};

/// The fixed styling-event catalog shown by the event picker
pub fn default_events() -> Vec<Event> {
    vec![
        event(1, "Wedding", "Formal attire for a wedding celebration"),
        event(2, "Birthday Party", "Casual to semi-formal wear for a birthday celebration"),
        event(3, "Job Interview", "Professional attire for a job interview"),
        event(4, "Date Night", "Stylish outfit for a romantic evening"),
        event(5, "Beach Day", "Comfortable and cool outfit for a day at the beach"),
    ]
}

/// The fixed store catalog the sequencer iterates, in search order
pub fn default_stores() -> Vec<Store> {
    vec![
        store("store1", "FashionNova", "https://www.fashionnova.com"),
        store("store2", "Amazon Fashion", "https://www.amazon.com/fashion"),
        store("store3", "ASOS", "https://www.asos.com"),
        store("store4", "Zara", "https://www.zara.com"),
    ]
}

fn event(id: i64, name: &str, description: &str) -> Event {
    Event { id, name: name.to_string(), description: description.to_string(), vibe: None }
}

fn store(id: &str, name: &str, url: &str) -> Store {
    Store { id: id.to_string(), name: name.to_string(), url: url.to_string() }
}
