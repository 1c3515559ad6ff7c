//! Built-in dealership inventory for development and tests.

use indexmap::IndexMap;
use serde_json::json;
use sr_protocol::inventory::CarModel;

use crate::catalog::InventoryCatalog;

fn car(model: &str, year: u16, price: u32, fuel: &str, seats: u8) -> CarModel {
    CarModel::new(model)
        .with_attribute("year", year)
        .with_attribute("price", price)
        .with_attribute("fuel", json!(fuel))
        .with_attribute("seats", seats)
}

/// Sample catalog: SUV, Sedan and Truck with a handful of models each.
pub fn sample_inventory() -> InventoryCatalog {
    let mut categories = IndexMap::new();
    categories.insert(
        "SUV".to_string(),
        vec![
            car("RAV4 Hybrid", 2024, 33000, "hybrid", 5),
            car("Highlander", 2024, 39500, "gasoline", 8),
            car("4Runner", 2025, 42000, "gasoline", 7),
        ],
    );
    categories.insert(
        "Sedan".to_string(),
        vec![
            car("Camry", 2025, 28500, "hybrid", 5),
            car("Corolla", 2024, 22500, "gasoline", 5),
        ],
    );
    categories.insert(
        "Truck".to_string(),
        vec![
            car("Tacoma", 2024, 32000, "gasoline", 5),
            car("Tundra", 2025, 41000, "gasoline", 6),
        ],
    );
    InventoryCatalog::new(categories)
}
