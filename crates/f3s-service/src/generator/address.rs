//! Street address generator.

use rand::Rng;
use serde::{Deserialize, Serialize};

const STREETS: [&str; 5] = ["Main St", "Broadway", "Park Ave", "Market St", "Oak St"];
const CITIES: [&str; 5] = ["New York", "Los Angeles", "Chicago", "Houston", "Phoenix"];
const STATES: [&str; 5] = ["NY", "CA", "IL", "TX", "AZ"];
const ZIP_CODES: [&str; 5] = ["10001", "90001", "60601", "77001", "85001"];

/// A generated address. City, state, and ZIP always belong together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

pub fn generate() -> Address {
    let mut rng = rand::thread_rng();
    let number = rng.gen_range(1..=1000);
    let index = rng.gen_range(0..STREETS.len());

    Address {
        street: format!("{number} {}", STREETS[index]),
        city: CITIES[index].to_string(),
        state: STATES[index].to_string(),
        zip_code: ZIP_CODES[index].to_string(),
    }
}
