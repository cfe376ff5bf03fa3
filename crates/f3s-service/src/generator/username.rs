//! Username generator.

use rand::Rng;
use rand::seq::SliceRandom;

pub const ADJECTIVES: [&str; 10] = [
    "Swift", "Silent", "Brave", "Clever", "Lucky", "Mighty", "Nimble", "Fierce", "Jolly", "Wise",
];

pub const NOUNS: [&str; 10] = [
    "Tiger", "Falcon", "Lion", "Wolf", "Eagle", "Shark", "Panther", "Bear", "Fox", "Hawk",
];

/// `AdjectiveNoun`, plus a number in `10..=99` when `include_number` is set.
pub fn generate(include_number: bool) -> String {
    let mut rng = rand::thread_rng();
    let adjective = ADJECTIVES.choose(&mut rng).copied().unwrap_or("Swift");
    let noun = NOUNS.choose(&mut rng).copied().unwrap_or("Fox");

    if include_number {
        format!("{adjective}{noun}{}", rng.gen_range(10..=99))
    } else {
        format!("{adjective}{noun}")
    }
}
