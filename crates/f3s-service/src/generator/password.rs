//! Password generator.

use rand::seq::SliceRandom;

/// Characters a generated password is drawn from.
pub const CHARSET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*()_+";

/// A password of exactly `length` characters from [`CHARSET`].
pub fn generate(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .filter_map(|_| CHARSET.choose(&mut rng).map(|&b| b as char))
        .collect()
}
