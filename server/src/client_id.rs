//! Per-render client identifiers.
//!
//! Each page render gets a fresh identifier so every mounted feed can be told
//! apart in the UI. Identifiers are labels only and are never sent to the
//! block server.

use rand::Rng;

const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
pub const CLIENT_ID_LEN: usize = 11;

/// Random lowercase base36 identifier of [`CLIENT_ID_LEN`] characters.
pub fn generate() -> String {
    generate_with(&mut rand::rng())
}

pub fn generate_with(rng: &mut impl Rng) -> String {
    (0..CLIENT_ID_LEN)
        .map(|_| char::from(ALPHABET[rng.random_range(0..ALPHABET.len())]))
        .collect()
}

#[cfg(test)]
#[path = "client_id_test.rs"]
mod tests;
