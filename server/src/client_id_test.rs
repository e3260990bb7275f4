use super::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn generate_has_fixed_length_and_base36_alphabet() {
    let id = generate();
    assert_eq!(id.len(), CLIENT_ID_LEN);
    assert!(id.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
}

#[test]
fn generate_with_seeded_rng_is_deterministic() {
    let a = generate_with(&mut StdRng::seed_from_u64(7));
    let b = generate_with(&mut StdRng::seed_from_u64(7));
    assert_eq!(a, b);
}

#[test]
fn generate_yields_distinct_ids() {
    let ids: std::collections::HashSet<String> = (0..64).map(|_| generate()).collect();
    assert_eq!(ids.len(), 64);
}
