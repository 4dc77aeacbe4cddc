//! Random record identifiers

use rand::Rng;

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Length of generated identifiers
pub const ID_LEN: usize = 9;

/// Generate a random 9-character base-36 identifier
pub fn generate_id() -> String {
    generate_id_with(&mut rand::thread_rng())
}

/// Generate an identifier from a caller-supplied RNG (seeded generation)
pub fn generate_id_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..ID_LEN)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}
