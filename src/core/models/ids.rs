//! Identifier helpers shared by results and access codes

use rand::Rng;

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Milliseconds since the Unix epoch
pub fn unix_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// `len` random lowercase base36 characters
///
/// Not cryptographically strong; collisions are unlikely, not impossible.
pub fn random_base36(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len).map(|_| char::from(BASE36[rng.gen_range(0..BASE36.len())])).collect()
}
