//! Order id generation

use rand::Rng;

use crate::utils::{PosError, PosResult};

const ID_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

pub const ORDER_ID_LEN: usize = 8;

/// Attempts before giving up on a fresh id
pub const MAX_ID_ATTEMPTS: usize = 16;

/// 8 characters drawn uniformly from `A-Z0-9`
pub fn random_order_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..ORDER_ID_LEN)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect()
}

/// Draw ids until one is not `taken`
pub fn mint_order_id<R, F>(rng: &mut R, taken: F) -> PosResult<String>
where
    R: Rng + ?Sized,
    F: Fn(&str) -> bool,
{
    for attempt in 1..=MAX_ID_ATTEMPTS {
        let id = random_order_id(rng);
        if !taken(&id) {
            return Ok(id);
        }
        tracing::warn!(order_id = %id, attempt, "Order id collision, regenerating");
    }
    Err(PosError::Conflict(format!(
        "could not generate a unique order id after {MAX_ID_ATTEMPTS} attempts"
    )))
}
