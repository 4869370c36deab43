use rand::distr::Alphanumeric;
use rand::Rng;

use crate::view::SecurityToken;

/// Length of generated tokens.
const NONCE_LEN: usize = 32;

/// Fresh per-page security token (alphanumeric, so always CSP-safe).
#[must_use]
pub fn generate_nonce() -> SecurityToken {
    let mut rng = rand::rng();
    let token: String = (0..NONCE_LEN)
        .map(|_| char::from(rng.sample(Alphanumeric)))
        .collect();
    SecurityToken::from(token)
}
