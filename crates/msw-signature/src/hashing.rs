//! # Action Hashing (Keccak-256)
//!
//! Builds the digest owners sign: a deterministic, collision-resistant hash
//! over one action, salted with the account address and the domain id so a
//! digest binds to exactly one account, one deployment, and one sequence
//! value.
//!
//! ## Digest layout
//!
//! Keccak-256 over the fixed-width concatenation
//!
//! ```text
//! account (20) ‖ domain_id (u64 BE, 8) ‖ sequence (u64 BE, 8)
//!   ‖ destination (20) ‖ value (U256 BE, 32) ‖ payload (raw)
//! ```
//!
//! Every field before the payload has a fixed width, so distinct tuples can
//! never concatenate to the same byte string.

use sha3::{Digest as _, Keccak256};
use shared_types::{Address, Digest, U256};

/// Prefix of the signed-message wrap (EIP-191, 32-byte payload).
const SIGNED_MESSAGE_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n32";

/// Keccak-256 hash function.
#[must_use]
pub fn keccak256(data: &[u8]) -> Digest {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&result);
    Digest::new(hash)
}

/// Computes the digest of one action request.
///
/// Pure function of `(account, domain_id, sequence, destination, value,
/// payload)`; changing any single field changes the digest.
#[must_use]
pub fn transaction_hash(
    account: Address,
    domain_id: u64,
    sequence: u64,
    destination: Address,
    value: U256,
    payload: &[u8],
) -> Digest {
    let mut value_bytes = [0u8; 32];
    value.to_big_endian(&mut value_bytes);

    let mut hasher = Keccak256::new();
    hasher.update(account.as_bytes());
    hasher.update(domain_id.to_be_bytes());
    hasher.update(sequence.to_be_bytes());
    hasher.update(destination.as_bytes());
    hasher.update(value_bytes);
    hasher.update(payload);

    let result = hasher.finalize();
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&result);
    Digest::new(hash)
}

/// Wraps an action digest in the signed-message envelope.
///
/// Owners sign `keccak256(prefix ‖ digest)`, not the raw digest, so a
/// collected signature can never double as a signature over arbitrary
/// protocol data.
#[must_use]
pub fn signed_message_hash(digest: &Digest) -> Digest {
    let mut hasher = Keccak256::new();
    hasher.update(SIGNED_MESSAGE_PREFIX);
    hasher.update(digest.as_bytes());
    let result = hasher.finalize();
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&result);
    Digest::new(hash)
}

// =============================================================================
// TESTS
// =============================================================================
