//! # Signature Verification
//!
//! Deterministic action hashing and ECDSA signer recovery for multi-owner
//! accounts. This crate is pure: no I/O, no logging, no state.
//!
//! ## Components
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | `hashing` | Keccak-256, the action digest, the signed-message wrap |
//! | `ecdsa` | Scalar validation, malleability checks, public-key recovery |
//! | `entities` | The 65-byte `r ‖ s ‖ v` signature wire type |
//! | `errors` | `SignatureError` |
//!
//! ## Security Notes
//!
//! - **Malleability Prevention (EIP-2)**: signatures with high S values are
//!   rejected before recovery is attempted
//! - **Scalar Range Validation**: R and S must be in `[1, n-1]`
//! - **Constant-Time Comparisons**: scalar checks use the `subtle` crate
//! - Recovery never decides owner membership; callers own that check

pub mod ecdsa;
pub mod entities;
pub mod errors;
pub mod hashing;

// Re-export public API
pub use ecdsa::{address_from_pubkey, invert_s, recover_address, recover_signer};
pub use entities::{EcdsaSignature, SIGNATURE_LENGTH};
pub use errors::SignatureError;
pub use hashing::{keccak256, signed_message_hash, transaction_hash};
