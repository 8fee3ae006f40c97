//! # Signature Errors
//!
//! Error types for hashing and signer recovery.

use thiserror::Error;

/// Errors that can occur while decoding or recovering a signature.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SignatureError {
    /// The signature encoding has the wrong length (must be 65 bytes)
    #[error("Invalid signature length: {0} (expected 65)")]
    InvalidLength(usize),

    /// R or S is zero or not below the curve order
    #[error("Signature scalar out of range")]
    InvalidScalar,

    /// Signature has high S value (EIP-2 malleability protection)
    #[error("Malleable signature (high S value)")]
    MalleableSignature,

    /// Invalid recovery ID (v must be 0, 1, 27, or 28)
    #[error("Invalid recovery ID: {0}")]
    InvalidRecoveryId(u8),

    /// Failed to recover a public key from the signature
    #[error("Failed to recover public key")]
    RecoveryFailed,
}
