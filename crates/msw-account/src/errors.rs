//! # Error Types
//!
//! The engine's error taxonomy. Every failure is reported synchronously to
//! the submitter; none leaves partial state behind.

use msw_signature::SignatureError;
use shared_types::Address;
use thiserror::Error;

// =============================================================================
// VALIDATION ERRORS
// =============================================================================

/// Malformed construction or governance parameters.
///
/// Shared by account creation (checked before instantiation) and the
/// internal governance mutators (checked before any membership change).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The owner set is empty (or a removal would empty it).
    #[error("Owner set must not be empty")]
    EmptyOwnerSet,

    /// An owner is the zero address.
    #[error("Owner must not be the zero address")]
    NullOwner,

    /// The same owner appears twice.
    #[error("Owner already exists: {0:?}")]
    DuplicateOwner(Address),

    /// A governance change names an identity that is not an owner.
    #[error("Owner not found: {0:?}")]
    UnknownOwner(Address),

    /// Quorum outside `[1, owner_count]`.
    #[error("Quorum {quorum} out of bounds for {owner_count} owner(s)")]
    QuorumOutOfBounds { quorum: u64, owner_count: u64 },
}

// =============================================================================
// ENGINE ERRORS
// =============================================================================

/// Errors surfaced by the execute pipeline.
///
/// Each variant corresponds to one gate; a later gate is never reached once
/// an earlier one fails, and no gate mutates state before the dispatch step.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineError {
    /// The submitting party is not a current owner.
    #[error("Submitter is not an owner: {0:?}")]
    NotOwner(Address),

    /// A signature failed to decode or recover.
    #[error("Signature rejected: {0}")]
    Signature(#[from] SignatureError),

    /// Recovered signers were not in strictly increasing order; covers both
    /// duplicated signers and unsorted submissions.
    #[error("Signer at position {position} is duplicated or out of order")]
    UnsortedOrDuplicateSigner { position: usize },

    /// Fewer valid owner signatures than the quorum requires.
    #[error("Required signatures not met: {valid} valid of {required} required")]
    BelowQuorum { valid: u64, required: u64 },

    /// The destination invocation failed; all state was rolled back. The
    /// underlying cause (collaborator fault, insufficient balance, rejected
    /// governance change) is deliberately not distinguished here.
    #[error("Destination invocation failed, execution rolled back")]
    ExecutionFailed,
}
