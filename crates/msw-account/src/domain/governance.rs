//! # Governance Actions
//!
//! Membership and quorum changes travel through the same execute pipeline as
//! any other transaction: encoded into a payload, signed by a quorum, and
//! dispatched with the account itself as destination. There is no direct
//! mutator surface, so an unauthorized caller has nothing to invoke.

use serde::{Deserialize, Serialize};
use shared_types::{Address, Bytes};

/// A self-targeted administrative action.
///
/// Each variant that changes the owner count carries the quorum that must
/// hold afterwards, so membership and threshold always move atomically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GovernanceAction {
    /// Add `owner` and set the quorum for the enlarged set.
    AddOwner { owner: Address, quorum: u64 },
    /// Remove `owner` and set the quorum for the reduced set.
    RemoveOwner { owner: Address, quorum: u64 },
    /// Change the quorum without touching membership.
    UpdateQuorum { quorum: u64 },
}

impl GovernanceAction {
    /// Serialize into an execute payload.
    #[must_use]
    pub fn encode(&self) -> Bytes {
        Bytes::from_vec(bincode::serialize(self).unwrap_or_default())
    }

    /// Parse a self-targeted payload. Returns `None` for anything that is
    /// not a well-formed action, which the engine reports as a failed
    /// execution.
    #[must_use]
    pub fn decode(payload: &[u8]) -> Option<Self> {
        bincode::deserialize(payload).ok()
    }
}

// =============================================================================
// TESTS
// =============================================================================
