//! # Structural Invariants
//!
//! Checks shared by account construction and the governance mutators. Both
//! paths must agree on what a well-formed owner set and quorum look like, so
//! the rules live here once.
//!
//! | Invariant | Rule |
//! |-----------|------|
//! | Owner set | Non-empty, no zero address, no duplicates |
//! | Quorum | `1 <= quorum <= owner_count` at all times |

use crate::errors::ValidationError;
use shared_types::Address;
use std::collections::HashSet;

/// Validate a prospective owner set.
///
/// Rejects empty sets, the zero address, and duplicate entries. Order is
/// not constrained; the caller preserves it.
#[must_use = "invariant violations must be handled"]
pub fn check_owner_set(owners: &[Address]) -> Result<(), ValidationError> {
    if owners.is_empty() {
        return Err(ValidationError::EmptyOwnerSet);
    }

    let mut seen = HashSet::with_capacity(owners.len());
    for owner in owners {
        if owner.is_zero() {
            return Err(ValidationError::NullOwner);
        }
        if !seen.insert(*owner) {
            return Err(ValidationError::DuplicateOwner(*owner));
        }
    }

    Ok(())
}

/// Validate a quorum against an owner count.
///
/// Callers pass the count the set will have AFTER their change, so a
/// removal checks against `len - 1` and an addition against `len + 1`.
#[must_use = "invariant violations must be handled"]
pub fn check_quorum_bounds(quorum: u64, owner_count: u64) -> Result<(), ValidationError> {
    if quorum == 0 || quorum > owner_count {
        return Err(ValidationError::QuorumOutOfBounds { quorum, owner_count });
    }

    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
