//! # Outbound Ports
//!
//! The engine's only dependency on the outside world: dispatching a verified
//! transaction to its destination. Everything else (verification, quorum,
//! sequencing, rollback) stays inside the domain.

use shared_types::{Address, Bytes, U256};
use thiserror::Error;

/// Parameters of a single outbound invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallContext {
    /// Where the invocation is directed.
    pub destination: Address,
    /// Funds to transfer alongside the invocation.
    pub value: U256,
    /// Opaque payload forwarded to the destination.
    pub payload: Bytes,
}

/// A destination reported failure for the invocation.
///
/// The engine treats every failure identically: full rollback, generic
/// execution error. The reason is retained for the destination's own
/// diagnostics only.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("call to destination failed: {reason}")]
pub struct CallFailure {
    pub reason: String,
}

impl CallFailure {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Destination of a verified transaction.
///
/// The engine hands itself to the target mutably, so a destination may call
/// back into the account (deposits, further executes). Re-entrant executions
/// see the already-advanced sequence counter and fresh balances, never the
/// pre-dispatch state.
pub trait CallTarget: Send + Sync {
    /// Perform the invocation, returning the destination's result bytes.
    fn call(
        &mut self,
        account: &mut crate::domain::engine::AccountEngine,
        ctx: CallContext,
    ) -> Result<Bytes, CallFailure>;
}
