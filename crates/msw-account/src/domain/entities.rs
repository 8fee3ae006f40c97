//! # Domain Entities
//!
//! Construction parameters and execution results. The engine itself lives in
//! [`super::engine`]; these are the values that cross its boundary.

use serde::{Deserialize, Serialize};
use shared_types::{Address, Bytes, Digest, U256};

/// Parameters for instantiating an account engine.
///
/// Validated as a whole before any engine exists: owner set and quorum are
/// checked together so a half-built account can never be observed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountParams {
    /// Account address within its domain.
    pub address: Address,
    /// Domain identifier salted into every transaction digest.
    pub domain_id: u64,
    /// Initial owner set, order preserved as given.
    pub owners: Vec<Address>,
    /// Signatures required to execute.
    pub quorum: u64,
    /// Balance the account starts with. Credited silently, without a
    /// deposit event, mirroring funding at creation time.
    pub funding: U256,
}

/// Outcome of a successful execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionRecord {
    /// Digest the signers authorized.
    pub digest: Digest,
    /// Sequence value the transaction consumed.
    pub sequence: u64,
    /// Bytes returned by the destination.
    pub result: Bytes,
}
