//! # Account Events
//!
//! Observable facts appended by the engine in the order they occurred.
//! Rollback truncates back to the pre-execution length, so the log never
//! records effects of a failed execution.

use serde::{Deserialize, Serialize};
use shared_types::{Address, Bytes, Digest, U256};

/// An event recorded by the account engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountEvent {
    /// Funds credited to the account.
    Deposit {
        sender: Address,
        amount: U256,
        balance: U256,
    },

    /// A transaction passed every gate and its dispatch succeeded.
    Executed {
        owner: Address,
        destination: Address,
        value: U256,
        payload: Bytes,
        sequence: u64,
        digest: Digest,
        result: Bytes,
    },

    /// The owner set changed through a governance action.
    OwnerChanged { owner: Address, added: bool },
}
