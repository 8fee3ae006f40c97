//! # Registry Errors

use msw_account::{EngineError, ValidationError};
use shared_types::Address;
use thiserror::Error;

/// Errors surfaced by the registry and its pass-through operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// Creation parameters rejected; nothing was registered.
    #[error("Invalid account parameters: {0}")]
    Validation(#[from] ValidationError),

    /// A record lookup past the end of the log.
    #[error("Account index {index} out of range ({count} account(s) registered)")]
    IndexOutOfRange { index: u64, count: u64 },

    /// The address is not managed by this registry.
    #[error("No account registered at {0:?}")]
    UnknownAccount(Address),

    /// The engine rejected a pass-through call.
    #[error(transparent)]
    Engine(#[from] EngineError),
}
