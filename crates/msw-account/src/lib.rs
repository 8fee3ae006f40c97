//! # Account Engine
//!
//! A self-custodial, multi-owner authorization account: it acts only when a
//! quorum of owners has signed the exact action requested, and it amends its
//! own membership and quorum through that same signature-gated pathway.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): the engine state machine, owner-set and
//!   quorum invariants, and the governance action codec. Pure logic, no I/O.
//! - **Ports Layer** (`ports/`): the `CallTarget` trait through which the
//!   engine invokes external collaborators; the host implements it.
//! - `errors.rs` / `events.rs`: the error taxonomy and the in-memory event
//!   journal.
//!
//! ## Execution contract
//!
//! `execute` is all-or-nothing. The sequence counter advances before the
//! destination is invoked, so a reentrant callback can never consume the
//! same sequence value twice; any dispatch failure rolls every mutation
//! back in one piece.

pub mod domain;
pub mod errors;
pub mod events;
pub mod ports;

// Re-export public API
pub use domain::engine::AccountEngine;
pub use domain::entities::{AccountParams, ExecutionRecord};
pub use domain::governance::GovernanceAction;
pub use errors::{EngineError, ValidationError};
pub use events::AccountEvent;
pub use ports::outbound::{CallContext, CallFailure, CallTarget};
