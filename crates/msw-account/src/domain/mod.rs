//! # Domain Layer
//!
//! Pure account logic. No I/O, no logging, no collaborator types beyond the
//! outbound port; every function here is deterministic over its inputs.

pub mod engine;
pub mod entities;
pub mod governance;
pub mod invariants;
