//! # Shared Types Crate
//!
//! Domain value objects shared across the MultiSig workspace.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: the verifier, the account engine, and the
//!   registry all speak in these types; no crate redefines an address or a
//!   digest locally.
//! - **Values, not identities**: everything here is compared by content and
//!   cheap to copy or clone.

pub mod entities;

pub use entities::*;
