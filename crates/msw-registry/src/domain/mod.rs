//! # Registry Domain
//!
//! Pure pieces of the registry: creation records and address derivation.

pub mod entities;
