//! # Account Registry
//!
//! Factory and directory for multi-owner accounts within one domain. The
//! registry owns the engines it creates, keeps an append-only record per
//! creation, and answers membership queries in O(1).
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | `domain` | Creation records and deterministic address derivation |
//! | `service` | The registry itself plus its logging seam |
//! | `errors` | Registry error taxonomy |
//!
//! The registry is an owned value. Callers construct as many as they need
//! (one per domain, typically) and hold them wherever suits their wiring;
//! nothing here is global or shared.

pub mod domain;
pub mod errors;
pub mod service;

pub use domain::entities::{derive_address, AccountRecord};
pub use errors::RegistryError;
pub use service::Registry;
