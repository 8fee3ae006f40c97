//! # Ports
//!
//! Boundary traits the engine depends on. Implementations live with the
//! caller, keeping the domain free of collaborator specifics.

pub mod outbound;
