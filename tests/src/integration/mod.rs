//! # Integration Flows
//!
//! End-to-end scenarios driving the registry, engines, and verifier together
//! through the public surface only. Nothing in here reaches into crate
//! internals; every effect is observed the way a host application would
//! observe it.

pub mod governance_flows;
