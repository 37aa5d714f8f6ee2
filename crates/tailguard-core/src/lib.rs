//! # tailguard-core
//!
//! Shared vocabulary for the tailguard latency guardrail: the parsed input
//! records, the gate decision, one error enum per failure domain, the layered
//! configuration resolver, and tracing setup.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;
