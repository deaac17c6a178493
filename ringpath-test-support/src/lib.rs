//! Shared test utilities used across ringpath crates.

pub mod ci;
pub mod tracing;
