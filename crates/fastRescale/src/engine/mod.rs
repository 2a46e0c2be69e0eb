//! Parallel execution engine.
//!
//! This layer distributes independent per-slice transform work across CPU
//! cores, mirroring the sequential axis executor of the core crate.

// Parallel execution engine using CPU threads
pub mod executor;
