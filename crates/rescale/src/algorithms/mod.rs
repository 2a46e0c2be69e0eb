//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer provides the three per-slice transform kernels. Each kernel
//! reads one independent slice and writes the transformed values into an
//! output buffer of the same length; axis handling and validation live in
//! the engine layer above.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Standard (z-score) scaling kernel.
pub mod zscore;

/// Min-max scaling kernel.
pub mod minmax;

/// Average-rank transform kernel.
pub mod ranks;
