//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure statistical reductions used by the transform
//! kernels:
//! - Mean and population standard deviation
//! - Slice extrema (minimum and maximum)
//!
//! These are reusable building blocks with no transform-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Mean and population standard deviation.
pub mod moments;

/// Slice minimum and maximum.
pub mod extrema;
