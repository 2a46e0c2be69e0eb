//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer provides validation and axis-wise execution control:
//! - Fail-fast checks for input data and configuration parameters
//! - Per-slice iteration over an axis, gathering strided columns and
//!   scattering results back
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Input and parameter validation.
pub mod validator;

/// Axis-wise kernel execution.
pub mod executor;
