//! Error types for rescale operations.
//!
//! ## Purpose
//!
//! This module defines error conditions that can occur during array
//! transformation, covering input validation, parameter constraints, and
//! container construction.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., the offending interval bounds).
//! * **Deferred**: Builder misconfiguration is caught and reported at `build()`.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Empty arrays or empty slices along the selected axis.
//! 2. **Parameter validation**: Malformed target intervals, duplicate builder parameters.
//! 3. **Container construction**: Buffer length must match the declared shape.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Numeric degeneracies (zero variance, zero range) are absorbed by
//!   documented fallback policies and never appear here.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for rescale operations.
#[derive(Debug, Clone, PartialEq)]
pub enum RescaleError {
    /// Input is empty, or the selected axis yields zero-length slices;
    /// mean, extrema, and ranks are undefined for an empty collection.
    EmptyInput,

    /// Generic invalid input error with a descriptive message.
    InvalidInput(String),

    /// Target interval bounds must satisfy `lo < hi` and be finite.
    InvalidInterval {
        /// Lower bound of the requested interval.
        lo: f64,
        /// Upper bound of the requested interval.
        hi: f64,
    },

    /// Matrix buffer length does not match the declared shape.
    DimensionMismatch {
        /// `rows * cols` implied by the declared shape.
        expected: usize,
        /// Number of elements actually provided.
        got: usize,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for RescaleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input array is empty"),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::InvalidInterval { lo, hi } => {
                write!(f, "Invalid interval: [{lo}, {hi}] (must be finite with lo < hi)")
            }
            Self::DimensionMismatch { expected, got } => {
                write!(f, "Dimension mismatch: shape implies {expected} elements, got {got}")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for RescaleError {}
