//! Error types for the docsmith core.
//!
//! The index model has almost no failure surface: scanners guarantee
//! well-formed facts, a duplicate definition is suppressed by policy rather
//! than rejected, and accessor shape mismatches are ruled out by the slot
//! sum types. What remains is input validation at the builder boundary.

use thiserror::Error;

/// Unified error type for the core index model.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A scanner fact arrived with an empty symbol name.
    ///
    /// Scanners must emit non-empty symbol names; an empty name would
    /// create an unaddressable index entry.
    #[error("symbol name must not be empty (fact from file '{file}')")]
    EmptySymbol {
        /// File the offending fact was scanned from.
        file: String,
    },
}
