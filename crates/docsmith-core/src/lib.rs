//! Core index model for docsmith.
//!
//! This crate provides the in-memory data model docsmith builds while
//! scanning documentation comments, before any output is rendered:
//! - [`SymbolIndex`]: one index entry per documented symbol, routed from
//!   scanner facts
//! - [`IndexElement`]: the entry itself, a tree that branches only where the
//!   scanned code actually fans out
//! - [`ClassRegistry`] / [`FileRegistries`]: per-file class-to-parent
//!   tracking
//! - Shared value types for scanner facts and cross-reference targets
//!
//! Scanners feed facts in during a single ingestion pass; the renderer walks
//! the sorted result read-only. Cross-file hierarchy resolution and output
//! generation live in other crates.

pub mod error;
pub mod hierarchy;
pub mod index;
pub mod text;
pub mod types;

pub use error::CoreError;
pub use hierarchy::{ClassRegistry, FileRegistries};
pub use index::{ClassSlot, FileSlot, IndexElement, SymbolIndex};
pub use types::{Definition, ReferenceTarget, SymbolFact};
