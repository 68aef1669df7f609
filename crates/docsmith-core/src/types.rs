//! Shared value types for the index model.
//!
//! These are the flat, immutable payloads that flow between the scanner,
//! the index tree, and the renderer:
//! - [`SymbolFact`]: one scanner-emitted definition fact
//! - [`Definition`]: the terminal payload stored at a non-branching point of
//!   an index entry
//! - [`ReferenceTarget`]: the destination of a resolved cross-reference

use serde::{Deserialize, Serialize};

// ============================================================================
// Definition
// ============================================================================

/// Terminal payload attached at the most specific non-branching point of a
/// symbol's index entry.
///
/// Once stored, a definition is never overwritten: a later fact for the same
/// `(class, file)` pair is dropped, so the first scanned definition stands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    /// Topic kind tag ("function", "variable", "property", ...).
    pub kind: String,
    /// Declaration prototype, when the scanner captured one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prototype: Option<String>,
    /// Summary extracted from the documentation comment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl Definition {
    /// Create a definition with neither prototype nor summary.
    pub fn new(kind: impl Into<String>) -> Self {
        Definition {
            kind: kind.into(),
            prototype: None,
            summary: None,
        }
    }

    /// Attach a prototype.
    pub fn with_prototype(mut self, prototype: impl Into<String>) -> Self {
        self.prototype = Some(prototype.into());
        self
    }

    /// Attach a summary.
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }
}

// ============================================================================
// SymbolFact
// ============================================================================

/// One definition fact discovered during source scanning.
///
/// A fact says: symbol `symbol`, optionally belonging to class `class`,
/// is defined in file `file` with kind `kind`, and optionally carries a
/// prototype and a summary. `class = None` is the global scope.
///
/// Facts are applied to the index in scanner order; order only matters for
/// the first-wins tie-break on duplicate `(class, file)` pairs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolFact {
    /// Symbol name (non-empty).
    pub symbol: String,
    /// Owning class, or `None` for the global scope.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    /// File the definition was scanned from.
    pub file: String,
    /// Topic kind tag.
    pub kind: String,
    /// Declaration prototype, when captured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prototype: Option<String>,
    /// Summary, when captured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl SymbolFact {
    /// Create a global-scope fact with neither prototype nor summary.
    pub fn new(symbol: impl Into<String>, file: impl Into<String>, kind: impl Into<String>) -> Self {
        SymbolFact {
            symbol: symbol.into(),
            class: None,
            file: file.into(),
            kind: kind.into(),
            prototype: None,
            summary: None,
        }
    }

    /// Scope this fact to a class.
    pub fn in_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Attach a prototype.
    pub fn with_prototype(mut self, prototype: impl Into<String>) -> Self {
        self.prototype = Some(prototype.into());
        self
    }

    /// Attach a summary.
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }
}

// ============================================================================
// ReferenceTarget
// ============================================================================

/// Destination of a resolved cross-reference.
///
/// Produced by symbol lookup (outside this crate) and consumed by the
/// renderer when it emits a link. Carries everything the renderer needs to
/// describe the target without a second lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceTarget {
    /// Target symbol name.
    pub symbol: String,
    /// Owning class of the target, or `None` for the global scope.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    /// File the target is defined in.
    pub file: String,
    /// Topic kind tag of the target.
    pub kind: String,
    /// Declaration prototype, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prototype: Option<String>,
    /// Summary, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl ReferenceTarget {
    /// Create a global-scope target with neither prototype nor summary.
    pub fn new(symbol: impl Into<String>, file: impl Into<String>, kind: impl Into<String>) -> Self {
        ReferenceTarget {
            symbol: symbol.into(),
            class: None,
            file: file.into(),
            kind: kind.into(),
            prototype: None,
            summary: None,
        }
    }

    /// Scope this target to a class.
    pub fn in_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Attach a prototype.
    pub fn with_prototype(mut self, prototype: impl Into<String>) -> Self {
        self.prototype = Some(prototype.into());
        self
    }

    /// Attach a summary.
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }
}
