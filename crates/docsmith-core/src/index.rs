//! The symbol index tree.
//!
//! docsmith presents each documented symbol as one index entry that stays as
//! flat as the scanned code allows: a level fans out into children only when
//! more than one distinct class (or file) defines the symbol at that level.
//! [`IndexElement`] is the recursive node implementing that collapse and
//! promotion behavior; [`SymbolIndex`] owns one element per symbol name and
//! routes scanner facts to them.
//!
//! # Shape contract
//!
//! A node's slots tell the renderer everything it needs:
//! - [`ClassSlot::Single`] / [`FileSlot::Single`]: no sub-listing at this
//!   level; the payload is readable directly on this node.
//! - `Multiple`: a nested sub-listing; the payload lives on the children and
//!   this node's definition is `None`.
//!
//! A node never holds both a definition and a `Multiple` slot. Children
//! created by promotion never repeat the ancestor's symbol, and they drop
//! whichever of class/file the ancestor already fixes.
//!
//! # Merge policy
//!
//! Re-scanning a `(class, file)` pair already present for a symbol keeps the
//! first definition and drops the rest, even when the later fact carries a
//! different kind or fuller documentation. Merging does not maintain sort
//! order; [`IndexElement::sort`] (or [`SymbolIndex::sort`]) runs once after
//! ingestion.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::CoreError;
use crate::text::{compare_names, compare_scopes};
use crate::types::{Definition, SymbolFact};

// ============================================================================
// Slots
// ============================================================================

/// Class dimension of an index node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassSlot {
    /// An ancestor already fixed the class; this node only refines the file.
    Absent,
    /// Exactly one class defines the symbol at this level. `None` is the
    /// global scope.
    Single(Option<String>),
    /// More than one class defines the symbol; one child per class.
    Multiple(Vec<IndexElement>),
}

impl ClassSlot {
    /// Scalar class name of a `Single` slot, or `None` for the other shapes.
    ///
    /// The inner `Option` distinguishes a named class from the global scope.
    pub fn as_single(&self) -> Option<Option<&str>> {
        match self {
            ClassSlot::Single(name) => Some(name.as_deref()),
            _ => None,
        }
    }

    /// Children of a `Multiple` slot, or `None` for the scalar shapes.
    pub fn children(&self) -> Option<&[IndexElement]> {
        match self {
            ClassSlot::Multiple(children) => Some(children),
            _ => None,
        }
    }

    /// Whether this slot branches into children.
    pub fn is_multiple(&self) -> bool {
        matches!(self, ClassSlot::Multiple(_))
    }
}

/// File dimension of an index node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileSlot {
    /// An ancestor already fixed the file.
    Absent,
    /// Exactly one file defines the symbol at this level.
    Single(String),
    /// More than one file defines the symbol; one child per file.
    Multiple(Vec<IndexElement>),
}

impl FileSlot {
    /// Scalar file name of a `Single` slot, or `None` for the other shapes.
    pub fn as_single(&self) -> Option<&str> {
        match self {
            FileSlot::Single(name) => Some(name),
            _ => None,
        }
    }

    /// Children of a `Multiple` slot, or `None` for the scalar shapes.
    pub fn children(&self) -> Option<&[IndexElement]> {
        match self {
            FileSlot::Multiple(children) => Some(children),
            _ => None,
        }
    }

    /// Whether this slot branches into children.
    pub fn is_multiple(&self) -> bool {
        matches!(self, FileSlot::Multiple(_))
    }
}

// ============================================================================
// IndexElement
// ============================================================================

/// One entry in the symbol index.
///
/// At the top level an element carries its symbol name and covers every
/// scanned definition of that symbol. Inside a `Multiple` slot the same type
/// serves as a child keyed by its class (or file), with the fields the
/// ancestor already fixed left out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexElement {
    /// Symbol name; present only at the root of a symbol's sub-tree.
    #[serde(skip_serializing_if = "Option::is_none")]
    symbol: Option<String>,
    class: ClassSlot,
    file: FileSlot,
    /// Present only when both slots are non-branching.
    #[serde(skip_serializing_if = "Option::is_none")]
    definition: Option<Definition>,
}

impl IndexElement {
    /// Create the entry for a symbol's first discovered definition.
    ///
    /// `class = None` is the global scope. The symbol name must be non-empty;
    /// [`SymbolIndex::add`] validates this before construction.
    pub fn new_leaf(
        symbol: impl Into<String>,
        class: Option<String>,
        file: impl Into<String>,
        definition: Definition,
    ) -> Self {
        IndexElement {
            symbol: Some(symbol.into()),
            class: ClassSlot::Single(class),
            file: FileSlot::Single(file.into()),
            definition: Some(definition),
        }
    }

    /// Child inside a class list: the symbol is implied by the ancestor.
    fn class_child(class: Option<String>, file: String, definition: Definition) -> Self {
        IndexElement {
            symbol: None,
            class: ClassSlot::Single(class),
            file: FileSlot::Single(file),
            definition: Some(definition),
        }
    }

    /// Child inside a file list: symbol and class are implied by ancestors.
    fn file_child(file: String, definition: Definition) -> Self {
        IndexElement {
            symbol: None,
            class: ClassSlot::Absent,
            file: FileSlot::Single(file),
            definition: Some(definition),
        }
    }

    // ------------------------------------------------------------------
    // Merging
    // ------------------------------------------------------------------

    /// Fold another occurrence of this element's symbol into the tree.
    ///
    /// Valid on symbol-level nodes (the elements [`SymbolIndex`] owns).
    pub fn merge(&mut self, class: Option<String>, file: impl Into<String>, definition: Definition) {
        let file = file.into();

        // Same class as the current single slot: the file dimension absorbs
        // the new fact.
        if matches!(&self.class, ClassSlot::Single(current) if *current == class) {
            self.merge_file(file, definition);
            return;
        }

        if let ClassSlot::Multiple(children) = &mut self.class {
            // Linear scan; class lists stay small in practice.
            match children
                .iter()
                .position(|child| child.is_class(class.as_deref()))
            {
                Some(found) => children[found].merge_file(file, definition),
                None => children.push(IndexElement::class_child(class, file, definition)),
            }
            return;
        }

        // A second distinct class at this level.
        self.promote_class(class, file, definition);
    }

    /// Fold a definition into the file dimension of this node's class scope.
    ///
    /// Valid on nodes whose file slot is populated: symbol-level nodes with
    /// a single class, or children of a class list.
    pub fn merge_file(&mut self, file: impl Into<String>, definition: Definition) {
        let file = file.into();

        // First definition per (class, file) pair wins; a re-scan of the
        // same pair is dropped wholesale.
        if matches!(&self.file, FileSlot::Single(current) if *current == file) {
            trace!("Duplicate definition dropped: {}", file);
            return;
        }

        if let FileSlot::Multiple(children) = &mut self.file {
            if children.iter().any(|child| child.is_file(&file)) {
                trace!("Duplicate definition dropped: {}", file);
            } else {
                children.push(IndexElement::file_child(file, definition));
            }
            return;
        }

        // A second distinct file under this class scope.
        self.promote_file(file, definition);
    }

    /// Split a single class slot into a class list.
    ///
    /// The existing child inherits this node's file shape and definition; the
    /// node itself keeps only the symbol and the new class list.
    fn promote_class(&mut self, class: Option<String>, file: String, definition: Definition) {
        debug!(
            "Promoting class slot: {}",
            self.symbol.as_deref().unwrap_or("?")
        );
        let current = std::mem::replace(&mut self.class, ClassSlot::Absent);
        let ClassSlot::Single(existing_class) = current else {
            unreachable!("class promotion requires a single class slot");
        };
        let existing = IndexElement {
            symbol: None,
            class: ClassSlot::Single(existing_class),
            file: std::mem::replace(&mut self.file, FileSlot::Absent),
            definition: self.definition.take(),
        };
        let incoming = IndexElement::class_child(class, file, definition);
        self.class = ClassSlot::Multiple(vec![existing, incoming]);
    }

    /// Split a single file slot into a file list.
    fn promote_file(&mut self, file: String, definition: Definition) {
        debug!("Promoting file slot: {}", file);
        let current = std::mem::replace(&mut self.file, FileSlot::Absent);
        let FileSlot::Single(existing_file) = current else {
            unreachable!("file promotion requires a single file slot");
        };
        let existing = IndexElement {
            symbol: None,
            class: ClassSlot::Absent,
            file: FileSlot::Single(existing_file),
            definition: self.definition.take(),
        };
        let incoming = IndexElement::file_child(file, definition);
        self.file = FileSlot::Multiple(vec![existing, incoming]);
    }

    // ------------------------------------------------------------------
    // Sorting
    // ------------------------------------------------------------------

    /// Sort every `Multiple` list in this element, recursively.
    ///
    /// Class children order global scope first, then named classes; file
    /// children order by file name. Run once after ingestion; idempotent.
    pub fn sort(&mut self) {
        if let FileSlot::Multiple(children) = &mut self.file {
            children.sort_by(|a, b| compare_names(a.file_key(), b.file_key()));
        }
        if let ClassSlot::Multiple(children) = &mut self.class {
            children.sort_by(|a, b| compare_scopes(a.class_key(), b.class_key()));
            for child in children {
                child.sort();
            }
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Symbol name, present only at the root of a symbol's sub-tree.
    pub fn symbol(&self) -> Option<&str> {
        self.symbol.as_deref()
    }

    /// Class dimension; the slot shape tells the renderer whether a
    /// sub-listing is needed.
    pub fn class(&self) -> &ClassSlot {
        &self.class
    }

    /// File dimension.
    pub fn file(&self) -> &FileSlot {
        &self.file
    }

    /// Definition payload; `None` at branching nodes, where the payload
    /// lives on the children.
    pub fn definition(&self) -> Option<&Definition> {
        self.definition.as_ref()
    }

    /// Topic kind tag, when this node carries the definition.
    pub fn kind(&self) -> Option<&str> {
        self.definition.as_ref().map(|d| d.kind.as_str())
    }

    /// Declaration prototype, when this node carries one.
    pub fn prototype(&self) -> Option<&str> {
        self.definition.as_ref().and_then(|d| d.prototype.as_deref())
    }

    /// Summary, when this node carries one.
    pub fn summary(&self) -> Option<&str> {
        self.definition.as_ref().and_then(|d| d.summary.as_deref())
    }

    // ------------------------------------------------------------------
    // Keys
    // ------------------------------------------------------------------

    fn is_class(&self, class: Option<&str>) -> bool {
        matches!(&self.class, ClassSlot::Single(name) if name.as_deref() == class)
    }

    fn is_file(&self, file: &str) -> bool {
        matches!(&self.file, FileSlot::Single(name) if name == file)
    }

    fn class_key(&self) -> Option<&str> {
        match &self.class {
            ClassSlot::Single(name) => name.as_deref(),
            _ => None,
        }
    }

    fn file_key(&self) -> &str {
        match &self.file {
            FileSlot::Single(name) => name,
            _ => "",
        }
    }
}

// ============================================================================
// SymbolIndex
// ============================================================================

/// The full symbol index: one [`IndexElement`] per documented symbol name.
///
/// Scanners call [`SymbolIndex::add`] once per discovered fact during a
/// single ingestion pass. After the pass the owner calls
/// [`SymbolIndex::sort`] once and hands the index to the renderer read-only.
///
/// Elements are keyed by exact symbol name and iterate in a stable order;
/// presentation grouping is the renderer's concern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolIndex {
    elements: BTreeMap<String, IndexElement>,
}

impl SymbolIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        SymbolIndex::default()
    }

    /// Apply one scanner fact.
    ///
    /// Creates the symbol's entry on first occurrence and merges into it
    /// afterwards. The only rejected input is an empty symbol name.
    pub fn add(&mut self, fact: SymbolFact) -> Result<(), CoreError> {
        if fact.symbol.is_empty() {
            return Err(CoreError::EmptySymbol { file: fact.file });
        }
        let SymbolFact {
            symbol,
            class,
            file,
            kind,
            prototype,
            summary,
        } = fact;
        let definition = Definition {
            kind,
            prototype,
            summary,
        };
        match self.elements.entry(symbol) {
            Entry::Occupied(entry) => entry.into_mut().merge(class, file, definition),
            Entry::Vacant(entry) => {
                let element = IndexElement::new_leaf(entry.key().clone(), class, file, definition);
                entry.insert(element);
            }
        }
        Ok(())
    }

    /// Sort every element. Run once after ingestion; idempotent.
    pub fn sort(&mut self) {
        for element in self.elements.values_mut() {
            element.sort();
        }
    }

    /// Look up a symbol's entry by exact name.
    pub fn get(&self, symbol: &str) -> Option<&IndexElement> {
        self.elements.get(symbol)
    }

    /// Symbol names in stable order.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.elements.keys().map(String::as_str)
    }

    /// Entries in stable symbol-name order.
    pub fn elements(&self) -> impl Iterator<Item = &IndexElement> {
        self.elements.values()
    }

    /// Number of distinct symbols indexed.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether no facts have been applied yet.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
