// Tag records describing the syntactic elements of one merged sketch unit.
//
// Produced by the external extraction step, which also assigns each record
// its kind and decides which tags are excluded from prototype generation
// (operator overloads, matches inside comments, already-declared functions).
// This crate never mutates, reorders, or deletes tags — every pass reads the
// sequence in extraction order and produces fresh derived values.
//
// Preconditions: records are structurally valid (non-empty `name` on
// function tags, positive `line`); validation belongs upstream.
// Postconditions: none (data-only module).
// Failure modes: none.
// Side effects: none.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

// ── Tag kind ─────────────────────────────────────────────────────────────

/// Syntactic category assigned to a tag by the extraction step.
///
/// Prototype synthesis only acts on `Function`; the remaining variants are
/// kept distinct so that matches stay exhaustive when upstream grows a new
/// category. Unknown kind strings in the input stream deserialize to
/// `Other` instead of failing the whole unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagKind {
    Function,
    Prototype,
    Struct,
    Variable,
    #[serde(other)]
    Other,
}

// ── Tag record ───────────────────────────────────────────────────────────

/// One tagged source element at a specific file/line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub kind: TagKind,
    /// Set upstream when the tag must never yield a prototype nor count as
    /// a definition site.
    #[serde(default)]
    pub excluded: bool,
    /// Identifier of the tagged element. Non-empty for function tags.
    pub name: String,
    /// File the tag was extracted from; may be an included header rather
    /// than the main sketch file.
    pub file: PathBuf,
    /// 1-based line number within `file`.
    pub line: usize,
    /// Raw text of the line the tag was found on. Only used for pattern
    /// heuristics, never parsed as code.
    #[serde(default)]
    pub source_text: String,
    /// Synthesized declaration (e.g. `"void foo(int)"`), or empty when the
    /// extraction step produced none.
    #[serde(default)]
    pub prototype_text: String,
    /// Qualifiers to prepend to the declaration (e.g. `"static"`).
    #[serde(default)]
    pub modifiers: String,
}

impl Tag {
    /// Create a tag with empty text fields.
    pub fn new(
        kind: TagKind,
        name: impl Into<String>,
        file: impl Into<PathBuf>,
        line: usize,
    ) -> Self {
        Self {
            kind,
            excluded: false,
            name: name.into(),
            file: file.into(),
            line,
            source_text: String::new(),
            prototype_text: String::new(),
            modifiers: String::new(),
        }
    }

    /// Mark the tag as excluded from prototype generation.
    pub fn with_excluded(mut self) -> Self {
        self.excluded = true;
        self
    }

    /// Attach the raw text of the tagged line.
    pub fn with_source_text(mut self, text: impl Into<String>) -> Self {
        self.source_text = text.into();
        self
    }

    /// Attach the synthesized declaration text.
    pub fn with_prototype_text(mut self, text: impl Into<String>) -> Self {
        self.prototype_text = text.into();
        self
    }

    /// Attach declaration qualifiers.
    pub fn with_modifiers(mut self, modifiers: impl Into<String>) -> Self {
        self.modifiers = modifiers.into();
        self
    }
}

// ── Tests ────────────────────────────────────────────────────────────────
