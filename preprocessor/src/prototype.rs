// prototype.rs — Synthetic prototype records and the emission filter.
//
// A `Prototype` is a thin, line-stamped declaration record derived from one
// eligible tag. The filter trusts the declaration text supplied upstream; it
// decides only which tags emit and in what order.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::tag::Tag;
use crate::unit::SketchUnit;

/// A forward declaration synthesized for one function tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prototype {
    pub function_name: String,
    pub file: PathBuf,
    pub prototype_text: String,
    pub modifiers: String,
    pub line: usize,
}

impl Prototype {
    fn from_tag(tag: &Tag) -> Self {
        Self {
            function_name: tag.name.clone(),
            file: tag.file.clone(),
            prototype_text: tag.prototype_text.clone(),
            modifiers: tag.modifiers.clone(),
            line: tag.line,
        }
    }

    /// The injectable single-line form, e.g. `static void foo(int);`.
    pub fn declaration(&self) -> String {
        if self.modifiers.is_empty() {
            format!("{};", self.prototype_text)
        } else {
            format!("{} {};", self.modifiers, self.prototype_text)
        }
    }
}

impl fmt::Display for Prototype {
    /// Diagnostic form: declaration text followed by the origin line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.is_empty() {
            write!(f, "{} @ {}", self.prototype_text, self.line)
        } else {
            write!(f, "{} {} @ {}", self.modifiers, self.prototype_text, self.line)
        }
    }
}

/// Select the tags that yield an emittable prototype, in extraction order.
///
/// A tag emits iff its declaration text is non-empty after trimming and the
/// tag is not excluded. An empty result is valid — the sketch simply needs
/// no injected declarations.
pub fn emit_prototypes(unit: &SketchUnit) -> Vec<Prototype> {
    unit.tags()
        .iter()
        .filter(|tag| !tag.excluded && !tag.prototype_text.trim().is_empty())
        .map(Prototype::from_tag)
        .collect()
}

// ── Tests ────────────────────────────────────────────────────────────────
