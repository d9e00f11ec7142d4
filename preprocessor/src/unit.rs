// unit.rs — Per-unit tag context shared by the preprocessing passes.
//
// One `SketchUnit` holds everything a pass may read: the tag sequence in
// extraction order and the path of the main sketch file. Each compilation
// unit owns its own context, so independent units can be preprocessed
// concurrently with no shared state.

use std::path::{Path, PathBuf};

use crate::tag::{Tag, TagKind};

/// Immutable context for one compilation unit: the extracted tag sequence
/// plus the designated main sketch file.
#[derive(Debug, Clone)]
pub struct SketchUnit {
    tags: Vec<Tag>,
    main_file: PathBuf,
}

impl SketchUnit {
    pub fn new(tags: Vec<Tag>, main_file: impl Into<PathBuf>) -> Self {
        Self {
            tags,
            main_file: main_file.into(),
        }
    }

    /// All tags, in extraction order.
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn main_file(&self) -> &Path {
        &self.main_file
    }

    /// Function tags eligible as definition sites, in extraction order.
    /// Excluded tags never count.
    pub fn function_tags(&self) -> impl Iterator<Item = &Tag> + '_ {
        self.tags
            .iter()
            .filter(|tag| tag.kind == TagKind::Function && !tag.excluded)
    }

    /// Whether a tag was extracted from the main sketch file rather than an
    /// included header.
    pub fn in_main_file(&self, tag: &Tag) -> bool {
        tag.file == self.main_file
    }
}

// ── Tests ────────────────────────────────────────────────────────────────
