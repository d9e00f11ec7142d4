// synthesis.rs — Combined prototype synthesis entry point.
//
// Runs the emission filter and the insertion-point resolver over one unit
// and packages the result for the splicing step: the ordered declaration
// records plus the single line the block must land on.

use serde::Serialize;

use crate::insertion;
use crate::prototype::{self, Prototype};
use crate::unit::SketchUnit;

/// Everything the splicing step needs for one unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Synthesis {
    pub prototypes: Vec<Prototype>,
    pub insertion_line: usize,
}

/// Synthesize prototypes and resolve the insertion point for one unit.
pub fn synthesize(unit: &SketchUnit) -> Synthesis {
    Synthesis {
        prototypes: prototype::emit_prototypes(unit),
        insertion_line: insertion::insertion_line(unit),
    }
}

impl Synthesis {
    /// Render the injectable declaration block, one declaration per line.
    ///
    /// Declarations whose text carries a default argument are left out:
    /// repeating a default in a redeclaration is ill-formed C++, and the
    /// definition the sketch already contains keeps the default.
    pub fn declaration_block(&self) -> String {
        let mut block = String::new();
        for proto in &self.prototypes {
            if proto.prototype_text.contains('=') {
                continue;
            }
            block.push_str(&proto.declaration());
            block.push('\n');
        }
        block
    }
}

// ── Tests ────────────────────────────────────────────────────────────────
