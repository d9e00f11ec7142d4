// insertion.rs — Insertion-point resolution for the declaration block.
//
// Two independent constraints bound where the synthesized declarations may
// go: they must precede the first function defined in the main sketch file,
// and they must precede the earliest line where any function name is used
// as a pointer value. The resolver takes the stricter of the two and falls
// back to the top of the unit when neither applies.

use crate::unit::SketchUnit;
use crate::usage;

/// The single line at which the declaration block must be inserted.
///
/// Total over every unit: a declaration-free or empty sketch resolves to
/// line 0, meaning the very top of the unit.
pub fn insertion_line(unit: &SketchUnit) -> usize {
    let first_definition = first_function_line(unit);
    let first_usage = usage::first_pointer_usage(unit);

    match (first_definition, first_usage) {
        (Some(definition), Some(usage)) => definition.min(usage),
        (Some(definition), None) => definition,
        (None, Some(usage)) => usage,
        (None, None) => 0,
    }
}

/// Line of the first function tag defined in the main sketch file.
///
/// "First" means earliest in the tag sequence, which already reflects file
/// scan order; tags from included headers never anchor the insertion point.
fn first_function_line(unit: &SketchUnit) -> Option<usize> {
    unit.function_tags()
        .find(|tag| unit.in_main_file(tag))
        .map(|tag| tag.line)
}

// ── Tests ────────────────────────────────────────────────────────────────
