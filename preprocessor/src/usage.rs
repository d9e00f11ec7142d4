// usage.rs — Function-pointer usage detection over tag source lines.
//
// A function name taken by address (`&name`) or wrapped in parentheses
// (`(name)`, the cast/callback form) requires the prototype to already be
// visible at that line, so such sites constrain where the declaration block
// can go. The scan matches literal substrings against the recorded source
// text — it is not a parser. A string literal containing `(foo)` will
// false-positive; whitespace between `&` and the name, or a reference split
// across lines, will false-negative. Both are accepted limitations: the
// patterns are part of the observable insertion-line behavior and must not
// be changed.
//
// Every tag is checked against every function tag, so the scan is quadratic
// in tag count. Sketch-sized units keep this cheap; callers with unusually
// large units must chunk upstream.

use crate::tag::Tag;
use crate::unit::SketchUnit;

/// Earliest line anywhere in the unit where a known function's name is used
/// as a pointer/callback value, or `None` when no such site exists.
pub fn first_pointer_usage(unit: &SketchUnit) -> Option<usize> {
    let functions: Vec<&Tag> = unit.function_tags().collect();

    let mut earliest: Option<usize> = None;
    for site in unit.tags() {
        for function in &functions {
            // A function tag is never a usage of itself.
            if site.line == function.line {
                continue;
            }
            if references_as_pointer(site, function) {
                earliest = Some(match earliest {
                    Some(line) => line.min(site.line),
                    None => site.line,
                });
            }
        }
    }
    earliest
}

fn references_as_pointer(site: &Tag, function: &Tag) -> bool {
    if function.name.is_empty() {
        return false;
    }
    site.source_text.contains(&format!("&{}", function.name))
        || site.source_text.contains(&format!("({})", function.name))
}

// ── Tests ────────────────────────────────────────────────────────────────
