// spp — Sketch Prototype Preprocessor
//
// Library root. Synthesizes forward declarations for sketch functions and
// resolves the line at which the declaration block must be inserted.

pub mod input;
pub mod insertion;
pub mod prototype;
pub mod synthesis;
pub mod tag;
pub mod unit;
pub mod usage;
