// input.rs — Tag-record stream loading.
//
// The extraction step hands over one JSON array of tag records per unit,
// already classified and in scan order. Loading is the only fallible
// surface of this crate; the synthesis passes themselves are total.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::tag::Tag;

// ── Errors ───────────────────────────────────────────────────────────────

/// Errors that can occur while loading a tag stream.
#[derive(Debug)]
pub enum InputError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Io { path, source } => {
                write!(f, "{}: {}", path.display(), source)
            }
            InputError::Malformed { path, source } => {
                write!(f, "{}: malformed tag stream: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for InputError {}

// ── Loading ──────────────────────────────────────────────────────────────

/// Parse a raw tag stream into the in-memory tag sequence, keeping the
/// stream's record order.
pub fn parse_tags(raw: &str) -> Result<Vec<Tag>, serde_json::Error> {
    serde_json::from_str(raw)
}

/// Read and parse the tag stream at `path`.
pub fn load_tags(path: &Path) -> Result<Vec<Tag>, InputError> {
    let raw = std::fs::read_to_string(path).map_err(|e| InputError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_tags(&raw).map_err(|e| InputError::Malformed {
        path: path.to_path_buf(),
        source: e,
    })
}

// ── Provenance ───────────────────────────────────────────────────────────

/// SHA-256 fingerprint of the raw tag stream, as a 64-character hex string.
///
/// Lets independent runs over the same unit be correlated without shipping
/// the stream itself.
pub fn stream_fingerprint(raw: &str) -> String {
    use sha2::{Digest, Sha256};

    let digest = Sha256::digest(raw.as_bytes());
    let mut hex = String::with_capacity(64);
    for byte in digest {
        use std::fmt::Write;
        let _ = write!(hex, "{:02x}", byte);
    }
    hex
}

// ── Tests ────────────────────────────────────────────────────────────────
