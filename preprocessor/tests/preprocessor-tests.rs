// Driver conformance tests for spp.
//
// Scope:
// - Output-contract conformance at the binary boundary (`spp --emit ...`)
// - Positive cases must exit 0 and print the expected report
// - Malformed or missing tag streams must be rejected with exit code 2

use std::path::PathBuf;
use std::process::Command;
use std::sync::atomic::{AtomicUsize, Ordering};

fn spp_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_spp"))
}

static COUNTER: AtomicUsize = AtomicUsize::new(0);

fn temp_path(prefix: &str, ext: &str) -> PathBuf {
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir().join(format!("{}_{}.{}", prefix, n, ext))
}

const MAIN: &str = "/tmp/sketch_merged.cpp";

const CALLBACK_STREAM: &str = r#"[
    {"kind": "function", "name": "setup", "file": "/tmp/sketch_merged.cpp", "line": 5,
     "source_text": "void setup() {}", "prototype_text": "void setup()"},
    {"kind": "function", "name": "cb", "file": "/tmp/sketch_merged.cpp", "line": 20,
     "source_text": "void cb(){}", "prototype_text": "void cb()"},
    {"kind": "other", "name": "", "file": "/tmp/sketch_merged.cpp", "line": 2,
     "source_text": "attachCallback(&cb);"}
]"#;

fn run_spp(stream: &str, extra_args: &[&str]) -> (std::process::Output, PathBuf) {
    let tags_file = temp_path("spp_driver_case", "json");
    std::fs::write(&tags_file, stream).expect("failed to write temporary tag stream");

    let out = Command::new(spp_binary())
        .arg(tags_file.to_str().unwrap())
        .arg("--main-file")
        .arg(MAIN)
        .args(extra_args)
        .output()
        .expect("failed to execute spp");

    (out, tags_file)
}

#[test]
fn report_emit_lists_prototypes_and_insertion_line() {
    let (out, tags_file) = run_spp(CALLBACK_STREAM, &[]);
    let _ = std::fs::remove_file(&tags_file);

    assert!(
        out.status.success(),
        "expected success, stderr:\n{}",
        String::from_utf8_lossy(&out.stderr)
    );
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(
        stdout,
        "void setup() @ 5\nvoid cb() @ 20\ninsertion line: 2\n"
    );
}

#[test]
fn declarations_emit_prints_the_injectable_block() {
    let (out, tags_file) = run_spp(CALLBACK_STREAM, &["--emit", "declarations"]);
    let _ = std::fs::remove_file(&tags_file);

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(stdout, "void setup();\nvoid cb();\n");
}

#[test]
fn json_emit_is_machine_readable() {
    let (out, tags_file) = run_spp(CALLBACK_STREAM, &["--emit", "json"]);
    let _ = std::fs::remove_file(&tags_file);

    assert!(out.status.success());
    let report: serde_json::Value =
        serde_json::from_slice(&out.stdout).expect("emitted JSON does not parse");

    assert_eq!(report["insertion_line"], 2);
    let prototypes = report["prototypes"].as_array().expect("prototypes array");
    assert_eq!(prototypes.len(), 2);
    assert_eq!(prototypes[0]["function_name"], "setup");
    assert_eq!(prototypes[0]["prototype_text"], "void setup()");
    assert_eq!(prototypes[0]["line"], 5);
    assert_eq!(prototypes[1]["function_name"], "cb");

    let fingerprint = report["tags_fingerprint"].as_str().expect("fingerprint");
    assert_eq!(fingerprint.len(), 64);
    assert!(fingerprint.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn json_fingerprint_tracks_the_raw_stream() {
    let (first, f1) = run_spp(CALLBACK_STREAM, &["--emit", "json"]);
    let (second, f2) = run_spp(CALLBACK_STREAM, &["--emit", "json"]);
    let _ = std::fs::remove_file(&f1);
    let _ = std::fs::remove_file(&f2);

    let a: serde_json::Value = serde_json::from_slice(&first.stdout).unwrap();
    let b: serde_json::Value = serde_json::from_slice(&second.stdout).unwrap();
    assert_eq!(a["tags_fingerprint"], b["tags_fingerprint"]);
}

#[test]
fn empty_stream_reports_line_zero() {
    let (out, tags_file) = run_spp("[]", &[]);
    let _ = std::fs::remove_file(&tags_file);

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(stdout, "insertion line: 0\n");
}

#[test]
fn malformed_stream_is_rejected() {
    let (out, tags_file) = run_spp(r#"{"kind": "function"}"#, &[]);
    let _ = std::fs::remove_file(&tags_file);

    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.contains("malformed tag stream"),
        "unexpected stderr:\n{}",
        stderr
    );
}

#[test]
fn missing_stream_file_is_rejected() {
    let out = Command::new(spp_binary())
        .arg("/nonexistent/spp_tags.json")
        .arg("--main-file")
        .arg(MAIN)
        .output()
        .expect("failed to execute spp");

    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("/nonexistent/spp_tags.json"));
}
