//! Fixture discovery and classification
//!
//! Scans a directory (non-recursive) for `.lox` fixture files and derives
//! one [`Fixture`] per file. A fixture whose raw text contains the
//! substring `"Error"` or `"error"` is an expected-error case; anything
//! else is an expected-success case whose `expect: <token>` markers become
//! its expected values, in file order.

use crate::error::{CodegenError, CodegenResult};
use regex::Regex;
use std::ffi::OsStr;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use walkdir::WalkDir;

/// File extension of interpreter fixture sources
pub const FIXTURE_EXTENSION: &str = "lox";

/// How a fixture is wired into the generated suite
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixtureKind {
    /// Expected to fail at some stage of the interpreter pipeline
    Error,
    /// Expected to run and print `expected` in order. Empty `expected`
    /// means the fixture is not an executable test case.
    Success { expected: Vec<String> },
}

/// One classified fixture file
#[derive(Debug, Clone)]
pub struct Fixture {
    /// File name up to the first dot, used as the generated test name
    pub name: String,
    /// Path as discovered, embedded verbatim in the generated invocation
    pub relative_path: String,
    pub kind: FixtureKind,
}

fn expect_marker() -> &'static Regex {
    static MARKER: OnceLock<Regex> = OnceLock::new();
    // The character class admits spaces and angle brackets so multi-word
    // and container-typed expected values survive extraction. Commas and
    // quotes are not handled; they would corrupt the generated line.
    MARKER.get_or_init(|| {
        Regex::new(r"expect: ([A-Za-z0-9_ <>]*)").expect("marker pattern is valid")
    })
}

/// Enumerate `.lox` files directly inside `dir` and classify each.
///
/// Discovery order follows the directory listing and is not guaranteed
/// stable across platforms; callers must not rely on it for correctness.
pub fn scan_fixtures(dir: &Path) -> CodegenResult<Vec<Fixture>> {
    let mut fixtures = Vec::new();
    for entry in WalkDir::new(dir).max_depth(1) {
        let entry = entry.map_err(|e| {
            let path = e
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| dir.to_path_buf());
            CodegenError::io(path, e.into())
        })?;
        if !entry.file_type().is_file()
            || entry.path().extension() != Some(OsStr::new(FIXTURE_EXTENSION))
        {
            continue;
        }

        let path = entry.path();
        let text = fs::read_to_string(path).map_err(|e| CodegenError::io(path, e))?;
        // test name is the file name up to the first dot, so a dotted name
        // still yields a valid identifier
        let name = path
            .file_name()
            .and_then(OsStr::to_str)
            .unwrap_or_default()
            .split('.')
            .next()
            .unwrap_or_default()
            .to_string();
        fixtures.push(Fixture {
            name,
            relative_path: path.display().to_string(),
            kind: classify(&text),
        });
    }
    Ok(fixtures)
}

/// Classify raw fixture text.
///
/// The error check is a crude substring scan of the whole text, not of
/// structured metadata, and takes precedence: an error fixture's `expect:`
/// markers are never consulted.
pub fn classify(text: &str) -> FixtureKind {
    if text.contains("Error") || text.contains("error") {
        return FixtureKind::Error;
    }
    let expected = expect_marker()
        .captures_iter(text)
        .map(|captures| captures[1].to_string())
        .collect();
    FixtureKind::Success { expected }
}
