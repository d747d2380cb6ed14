//! Test-suite emitter
//!
//! Renders classified fixtures into a single test-suite source file: a
//! fixed preamble of interpreter references followed by one `test_fail!`
//! or `test_succeed!` invocation per executable fixture.

use crate::error::{CodegenError, CodegenResult};
use crate::fixtures::{Fixture, FixtureKind};
use std::fs;
use std::path::{Path, PathBuf};

/// Project-relative directory the generated suite files live in
const SUITE_DIR: &str = "rlox_core/src/tests";

/// External references every generated suite needs: the interpreter
/// pipeline entry points, the mocked system interface, and the error
/// vocabulary. The assertion macros come in through `super::*`, but they
/// expand to `Rc`, `RefCell`, and `Any` unqualified at the call site, so
/// the std imports must live in the generated file itself.
const PREAMBLE: &str = "\
use super::*;
use crate::error::LoxError;
use crate::frontend::lexer::*;
use crate::frontend::parser::Parser;
use crate::frontend::resolver::Resolver;
use crate::runtime::definitions::object::Object;
use crate::runtime::interpreter::Interpreter;
use crate::runtime::system_calls::SystemInterfaceMock;
use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;
";

/// Render the complete suite file for an ordered sequence of fixtures.
///
/// Error fixtures assert against the canonical runtime-error sentinel with
/// empty message and location. Success fixtures without a single `expect:`
/// marker are skipped: they are not executable test cases.
pub fn render_suite(fixtures: &[Fixture]) -> String {
    let mut out = String::from(PREAMBLE);
    for fixture in fixtures {
        match &fixture.kind {
            FixtureKind::Error => {
                out.push('\n');
                out.push_str(&format!(
                    "test_fail!(\n    {},\n    \"../{}\",\n    LoxError::RuntimeError(String::from(\"\"), 0, String::from(\"\"))\n);\n",
                    fixture.name, fixture.relative_path
                ));
            }
            FixtureKind::Success { expected } if !expected.is_empty() => {
                out.push('\n');
                out.push_str(&format!(
                    "test_succeed!(\n    {},\n    \"../{}\",\n    {}\n);\n",
                    fixture.name,
                    fixture.relative_path,
                    // joined verbatim: no escaping of commas or quotes
                    expected.join(",")
                ));
            }
            FixtureKind::Success { .. } => {}
        }
    }
    out
}

/// Derive the suite file path from the fixture directory's base name.
/// A trailing separator on the argument is tolerated.
pub fn suite_output_path(fixture_dir: &Path) -> PathBuf {
    let base = fixture_dir
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("tests");
    Path::new(SUITE_DIR).join(format!("{base}.rs"))
}

/// Render and write the suite file under `project_root`, creating parent
/// directories as needed. Whole-file overwrite; returns the path written.
pub fn write_suite(
    project_root: &Path,
    fixture_dir: &Path,
    fixtures: &[Fixture],
) -> CodegenResult<PathBuf> {
    let out_path = project_root.join(suite_output_path(fixture_dir));
    if let Some(parent) = out_path.parent() {
        fs::create_dir_all(parent).map_err(|e| CodegenError::io(parent, e))?;
    }
    fs::write(&out_path, render_suite(fixtures)).map_err(|e| CodegenError::io(&out_path, e))?;
    Ok(out_path)
}
