//! Grammar file writer - writes the two grammar units as a pair
//!
//! The two emitted files are mutually referential (each imports the other
//! grammar's case constructors), so there is a single entry point that
//! writes both; neither unit is ever emitted on its own.

use crate::error::{CodegenError, CodegenResult};
use crate::nodes::render_grammar;
use crate::schema::GrammarSpec;
use std::fs;
use std::path::{Path, PathBuf};

/// Write `<out_dir>/<Name>.rs` for both grammars, overwriting any previous
/// contents. Returns the written paths in write order.
pub fn write_grammar_files(
    out_dir: &Path,
    expr: &GrammarSpec,
    stmt: &GrammarSpec,
) -> CodegenResult<Vec<PathBuf>> {
    fs::create_dir_all(out_dir).map_err(|e| CodegenError::io(out_dir, e))?;

    let mut written = Vec::with_capacity(2);
    for (grammar, other) in [(expr, stmt), (stmt, expr)] {
        let path = out_dir.join(format!("{}.rs", grammar.name));
        fs::write(&path, render_unit(grammar, other)).map_err(|e| CodegenError::io(&path, e))?;
        written.push(path);
    }
    Ok(written)
}

/// Render one grammar's complete source unit: the fixed external
/// references, the cross-import of the paired grammar's case constructors,
/// then the node definitions.
pub fn render_unit(grammar: &GrammarSpec, other: &GrammarSpec) -> String {
    let mut out = String::new();
    out.push_str("use crate::scanner::*;\n");
    out.push_str("use crate::grammar::LoxCallable;\n");
    out.push_str(&format!("use crate::grammar::{}::*;\n", other.name));
    out.push('\n');
    out.push_str(&render_grammar(grammar));
    out
}
