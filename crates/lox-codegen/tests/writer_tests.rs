//! Grammar file writer tests

use lox_codegen::{write_grammar_files, GrammarSpec};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

fn builtin_grammars() -> (GrammarSpec, GrammarSpec) {
    (
        GrammarSpec::expression().unwrap(),
        GrammarSpec::statement().unwrap(),
    )
}

#[test]
fn test_writes_one_file_per_grammar() {
    let temp = TempDir::new().unwrap();
    let (expr, stmt) = builtin_grammars();

    let written = write_grammar_files(temp.path(), &expr, &stmt).unwrap();

    assert_eq!(written.len(), 2);
    assert_eq!(written[0], temp.path().join("Expr.rs"));
    assert_eq!(written[1], temp.path().join("Stmt.rs"));
    assert!(written.iter().all(|p| p.is_file()));
}

#[test]
fn test_preamble_and_cross_imports() {
    let temp = TempDir::new().unwrap();
    let (expr, stmt) = builtin_grammars();
    write_grammar_files(temp.path(), &expr, &stmt).unwrap();

    let expr_unit = fs::read_to_string(temp.path().join("Expr.rs")).unwrap();
    let stmt_unit = fs::read_to_string(temp.path().join("Stmt.rs")).unwrap();

    for unit in [&expr_unit, &stmt_unit] {
        assert!(unit.starts_with("use crate::scanner::*;\nuse crate::grammar::LoxCallable;\n"));
    }
    // each unit imports the other grammar's case constructors
    assert!(expr_unit.contains("use crate::grammar::Stmt::*;\n"));
    assert!(!expr_unit.contains("use crate::grammar::Expr::*;\n"));
    assert!(stmt_unit.contains("use crate::grammar::Expr::*;\n"));
    assert!(!stmt_unit.contains("use crate::grammar::Stmt::*;\n"));
}

#[test]
fn test_literal_case_only_in_expression_unit() {
    let temp = TempDir::new().unwrap();
    let (expr, stmt) = builtin_grammars();
    write_grammar_files(temp.path(), &expr, &stmt).unwrap();

    let expr_unit = fs::read_to_string(temp.path().join("Expr.rs")).unwrap();
    let stmt_unit = fs::read_to_string(temp.path().join("Stmt.rs")).unwrap();
    assert!(expr_unit.contains("    Literal(Literal),\n"));
    assert!(!stmt_unit.contains("Literal"));
}

#[test]
fn test_rewrite_is_byte_identical() {
    let temp = TempDir::new().unwrap();
    let (expr, stmt) = builtin_grammars();

    write_grammar_files(temp.path(), &expr, &stmt).unwrap();
    let first_expr = fs::read(temp.path().join("Expr.rs")).unwrap();
    let first_stmt = fs::read(temp.path().join("Stmt.rs")).unwrap();

    write_grammar_files(temp.path(), &expr, &stmt).unwrap();
    assert_eq!(fs::read(temp.path().join("Expr.rs")).unwrap(), first_expr);
    assert_eq!(fs::read(temp.path().join("Stmt.rs")).unwrap(), first_stmt);
}

#[test]
fn test_overwrites_stale_content() {
    let temp = TempDir::new().unwrap();
    let (expr, stmt) = builtin_grammars();

    fs::write(temp.path().join("Expr.rs"), "stale contents\n").unwrap();
    write_grammar_files(temp.path(), &expr, &stmt).unwrap();

    let expr_unit = fs::read_to_string(temp.path().join("Expr.rs")).unwrap();
    assert!(!expr_unit.contains("stale contents"));
    assert!(expr_unit.contains("pub enum Expr"));
}

#[test]
fn test_creates_missing_output_directory() {
    let temp = TempDir::new().unwrap();
    let out_dir = temp.path().join("src").join("grammar");
    let (expr, stmt) = builtin_grammars();

    write_grammar_files(&out_dir, &expr, &stmt).unwrap();
    assert!(out_dir.join("Expr.rs").is_file());
    assert!(out_dir.join("Stmt.rs").is_file());
}
