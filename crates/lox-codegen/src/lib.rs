//! Source generators for the rlox interpreter front end
//!
//! Two independent batch pipelines:
//! - AST definition generation: a literal grammar schema is rendered into
//!   one Rust source file per grammar (tagged union, per-variant record,
//!   per-variant constructor).
//! - Test-suite generation: a directory of `.lox` fixtures is scanned,
//!   classified, and rendered into a single file of `test_fail!` /
//!   `test_succeed!` invocations.
//!
//! Both pipelines are stateless and idempotent: re-running either with
//! unchanged inputs produces byte-identical output files.

pub mod error;
pub mod fixtures;
pub mod nodes;
pub mod schema;
pub mod suite;
pub mod writer;

// Re-export main types
pub use error::{CodegenError, CodegenResult};
pub use fixtures::{scan_fixtures, Fixture, FixtureKind};
pub use nodes::render_grammar;
pub use schema::{FieldDecl, GrammarKind, GrammarSpec, VariantDef};
pub use suite::{render_suite, suite_output_path, write_suite};
pub use writer::write_grammar_files;
