//! Grammar schema - the literal node-kind tables for both grammars
//!
//! The schema is fixed application data, not user input, so it lives here
//! as constant tables rather than in an external file. Table order is
//! emission order; nothing downstream sorts or deduplicates.

use crate::error::{CodegenError, CodegenResult};

/// Which syntactic category a grammar describes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrammarKind {
    Expression,
    Statement,
}

/// One typed field of a variant, parsed from a `"Type:name"` token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDecl {
    /// Type name, copied verbatim into generated output (never validated
    /// against a type registry; that is the consuming compiler's job)
    pub ty: String,
    /// Field and constructor-parameter name
    pub name: String,
}

impl FieldDecl {
    /// Parse a `"Type:name"` token. Exactly one separator is required.
    pub fn parse(token: &str) -> CodegenResult<Self> {
        let mut parts = token.split(':');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(ty), Some(name), None) => Ok(Self {
                ty: ty.trim().to_string(),
                name: name.trim().to_string(),
            }),
            _ => Err(CodegenError::malformed_field(token)),
        }
    }
}

/// One constructor case of a grammar's tagged union
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantDef {
    pub name: String,
    /// Declared field order; may be empty for payload-less variants
    pub fields: Vec<FieldDecl>,
}

/// An ordered set of variants for one grammar
#[derive(Debug, Clone)]
pub struct GrammarSpec {
    pub name: String,
    pub kind: GrammarKind,
    pub variants: Vec<VariantDef>,
}

/// Expression grammar: variant name to `"Type:name"` field tokens
const EXPR_SCHEMA: &[(&str, &[&str])] = &[
    ("Binary", &["Expr:left", "Token:operator", "Expr:right"]),
    ("Grouping", &["Expr:expression"]),
    ("Unary", &["Token:operator", "Expr:right"]),
    ("Variable", &["Token:name"]),
    ("This", &["Token:keyword"]),
    ("Assign", &["Token:name", "Expr:value"]),
    ("Get", &["Expr:object", "Token:name"]),
    ("Set", &["Expr:object", "Token:name", "Expr:value"]),
    ("Super", &["Token:method", "Token:keyword"]),
    ("Logical", &["Expr:left", "Token:operator", "Expr:right"]),
    ("Call", &["Expr:callee", "Token:paren", "Vec<Expr>:arguments"]),
    ("Lambda", &["Token:paren", "Vec<Token>:params", "Vec<Stmt>:body"]),
];

/// Statement grammar
const STMT_SCHEMA: &[(&str, &[&str])] = &[
    ("Expression", &["Expr:expr"]),
    ("Block", &["Vec<Stmt>:statements"]),
    (
        "Class",
        &[
            "Token:name",
            "Vec<Function>:methods",
            "Option<Variable>:superclass",
        ],
    ),
    ("Function", &["Token:name", "Vec<Token>:params", "Vec<Stmt>:body"]),
    ("Print", &["Expr:expr"]),
    ("Var", &["Token:name", "Option<Expr>:initializer"]),
    ("While", &["Expr:condition", "Stmt:body"]),
    ("Break", &[]),
    ("Continue", &[]),
    ("If", &["Expr:condition", "Stmt:thenBranch", "Option<Stmt>:elseBranch"]),
    ("Return", &["Token:keyword", "Option<Expr>:value"]),
];

impl GrammarSpec {
    /// The built-in expression grammar
    pub fn expression() -> CodegenResult<Self> {
        Self::from_table("Expr", GrammarKind::Expression, EXPR_SCHEMA)
    }

    /// The built-in statement grammar
    pub fn statement() -> CodegenResult<Self> {
        Self::from_table("Stmt", GrammarKind::Statement, STMT_SCHEMA)
    }

    /// Build a grammar from an ordered variant table, preserving table
    /// order. A field token without exactly one `:` fails the whole load.
    pub fn from_table(
        name: &str,
        kind: GrammarKind,
        table: &[(&str, &[&str])],
    ) -> CodegenResult<Self> {
        let mut variants = Vec::with_capacity(table.len());
        for (variant, tokens) in table {
            let fields = tokens
                .iter()
                .map(|token| FieldDecl::parse(token))
                .collect::<CodegenResult<Vec<_>>>()?;
            variants.push(VariantDef {
                name: (*variant).to_string(),
                fields,
            });
        }
        Ok(Self {
            name: name.to_string(),
            kind,
            variants,
        })
    }
}
