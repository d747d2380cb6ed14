//! Node-definition emitter - renders one grammar into Rust source text
//!
//! For a grammar this produces a tagged union whose cases are the variant
//! names (each boxing a same-named record), then per variant a record
//! declaration and a positional `new` constructor. Variant and field order
//! mirror the schema exactly.

use crate::schema::{GrammarKind, GrammarSpec, VariantDef};

/// Render the node definitions for one grammar.
///
/// The expression grammar additionally receives a `Literal` case carrying
/// the raw literal-value type; it has no schema entry and no record of its
/// own.
pub fn render_grammar(grammar: &GrammarSpec) -> String {
    let mut out = String::new();
    render_union(&mut out, grammar);
    for variant in &grammar.variants {
        render_record(&mut out, variant);
        render_constructor(&mut out, variant);
    }
    out
}

fn render_union(out: &mut String, grammar: &GrammarSpec) {
    out.push_str("#[derive(Debug, Clone)]\n");
    out.push_str(&format!("pub enum {} {{\n", grammar.name));
    for variant in &grammar.variants {
        out.push_str(&format!("    {0}(Box<{0}>),\n", variant.name));
    }
    if grammar.kind == GrammarKind::Expression {
        out.push_str("    Literal(Literal),\n");
    }
    out.push_str("}\n\n");
}

fn render_record(out: &mut String, variant: &VariantDef) {
    out.push_str("#[derive(Debug, Clone)]\n");
    if variant.fields.is_empty() {
        out.push_str(&format!("pub struct {} {{}}\n\n", variant.name));
        return;
    }
    out.push_str(&format!("pub struct {} {{\n", variant.name));
    for field in &variant.fields {
        out.push_str(&format!("    pub {}: {},\n", field.name, field.ty));
    }
    out.push_str("}\n\n");
}

fn render_constructor(out: &mut String, variant: &VariantDef) {
    let params = variant
        .fields
        .iter()
        .map(|field| format!("{}: {}", field.name, field.ty))
        .collect::<Vec<_>>()
        .join(", ");

    out.push_str(&format!("impl {} {{\n", variant.name));
    out.push_str(&format!("    pub fn new({}) -> Self {{\n", params));
    if variant.fields.is_empty() {
        out.push_str("        Self {}\n");
    } else {
        out.push_str("        Self {\n");
        for field in &variant.fields {
            out.push_str(&format!("            {},\n", field.name));
        }
        out.push_str("        }\n");
    }
    out.push_str("    }\n");
    out.push_str("}\n\n");
}
