//! Typed declaration IR for the generated module.
//!
//! The module body is built as a small tree of [`Declaration`]s and
//! [`Literal`]s and rendered in one pass, so every emitted construct is
//! well-formed by construction instead of being pieced together from raw
//! strings. Rendering quotes strings JSON-style; quote style is a concern
//! of the formatting pass.

use crate::token::TokenRecord;
use serde_json::Value;
use std::fmt::Write;

const INDENT: &str = "  ";

/// A value literal in the generated source.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Null,
    Bool(bool),
    Num(serde_json::Number),
    Str(String),
    /// A reference into an enumeration namespace, e.g. `TokenType.ERC20`.
    EnumRef {
        namespace: &'static str,
        variant: String,
    },
    Array(Vec<Literal>),
    Object(Vec<(String, Literal)>),
}

/// A top-level declaration in the generated source.
#[derive(Debug, Clone)]
pub enum Declaration {
    Comment(String),
    /// `import type { A, B } from "path";`
    ImportType { names: Vec<String>, from: String },
    /// `import { A, B } from "path";`
    Import { names: Vec<String>, from: String },
    /// `export const NAME: Ty = <literal>;`
    ExportConst {
        name: String,
        ty: String,
        value: Literal,
    },
}

/// An ordered list of declarations making up one generated module.
#[derive(Debug, Clone)]
pub struct Module {
    declarations: Vec<Declaration>,
}

/// Namespace the `type` discriminant is rewritten into.
pub const TOKEN_TYPE_NAMESPACE: &str = "TokenType";

/// Convert a token record into an object literal.
///
/// Fields are emitted in record order. A string-valued `type` field becomes
/// a `TokenType.<value>` reference; everything else is generic JSON-literal
/// rendering via [`json_literal`].
pub fn token_literal(record: &TokenRecord) -> Literal {
    let entries = record
        .fields()
        .map(|(key, value)| {
            let literal = match value {
                Value::String(tag) if key == "type" => Literal::EnumRef {
                    namespace: TOKEN_TYPE_NAMESPACE,
                    variant: tag.clone(),
                },
                other => json_literal(other),
            };
            (key.clone(), literal)
        })
        .collect();
    Literal::Object(entries)
}

/// Generic JSON-value-to-literal conversion, nested structures included.
pub fn json_literal(value: &Value) -> Literal {
    match value {
        Value::Null => Literal::Null,
        Value::Bool(b) => Literal::Bool(*b),
        Value::Number(n) => Literal::Num(n.clone()),
        Value::String(s) => Literal::Str(s.clone()),
        Value::Array(items) => Literal::Array(items.iter().map(json_literal).collect()),
        Value::Object(map) => Literal::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), json_literal(v)))
                .collect(),
        ),
    }
}

impl Module {
    pub fn new(declarations: Vec<Declaration>) -> Self {
        Self { declarations }
    }

    /// Render the module text, with a blank line between declaration groups
    /// (comments, imports, the constant).
    pub fn render(&self) -> String {
        let mut out = String::new();
        let mut previous: Option<u8> = None;
        for declaration in &self.declarations {
            let group = declaration.group();
            if previous.is_some_and(|p| p != group) {
                out.push('\n');
            }
            declaration.render_into(&mut out);
            out.push('\n');
            previous = Some(group);
        }
        out
    }
}

impl Declaration {
    fn group(&self) -> u8 {
        match self {
            Declaration::Comment(_) => 0,
            Declaration::ImportType { .. } | Declaration::Import { .. } => 1,
            Declaration::ExportConst { .. } => 2,
        }
    }

    fn render_into(&self, out: &mut String) {
        match self {
            Declaration::Comment(text) => {
                let _ = write!(out, "// {text}");
            }
            Declaration::ImportType { names, from } => {
                let _ = write!(out, "import type {{ {} }} from \"{from}\";", names.join(", "));
            }
            Declaration::Import { names, from } => {
                let _ = write!(out, "import {{ {} }} from \"{from}\";", names.join(", "));
            }
            Declaration::ExportConst { name, ty, value } => {
                let _ = write!(out, "export const {name}: {ty} = ");
                value.render_into(out, 0);
                out.push(';');
            }
        }
    }
}

impl Literal {
    fn render_into(&self, out: &mut String, depth: usize) {
        match self {
            Literal::Null => out.push_str("null"),
            Literal::Bool(b) => {
                let _ = write!(out, "{b}");
            }
            Literal::Num(n) => {
                let _ = write!(out, "{n}");
            }
            Literal::Str(s) => {
                // serde_json handles escaping; quote style is normalized later
                let _ = write!(out, "{}", Value::String(s.clone()));
            }
            Literal::EnumRef { namespace, variant } => {
                let _ = write!(out, "{namespace}.{variant}");
            }
            Literal::Array(items) if items.is_empty() => out.push_str("[]"),
            Literal::Array(items) => {
                out.push_str("[\n");
                for item in items {
                    out.push_str(&INDENT.repeat(depth + 1));
                    item.render_into(out, depth + 1);
                    out.push_str(",\n");
                }
                out.push_str(&INDENT.repeat(depth));
                out.push(']');
            }
            Literal::Object(entries) if entries.is_empty() => out.push_str("{}"),
            Literal::Object(entries) => {
                out.push_str("{\n");
                for (key, value) in entries {
                    out.push_str(&INDENT.repeat(depth + 1));
                    push_key(out, key);
                    out.push_str(": ");
                    value.render_into(out, depth + 1);
                    out.push_str(",\n");
                }
                out.push_str(&INDENT.repeat(depth));
                out.push('}');
            }
        }
    }
}

/// Object keys stay bare when identifier-safe, otherwise they are quoted.
fn push_key(out: &mut String, key: &str) {
    let identifier = !key.is_empty()
        && key
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');
    if identifier {
        out.push_str(key);
    } else {
        let _ = write!(out, "{}", Value::String(key.to_string()));
    }
}
