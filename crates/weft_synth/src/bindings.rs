//! Property-to-token binding
//!
//! Builders address tokens through path templates rather than free-form
//! string replacement: a template is parsed once into literal and
//! `{AxisName}` placeholder segments and substituted explicitly from the
//! current variant combination. The set of bindable properties is the
//! closed [`weft_core::PropertyKind`] enum.

use weft_core::{Color, Paint, TokenValue};
use weft_tokens::SymbolTable;

use crate::variants::Combination;

/// A parsed token path template, e.g. `"button/{State}/bg"`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathTemplate {
    segments: Vec<Segment>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Axis(String),
}

impl PathTemplate {
    /// Parse a template. An unterminated `{` is kept as literal text, so a
    /// malformed template degrades to a path that simply fails to resolve.
    pub fn parse(raw: &str) -> Self {
        let mut segments = Vec::new();
        let mut rest = raw;
        while let Some(open) = rest.find('{') {
            match rest[open..].find('}') {
                Some(close_rel) => {
                    if open > 0 {
                        segments.push(Segment::Literal(rest[..open].to_string()));
                    }
                    segments.push(Segment::Axis(rest[open + 1..open + close_rel].to_string()));
                    rest = &rest[open + close_rel + 1..];
                }
                None => break,
            }
        }
        if !rest.is_empty() {
            segments.push(Segment::Literal(rest.to_string()));
        }
        Self { segments }
    }

    /// Axis names this template depends on
    pub fn axes(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Axis(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Substitute placeholders from the combination. A placeholder whose
    /// axis is absent from the combination is left in literal form; the
    /// resulting path then misses the table and the binding falls back.
    pub fn substitute(&self, combo: &Combination) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Axis(name) => {
                    match combo.iter().find(|(axis, _)| axis == name) {
                        Some((_, value)) => out.push_str(value),
                        None => {
                            out.push('{');
                            out.push_str(name);
                            out.push('}');
                        }
                    }
                }
            }
        }
        out
    }
}

/// Resolve a template to a paint: a variable binding when the path hits a
/// color entry in the symbol table, otherwise the given hard-coded default.
pub fn resolve_paint(
    table: &SymbolTable,
    template: &PathTemplate,
    combo: &Combination,
    default: Color,
) -> Paint {
    let path = template.substitute(combo);
    match table.lookup(&path) {
        Some(entry) if matches!(entry.value, TokenValue::Color(_)) => {
            Paint::Variable(entry.handle)
        }
        _ => Paint::Solid(default),
    }
}

/// Resolve a template to a literal number (radii, border widths). Numeric
/// node properties read the entry's captured default-mode value; anything
/// unresolved degrades to the builder's hard-coded default.
pub fn resolve_number(
    table: &SymbolTable,
    template: &PathTemplate,
    combo: &Combination,
    default: f64,
) -> f64 {
    let path = template.substitute(combo);
    match table.lookup(&path).map(|entry| &entry.value) {
        Some(TokenValue::Number(n)) => *n,
        _ => default,
    }
}
