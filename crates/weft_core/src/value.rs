//! Token types and values
//!
//! Every token definition declares one of a small set of types. The type
//! drives two things: which host variable kind is created for it, and which
//! fallback value is substituted when an alias cannot be resolved.

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Declared type of a token definition
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Color,
    /// Lengths in pixels (spacing, radii, border widths, font sizes)
    Dimension,
    /// Unitless numbers (opacity, line-height multipliers, weights)
    Number,
    /// Free text (font family names, content strings)
    Text,
    Boolean,
}

impl TokenType {
    /// The typed default substituted when alias resolution fails.
    ///
    /// Colors degrade to a neutral mid-gray so broken references stay
    /// visible without being alarming; everything else degrades to zero.
    pub fn fallback(self) -> TokenValue {
        match self {
            TokenType::Color => TokenValue::Color(Color::MID_GRAY),
            TokenType::Dimension | TokenType::Number => TokenValue::Number(0.0),
            TokenType::Text => TokenValue::Text(String::new()),
            TokenType::Boolean => TokenValue::Bool(false),
        }
    }
}

/// A concrete token value
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenValue {
    Color(Color),
    Number(f64),
    Bool(bool),
    Text(String),
}

impl TokenValue {
    /// The token type this value naturally belongs to.
    ///
    /// `Number` maps to [`TokenType::Number`]; dimension tokens share the
    /// same numeric representation and are distinguished only by their
    /// declared type.
    pub fn token_type(&self) -> TokenType {
        match self {
            TokenValue::Color(_) => TokenType::Color,
            TokenValue::Number(_) => TokenType::Number,
            TokenValue::Bool(_) => TokenType::Boolean,
            TokenValue::Text(_) => TokenType::Text,
        }
    }

    /// Whether this value is assignable to a variable of the given type
    pub fn matches(&self, ty: TokenType) -> bool {
        matches!(
            (self, ty),
            (TokenValue::Color(_), TokenType::Color)
                | (TokenValue::Number(_), TokenType::Number)
                | (TokenValue::Number(_), TokenType::Dimension)
                | (TokenValue::Bool(_), TokenType::Boolean)
                | (TokenValue::Text(_), TokenType::Text)
        )
    }

    /// The color carried by this value, if any
    pub fn as_color(&self) -> Option<Color> {
        match self {
            TokenValue::Color(c) => Some(*c),
            _ => None,
        }
    }

    /// The number carried by this value, if any
    pub fn as_number(&self) -> Option<f64> {
        match self {
            TokenValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}
