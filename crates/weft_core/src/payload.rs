//! Input payload data model
//!
//! The engine consumes one declarative payload: three tiers of token
//! definitions, sparse per-theme override sets, style definitions, and a
//! component catalog. The payload is read-only input; nothing in the
//! pipeline mutates it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::value::{TokenType, TokenValue};

/// One leaf entry in the token specification.
///
/// Exactly one of `value` / `alias_path` is meaningful; when both are
/// present the alias wins, matching how authoring tools export references.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TokenDefinition {
    /// Slash-separated path within its tier, e.g. `"color/bg/primary"`
    pub path: String,
    #[serde(rename = "type")]
    pub ty: TokenType,
    #[serde(default)]
    pub value: Option<TokenValue>,
    /// Symbolic reference to another token's path instead of a literal value
    #[serde(default, rename = "aliasPath")]
    pub alias_path: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Token definitions grouped by dependency tier
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct VariableTiers {
    #[serde(default)]
    pub primitives: Vec<TokenDefinition>,
    #[serde(default)]
    pub semantic: Vec<TokenDefinition>,
    #[serde(default)]
    pub component: Vec<TokenDefinition>,
}

/// Sparse override set for one theme mode
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ThemeDefinition {
    /// Fully-qualified path (`"<tier>/<path>"`) to replacement value.
    /// BTreeMap keeps application order deterministic.
    #[serde(default)]
    pub overrides: BTreeMap<String, ThemeOverride>,
}

/// One replacement value inside a theme override set
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ThemeOverride {
    pub value: TokenValue,
}

/// A text style definition (font family/size/weight, token-addressable)
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TextStyleDefinition {
    pub name: String,
    #[serde(rename = "fontFamily")]
    pub font_family: String,
    #[serde(default = "default_font_style", rename = "fontStyle")]
    pub font_style: String,
    #[serde(rename = "fontSize")]
    pub font_size: f64,
    #[serde(default, rename = "lineHeight")]
    pub line_height: Option<f64>,
}

fn default_font_style() -> String {
    "Regular".to_string()
}

/// An effect style definition (a single drop shadow)
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EffectStyleDefinition {
    pub name: String,
    #[serde(rename = "offsetY")]
    pub offset_y: f64,
    pub blur: f64,
    pub color: crate::Color,
}

/// A solid paint style definition
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ColorStyleDefinition {
    pub name: String,
    pub color: crate::Color,
}

/// One dimension of a component's variant space
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VariantAxis {
    pub name: String,
    pub values: Vec<String>,
}

/// The closed set of component kinds the synthesizer knows how to build.
///
/// Dispatch over this enum is an exhaustive `match`, so adding a kind
/// without a builder is a compile error rather than a runtime miss.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Button,
    Input,
    Card,
    Badge,
    Checkbox,
    Toggle,
    Label,
}

/// Visual properties a builder can bind to a token
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyKind {
    Background,
    Border,
    Text,
    Radius,
}

/// A per-property token path template. Templates may reference variant
/// axes with `{AxisName}` placeholders, substituted per combination.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PropertyBindingDef {
    pub property: PropertyKind,
    pub template: String,
}

/// One entry in the component catalog
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ComponentDefinition {
    pub name: String,
    pub kind: ComponentKind,
    /// Section the artifact is grouped under ("Forms", "Feedback", ...)
    pub category: String,
    /// Ordered variant axes; empty means a single artifact is synthesized
    #[serde(default)]
    pub axes: Vec<VariantAxis>,
    /// One value per axis; must select an existing value from each axis
    #[serde(default, rename = "defaultVariant")]
    pub default_variant: BTreeMap<String, String>,
    /// Token path templates per bindable property; builders fall back to
    /// slug-derived paths for properties not listed here
    #[serde(default)]
    pub bindings: Vec<PropertyBindingDef>,
}

impl ComponentDefinition {
    /// The default combination as an ordered (axis, value) list following
    /// axis declaration order
    pub fn default_combination(&self) -> Vec<(String, String)> {
        self.axes
            .iter()
            .filter_map(|axis| {
                self.default_variant
                    .get(&axis.name)
                    .map(|v| (axis.name.clone(), v.clone()))
            })
            .collect()
    }
}

/// The full input payload
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Payload {
    #[serde(default)]
    pub variables: VariableTiers,
    /// Theme key (mode name) to override set
    #[serde(default)]
    pub themes: BTreeMap<String, ThemeDefinition>,
    #[serde(default, rename = "textStyles")]
    pub text_styles: Vec<TextStyleDefinition>,
    #[serde(default, rename = "effectStyles")]
    pub effect_styles: Vec<EffectStyleDefinition>,
    #[serde(default, rename = "colorStyles")]
    pub color_styles: Vec<ColorStyleDefinition>,
    #[serde(default)]
    pub components: Vec<ComponentDefinition>,
}

impl Payload {
    /// Parse a payload from its JSON wire form
    pub fn from_json(json: &str) -> Result<Self, crate::EngineError> {
        serde_json::from_str(json).map_err(|e| crate::EngineError::InvalidPayload(e.to_string()))
    }
}

/// Which stages of a run are enabled
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthOptions {
    pub variables: bool,
    #[serde(rename = "textStyles")]
    pub text_styles: bool,
    #[serde(rename = "effectStyles")]
    pub effect_styles: bool,
    #[serde(rename = "colorStyles")]
    pub color_styles: bool,
    pub components: bool,
}

impl Default for SynthOptions {
    fn default() -> Self {
        Self {
            variables: true,
            text_styles: true,
            effect_styles: true,
            color_styles: true,
            components: true,
        }
    }
}
