//! Per-kind component builders
//!
//! Each [`ComponentKind`] has one builder producing a single artifact for
//! one variant combination. Dispatch is an exhaustive `match`, so a kind
//! without a builder is a compile error. Builders bind colors to symbol
//! table variables (so artifacts follow mode switches on the host) and
//! read numeric properties from the captured default-mode values; every
//! unresolved binding degrades to the builder's hard-coded default.
//!
//! Builders are fallible. The synthesizer catches a failure at the
//! single-component boundary and substitutes [`build_fallback`]'s generic
//! artifact, so one broken component never takes down its siblings.

use weft_core::{
    Color, ComponentDefinition, ComponentKind, Host, HostError, NodeId, Paint, PropertyKind,
};
use weft_tokens::SymbolTable;

use crate::bindings::{resolve_number, resolve_paint, PathTemplate};
use crate::fonts::FontBook;
use crate::variants::Combination;

/// A synthesized, sized visual unit awaiting placement
#[derive(Clone, Debug)]
pub struct Artifact {
    pub name: String,
    pub category: String,
    pub node: NodeId,
    pub width: f64,
    pub height: f64,
}

/// Shared state for one builder invocation
struct BuildCtx<'a> {
    host: &'a mut dyn Host,
    table: &'a SymbolTable,
    fonts: &'a FontBook,
    def: &'a ComponentDefinition,
    combo: &'a Combination,
}

impl BuildCtx<'_> {
    fn slug(&self) -> String {
        self.def.name.to_lowercase().replace(' ', "-")
    }

    /// Template for a property: the catalog's explicit binding if present,
    /// otherwise `<slug>/<leaf>` (which the symbol table searches under
    /// the tier prefixes).
    fn template(&self, kind: PropertyKind) -> PathTemplate {
        if let Some(binding) = self.def.bindings.iter().find(|b| b.property == kind) {
            return PathTemplate::parse(&binding.template);
        }
        let leaf = match kind {
            PropertyKind::Background => "bg",
            PropertyKind::Border => "border",
            PropertyKind::Text => "text",
            PropertyKind::Radius => "radius",
        };
        PathTemplate::parse(&format!("{}/{leaf}", self.slug()))
    }

    fn paint(&self, kind: PropertyKind, default: Color) -> Paint {
        resolve_paint(self.table, &self.template(kind), self.combo, default)
    }

    fn number(&self, kind: PropertyKind, default: f64) -> f64 {
        resolve_number(self.table, &self.template(kind), self.combo, default)
    }

    /// Scale applied for a `Size` axis, if the combination carries one
    fn size_factor(&self) -> f64 {
        match self.combo.iter().find(|(axis, _)| axis == "Size") {
            Some((_, value)) => match value.as_str() {
                "xs" => 0.7,
                "sm" | "small" => 0.85,
                "lg" | "large" => 1.2,
                "xl" => 1.4,
                _ => 1.0,
            },
            None => 1.0,
        }
    }

    fn artifact_name(&self) -> String {
        if self.combo.is_empty() {
            self.def.name.clone()
        } else {
            let parts: Vec<String> = self
                .combo
                .iter()
                .map(|(axis, value)| format!("{axis}={value}"))
                .collect();
            format!("{} / {}", self.def.name, parts.join(", "))
        }
    }

    fn frame(&mut self, width: f64, height: f64) -> Result<NodeId, HostError> {
        let name = self.artifact_name();
        let node = self.host.create_frame(&name)?;
        self.host.set_bounds(node, 0.0, 0.0, width, height)?;
        Ok(node)
    }

    /// Add a text label; font trouble downgrades to an artifact without a
    /// label rather than a failed build.
    fn label(
        &mut self,
        parent: NodeId,
        content: &str,
        style: &str,
        size: f64,
        x: f64,
        y: f64,
        paint: Paint,
    ) {
        let family = self.fonts.family().to_string();
        let style = self.fonts.style_or_regular(style).to_string();
        match self.host.create_text(content, &family, &style, size) {
            Ok(text) => {
                let _ = self.host.set_text_color(text, paint);
                let _ = self.host.append_child(parent, text);
                let width = content.len() as f64 * size * 0.6;
                let _ = self.host.set_bounds(text, x, y, width, size * 1.4);
            }
            Err(err) => {
                tracing::debug!("label for {} skipped: {err}", self.def.name);
            }
        }
    }
}

/// Build one artifact for one combination of the definition's axes.
pub fn build_component(
    host: &mut dyn Host,
    table: &SymbolTable,
    fonts: &FontBook,
    def: &ComponentDefinition,
    combo: &Combination,
) -> Result<Artifact, HostError> {
    let mut ctx = BuildCtx {
        host,
        table,
        fonts,
        def,
        combo,
    };
    let (node, width, height) = match def.kind {
        ComponentKind::Button => button(&mut ctx)?,
        ComponentKind::Input => input(&mut ctx)?,
        ComponentKind::Card => card(&mut ctx)?,
        ComponentKind::Badge => badge(&mut ctx)?,
        ComponentKind::Checkbox => checkbox(&mut ctx)?,
        ComponentKind::Toggle => toggle(&mut ctx)?,
        ComponentKind::Label => label_component(&mut ctx)?,
    };
    Ok(Artifact {
        name: ctx.artifact_name(),
        category: def.category.clone(),
        node,
        width,
        height,
    })
}

/// Generic stand-in when a kind builder fails: token-bound background,
/// border, and radius plus the component name as a label.
pub fn build_fallback(
    host: &mut dyn Host,
    table: &SymbolTable,
    fonts: &FontBook,
    def: &ComponentDefinition,
) -> Result<Artifact, HostError> {
    let combo = Combination::new();
    let mut ctx = BuildCtx {
        host,
        table,
        fonts,
        def,
        combo: &combo,
    };

    let (width, height) = (200.0, 80.0);
    let node = ctx.host.create_frame(&format!("{} (fallback)", def.name))?;
    ctx.host.set_bounds(node, 0.0, 0.0, width, height)?;
    let bg = ctx.paint(PropertyKind::Background, Color::MID_GRAY.with_alpha(0.25));
    ctx.host.set_background(node, bg)?;
    let border = ctx.paint(PropertyKind::Border, Color::MID_GRAY);
    ctx.host.set_border(node, border, 1.0)?;
    let radius = ctx.number(PropertyKind::Radius, 4.0);
    ctx.host.set_corner_radius(node, radius)?;
    let text = ctx.paint(PropertyKind::Text, Color::BLACK);
    ctx.label(node, &def.name, "Regular", 13.0, 16.0, 30.0, text);

    Ok(Artifact {
        name: format!("{} (fallback)", def.name),
        category: def.category.clone(),
        node,
        width,
        height,
    })
}

fn button(ctx: &mut BuildCtx<'_>) -> Result<(NodeId, f64, f64), HostError> {
    let f = ctx.size_factor();
    let (w, h) = (128.0 * f, 40.0 * f);
    let node = ctx.frame(w, h)?;
    let bg = ctx.paint(PropertyKind::Background, Color::from_hex(0x1E66F5));
    ctx.host.set_background(node, bg)?;
    let radius = ctx.number(PropertyKind::Radius, 6.0);
    ctx.host.set_corner_radius(node, radius)?;
    let text = ctx.paint(PropertyKind::Text, Color::WHITE);
    let name = ctx.def.name.clone();
    ctx.label(node, &name, "Medium", 14.0 * f, 16.0 * f, 10.0 * f, text);
    Ok((node, w, h))
}

fn input(ctx: &mut BuildCtx<'_>) -> Result<(NodeId, f64, f64), HostError> {
    let f = ctx.size_factor();
    let (w, h) = (240.0 * f, 40.0 * f);
    let node = ctx.frame(w, h)?;
    let bg = ctx.paint(PropertyKind::Background, Color::WHITE);
    ctx.host.set_background(node, bg)?;
    let border = ctx.paint(PropertyKind::Border, Color::from_hex(0xCCD0DA));
    ctx.host.set_border(node, border, 1.0)?;
    let radius = ctx.number(PropertyKind::Radius, 6.0);
    ctx.host.set_corner_radius(node, radius)?;
    let text = ctx.paint(PropertyKind::Text, Color::from_hex(0x9CA0B0));
    ctx.label(node, "Placeholder", "Regular", 14.0 * f, 12.0 * f, 10.0 * f, text);
    Ok((node, w, h))
}

fn card(ctx: &mut BuildCtx<'_>) -> Result<(NodeId, f64, f64), HostError> {
    let f = ctx.size_factor();
    let (w, h) = (320.0 * f, 200.0 * f);
    let node = ctx.frame(w, h)?;
    let bg = ctx.paint(PropertyKind::Background, Color::WHITE);
    ctx.host.set_background(node, bg)?;
    let border = ctx.paint(PropertyKind::Border, Color::from_hex(0xE6E9EF));
    ctx.host.set_border(node, border, 1.0)?;
    let radius = ctx.number(PropertyKind::Radius, 10.0);
    ctx.host.set_corner_radius(node, radius)?;
    let text = ctx.paint(PropertyKind::Text, Color::from_hex(0x4C4F69));
    let name = ctx.def.name.clone();
    ctx.label(node, &name, "Semi Bold", 16.0 * f, 20.0 * f, 20.0 * f, text);
    Ok((node, w, h))
}

fn badge(ctx: &mut BuildCtx<'_>) -> Result<(NodeId, f64, f64), HostError> {
    let f = ctx.size_factor();
    let (w, h) = (72.0 * f, 24.0 * f);
    let node = ctx.frame(w, h)?;
    let bg = ctx.paint(PropertyKind::Background, Color::from_hex(0x0D9488));
    ctx.host.set_background(node, bg)?;
    let radius = ctx.number(PropertyKind::Radius, h / 2.0);
    ctx.host.set_corner_radius(node, radius)?;
    let text = ctx.paint(PropertyKind::Text, Color::WHITE);
    let name = ctx.def.name.clone();
    ctx.label(node, &name, "Medium", 11.0 * f, 10.0 * f, 5.0 * f, text);
    Ok((node, w, h))
}

fn checkbox(ctx: &mut BuildCtx<'_>) -> Result<(NodeId, f64, f64), HostError> {
    let f = ctx.size_factor();
    let s = 20.0 * f;
    let node = ctx.frame(s, s)?;
    let bg = ctx.paint(PropertyKind::Background, Color::WHITE);
    ctx.host.set_background(node, bg)?;
    let border = ctx.paint(PropertyKind::Border, Color::from_hex(0xBCC0CC));
    ctx.host.set_border(node, border, 1.5)?;
    let radius = ctx.number(PropertyKind::Radius, 4.0);
    ctx.host.set_corner_radius(node, radius)?;
    Ok((node, s, s))
}

fn toggle(ctx: &mut BuildCtx<'_>) -> Result<(NodeId, f64, f64), HostError> {
    let f = ctx.size_factor();
    let (w, h) = (44.0 * f, 24.0 * f);
    let node = ctx.frame(w, h)?;
    let bg = ctx.paint(PropertyKind::Background, Color::from_hex(0x1E66F5));
    ctx.host.set_background(node, bg)?;
    ctx.host.set_corner_radius(node, h / 2.0)?;
    Ok((node, w, h))
}

fn label_component(ctx: &mut BuildCtx<'_>) -> Result<(NodeId, f64, f64), HostError> {
    let f = ctx.size_factor();
    let (w, h) = (140.0 * f, 22.0 * f);
    let node = ctx.frame(w, h)?;
    let text = ctx.paint(PropertyKind::Text, Color::from_hex(0x4C4F69));
    let name = ctx.def.name.clone();
    ctx.label(node, &name, "Regular", 14.0 * f, 0.0, 2.0 * f, text);
    Ok((node, w, h))
}
