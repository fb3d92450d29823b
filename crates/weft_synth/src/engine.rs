//! Run orchestration
//!
//! One `run` drives every stage in order against the host. The stage
//! sequence is fixed and single-threaded; the symbol table is written
//! during the variable stages and only read afterwards. Per-item failures
//! are absorbed where they occur and surfaced on the event stream; the
//! only fatal condition is a missing payload.

use weft_core::events::{EventSink, LogLevel, RunStats, SynthEvent};
use weft_core::{EngineError, Host, Payload, SynthOptions};
use weft_layout::{arrange_sections, arrange_variant_grid, GridSpec, LayoutBox, SectionSpec};
use weft_tokens::{
    apply_overrides, create_collection, create_variables, Collection, SymbolTable, Tier,
};

use crate::builders::{build_component, build_fallback, Artifact};
use crate::fonts::FontBook;
use crate::variants::{generate_combinations, Combination};

/// Global cap on generated combinations per component
pub const VARIANT_CAP: usize = 24;

/// Run a full synthesis pass.
///
/// With `payload == None` the engine emits a single `Error` event, makes
/// no host calls, and returns [`EngineError::MissingPayload`]. Otherwise
/// the run completes and reports cumulative stats both as the return
/// value and as the terminal `Done` event.
pub fn run(
    host: &mut dyn Host,
    sink: &dyn EventSink,
    payload: Option<&Payload>,
    options: &SynthOptions,
) -> Result<RunStats, EngineError> {
    let Some(payload) = payload else {
        sink.emit(SynthEvent::Error {
            message: "no token payload available".to_string(),
        });
        return Err(EngineError::MissingPayload);
    };

    let mut stats = RunStats::default();

    sink.progress(5, "loading fonts");
    let fonts = FontBook::load(host, FontBook::DEFAULT_FAMILY, &FontBook::DEFAULT_STYLES);
    for style in fonts.failed_styles() {
        sink.log(
            LogLevel::Warning,
            &format!(
                "font {} {style} unavailable, substituting Regular",
                fonts.family()
            ),
        );
    }
    if !fonts.any_loaded() {
        sink.log(
            LogLevel::Warning,
            "no font variants loaded; artifacts will carry no labels",
        );
    }

    let mut table = SymbolTable::new();
    if options.variables {
        run_variable_stages(host, sink, payload, &mut table, &mut stats);
    } else {
        sink.log(
            LogLevel::Info,
            "variables stage disabled; bindings use hard-coded defaults",
        );
    }

    run_style_stages(host, sink, payload, options, &fonts, &mut stats);

    let mut artifacts: Vec<Artifact> = Vec::new();
    if options.components {
        sink.progress(60, "synthesizing components");
        for def in &payload.components {
            if let Some(artifact) = synthesize_component(host, sink, &table, &fonts, def) {
                artifacts.push(artifact);
                stats.components += 1;
            }
        }

        sink.progress(85, "packing category sections");
        let bottom = place_sections(host, sink, payload, &mut artifacts);

        sink.progress(95, "writing getting-started notes");
        write_getting_started(host, &fonts, &stats, bottom);
    }

    sink.progress(100, "synthesis complete");
    sink.emit(SynthEvent::Done { stats });
    Ok(stats)
}

/// Collections, variables, and theme overrides, tier by tier.
fn run_variable_stages(
    host: &mut dyn Host,
    sink: &dyn EventSink,
    payload: &Payload,
    table: &mut SymbolTable,
    stats: &mut RunStats,
) {
    sink.progress(15, "creating variable collections");
    let theme_names: Vec<String> = payload.themes.keys().cloned().collect();
    let mut collections: Vec<(Tier, Collection)> = Vec::new();

    for tier in Tier::ALL {
        // Primitives hold raw values and never theme; the other tiers get
        // one mode per declared theme on top of their default.
        let mode_names: Vec<String> = match tier {
            Tier::Primitives => vec!["Value".to_string()],
            Tier::Semantic | Tier::Component => std::iter::once("Default".to_string())
                .chain(theme_names.iter().cloned())
                .collect(),
        };
        let definitions = match tier {
            Tier::Primitives => &payload.variables.primitives,
            Tier::Semantic => &payload.variables.semantic,
            Tier::Component => &payload.variables.component,
        };

        match create_collection(host, tier.collection_name(), &mode_names) {
            Ok(collection) => {
                if collection.modes.len() < mode_names.len() {
                    sink.log(
                        LogLevel::Warning,
                        &format!(
                            "collection {}: host capped modes at {} of {} requested",
                            tier.collection_name(),
                            collection.modes.len(),
                            mode_names.len()
                        ),
                    );
                }
                let outcome = create_variables(
                    host,
                    &collection,
                    tier,
                    definitions,
                    collection.default_mode(),
                    table,
                );
                stats.variables += outcome.created;
                collections.push((tier, collection));
            }
            Err(err) => {
                sink.log(
                    LogLevel::Warning,
                    &format!("collection {} not created: {err}", tier.collection_name()),
                );
            }
        }
    }

    sink.progress(35, "applying theme overrides");
    for (theme_key, theme) in &payload.themes {
        for (tier, collection) in &collections {
            if *tier == Tier::Primitives {
                continue;
            }
            let Some(mode) = collection.mode_named(theme_key) else {
                // Mode creation failed earlier (host cap); already warned.
                tracing::debug!("theme {theme_key} has no mode in {}", collection.name);
                continue;
            };
            let report = apply_overrides(host, mode, &theme.overrides, table, tier.prefix());
            sink.log(LogLevel::Info, &report.summary(tier.prefix()));
        }
    }
}

/// Text, effect, and color style creation.
fn run_style_stages(
    host: &mut dyn Host,
    sink: &dyn EventSink,
    payload: &Payload,
    options: &SynthOptions,
    fonts: &FontBook,
    stats: &mut RunStats,
) {
    if options.text_styles {
        sink.progress(45, "creating text styles");
        for def in &payload.text_styles {
            let mut def = def.clone();
            def.font_style = fonts.style_or_regular(&def.font_style).to_string();
            match host.create_text_style(&def) {
                Ok(_) => stats.styles += 1,
                Err(err) => sink.log(
                    LogLevel::Warning,
                    &format!("text style {} skipped: {err}", def.name),
                ),
            }
        }
    }
    if options.effect_styles {
        sink.progress(50, "creating effect styles");
        for def in &payload.effect_styles {
            match host.create_effect_style(def) {
                Ok(_) => stats.styles += 1,
                Err(err) => sink.log(
                    LogLevel::Warning,
                    &format!("effect style {} skipped: {err}", def.name),
                ),
            }
        }
    }
    if options.color_styles {
        sink.progress(55, "creating color styles");
        for def in &payload.color_styles {
            match host.create_color_style(def) {
                Ok(_) => stats.styles += 1,
                Err(err) => sink.log(
                    LogLevel::Warning,
                    &format!("color style {} skipped: {err}", def.name),
                ),
            }
        }
    }
}

/// Synthesize one catalog entry: a single artifact for axis-less
/// definitions, otherwise a variant-set frame holding the generated grid.
///
/// Builder failures are caught here, logged with the component name, and
/// replaced with the generic fallback; `None` only when even the fallback
/// could not be built.
fn synthesize_component(
    host: &mut dyn Host,
    sink: &dyn EventSink,
    table: &SymbolTable,
    fonts: &FontBook,
    def: &weft_core::ComponentDefinition,
) -> Option<Artifact> {
    let build_one = |host: &mut dyn Host, sink: &dyn EventSink, combo: &Combination| {
        match build_component(host, table, fonts, def, combo) {
            Ok(artifact) => Some(artifact),
            Err(err) => {
                sink.log(
                    LogLevel::Error,
                    &format!("component {}: builder failed: {err}", def.name),
                );
                match build_fallback(host, table, fonts, def) {
                    Ok(artifact) => Some(artifact),
                    Err(err) => {
                        sink.log(
                            LogLevel::Error,
                            &format!("component {}: fallback failed: {err}", def.name),
                        );
                        None
                    }
                }
            }
        }
    };

    if def.axes.is_empty() {
        return build_one(host, sink, &Combination::new());
    }

    let combos = generate_combinations(&def.axes, &def.default_variant, VARIANT_CAP);
    let mut parts: Vec<Artifact> = Vec::new();
    for combo in &combos {
        if let Some(artifact) = build_one(host, sink, combo) {
            parts.push(artifact);
        }
    }
    if parts.is_empty() {
        return None;
    }

    // Grid-pack the variants inside one set frame
    let mut boxes: Vec<LayoutBox> = parts
        .iter()
        .map(|p| LayoutBox::sized(p.width, p.height))
        .collect();
    let axis_counts: Vec<usize> = def.axes.iter().map(|a| a.values.len()).collect();
    arrange_variant_grid(&mut boxes, &axis_counts, &GridSpec::default());

    let set_name = format!("{} Variants", def.name);
    let set_node = match host.create_frame(&set_name) {
        Ok(node) => node,
        Err(err) => {
            sink.log(
                LogLevel::Error,
                &format!("component {}: variant frame failed: {err}", def.name),
            );
            return None;
        }
    };
    let mut width: f64 = 0.0;
    let mut height: f64 = 0.0;
    for (part, b) in parts.iter().zip(&boxes) {
        let _ = host.append_child(set_node, part.node);
        let _ = host.set_bounds(part.node, b.x, b.y, b.width, b.height);
        width = width.max(b.x + b.width);
        height = height.max(b.y + b.height);
    }
    let _ = host.set_bounds(set_node, 0.0, 0.0, width, height);

    Some(Artifact {
        name: set_name,
        category: def.category.clone(),
        node: set_node,
        width,
        height,
    })
}

/// Group artifacts into category sections and place them on the host.
/// Returns the bottom edge of the last section.
fn place_sections(
    host: &mut dyn Host,
    sink: &dyn EventSink,
    payload: &Payload,
    artifacts: &mut [Artifact],
) -> f64 {
    // Fixed category order: first appearance in the catalog
    let mut groups: Vec<(String, Vec<usize>)> = Vec::new();
    for def in &payload.components {
        if !groups.iter().any(|(c, _)| *c == def.category) {
            groups.push((def.category.clone(), Vec::new()));
        }
    }
    for (i, artifact) in artifacts.iter().enumerate() {
        if let Some((_, members)) = groups.iter_mut().find(|(c, _)| *c == artifact.category) {
            members.push(i);
        }
    }

    let mut boxes: Vec<LayoutBox> = artifacts
        .iter()
        .map(|a| LayoutBox::sized(a.width, a.height))
        .collect();
    let spec = SectionSpec::default();
    let sections = arrange_sections(&mut boxes, &groups, &spec);

    let mut bottom: f64 = 0.0;
    for section in &sections {
        let frame = match host.create_frame(&format!("{} Section", section.category)) {
            Ok(frame) => frame,
            Err(err) => {
                sink.log(
                    LogLevel::Warning,
                    &format!("section {} not created: {err}", section.category),
                );
                continue;
            }
        };
        let _ = host.set_bounds(frame, section.x, section.y, section.width, section.height);
        for &i in &section.children {
            let _ = host.append_child(frame, artifacts[i].node);
            let _ = host.set_bounds(
                artifacts[i].node,
                boxes[i].x,
                boxes[i].y,
                boxes[i].width,
                boxes[i].height,
            );
        }
        bottom = section.y + section.height;
    }
    bottom
}

/// One documentation frame below the sections summarizing the run.
fn write_getting_started(host: &mut dyn Host, fonts: &FontBook, stats: &RunStats, bottom: f64) {
    let Ok(frame) = host.create_frame("Getting Started") else {
        tracing::debug!("getting-started frame skipped");
        return;
    };
    let _ = host.set_bounds(frame, 0.0, bottom + 96.0, 720.0, 200.0);

    let lines = [
        ("Weft design system".to_string(), "Bold", 24.0),
        (
            format!("{} variables across Primitives, Semantic, Component", stats.variables),
            "Regular",
            14.0,
        ),
        (format!("{} styles", stats.styles), "Regular", 14.0),
        (
            format!("{} components, grouped by category below", stats.components),
            "Regular",
            14.0,
        ),
    ];
    let mut y = 32.0;
    for (content, style, size) in lines {
        let style = fonts.style_or_regular(style);
        match host.create_text(&content, fonts.family(), style, size) {
            Ok(text) => {
                let _ = host.append_child(frame, text);
                let _ = host.set_bounds(text, 32.0, y, 640.0, size * 1.5);
                y += size * 2.0;
            }
            Err(err) => tracing::debug!("getting-started line skipped: {err}"),
        }
    }
}
