//! End-to-end runs against the in-memory host

use weft_core::host::memory::{MemoryHost, NodeKind};
use weft_core::{
    Color, EngineError, LogLevel, MemorySink, Payload, SynthOptions, TokenValue,
};
use weft_synth::run;

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn demo_payload() -> Payload {
    Payload::from_json(
        r##"{
            "variables": {
                "primitives": [
                    { "path": "color/teal/600", "type": "color", "value": "#0d9488" },
                    { "path": "radius/md", "type": "number", "value": 8 }
                ],
                "semantic": [
                    { "path": "color/bg/accent", "type": "color", "aliasPath": "color/teal/600" }
                ]
            },
            "themes": {
                "Dark": {
                    "overrides": {
                        "semantic/color/bg/accent": { "value": "#115e59" }
                    }
                }
            },
            "textStyles": [
                { "name": "Body", "fontFamily": "Inter", "fontSize": 14 }
            ],
            "effectStyles": [
                { "name": "Shadow/Soft", "offsetY": 2, "blur": 8, "color": "#00000033" }
            ],
            "colorStyles": [
                { "name": "Accent", "color": "#0d9488" }
            ],
            "components": [
                {
                    "name": "Button", "kind": "button", "category": "Forms",
                    "axes": [ { "name": "Size", "values": ["sm", "md"] } ],
                    "defaultVariant": { "Size": "md" }
                },
                { "name": "Badge", "kind": "badge", "category": "Feedback" }
            ]
        }"##,
    )
    .unwrap()
}

#[test]
fn missing_payload_is_fatal_and_touches_nothing() {
    init_tracing();
    let mut host = MemoryHost::new();
    let sink = MemorySink::new();

    let result = run(&mut host, &sink, None, &SynthOptions::default());

    assert!(matches!(result, Err(EngineError::MissingPayload)));
    assert!(sink.fatal_error().is_some());
    assert!(sink.done_stats().is_none());
    // Not a single host call was made
    assert!(host.is_empty());
}

#[test]
fn full_run_reports_done_stats() {
    init_tracing();
    let mut host = MemoryHost::new();
    let sink = MemorySink::new();
    let payload = demo_payload();

    let stats = run(&mut host, &sink, Some(&payload), &SynthOptions::default()).unwrap();

    assert_eq!(stats.variables, 3);
    assert_eq!(stats.styles, 3);
    assert_eq!(stats.components, 2);
    assert_eq!(sink.done_stats(), Some(stats));

    // Tier collections exist, and the alias chain resolves end to end
    assert!(host.collection("Primitives").is_some());
    assert_eq!(
        host.resolved_value("Semantic", "color/bg/accent", "Default"),
        Some(TokenValue::Color(Color::from_hex(0x0D9488)))
    );

    // One section per catalog category, plus the docs frame below them
    let names: Vec<&str> = host.nodes().iter().map(|n| n.name.as_str()).collect();
    assert!(names.contains(&"Forms Section"));
    assert!(names.contains(&"Feedback Section"));
    assert!(names.contains(&"Getting Started"));

    // The two-value Size axis becomes a variant set with two children
    let set = host
        .nodes()
        .iter()
        .find(|n| n.name == "Button Variants")
        .unwrap();
    assert_eq!(set.children.len(), 2);
}

#[test]
fn dark_theme_gets_a_mode_with_overrides_applied() {
    init_tracing();
    let mut host = MemoryHost::new();
    let sink = MemorySink::new();
    let payload = demo_payload();

    run(&mut host, &sink, Some(&payload), &SynthOptions::default()).unwrap();

    assert!(host.mode_id("Semantic", "Dark").is_some());
    assert_eq!(
        host.resolved_value("Semantic", "color/bg/accent", "Dark"),
        Some(TokenValue::Color(Color::from_hex(0x115E59)))
    );
    // Primitives never theme
    assert!(host.mode_id("Primitives", "Dark").is_none());
}

#[test]
fn broken_component_falls_back_without_poisoning_siblings() {
    init_tracing();
    // The axis-less Widget builds a frame named exactly "Widget"; refuse it.
    let mut host = MemoryHost::new().poison_frame_named("Widget");
    let sink = MemorySink::new();
    let payload = Payload::from_json(
        r#"{
            "components": [
                { "name": "Widget", "kind": "card", "category": "Layout" },
                { "name": "Badge", "kind": "badge", "category": "Layout" }
            ]
        }"#,
    )
    .unwrap();

    let stats = run(&mut host, &sink, Some(&payload), &SynthOptions::default()).unwrap();

    // Both catalog entries produced an artifact; the broken one is generic
    assert_eq!(stats.components, 2);
    let errors = sink.messages_at(LogLevel::Error);
    assert!(errors.iter().any(|m| m.contains("Widget")));
    assert!(host.nodes().iter().any(|n| n.name == "Widget (fallback)"));
    assert!(host.nodes().iter().any(|n| n.name == "Badge"));
    // The run still finished normally
    assert!(sink.fatal_error().is_none());
    assert!(sink.done_stats().is_some());
}

#[test]
fn disabled_variables_stage_previews_with_hard_coded_defaults() {
    init_tracing();
    let mut host = MemoryHost::new();
    let sink = MemorySink::new();
    let payload = demo_payload();
    let options = SynthOptions {
        variables: false,
        ..SynthOptions::default()
    };

    let stats = run(&mut host, &sink, Some(&payload), &options).unwrap();

    assert_eq!(stats.variables, 0);
    assert_eq!(host.variable_count(), 0);
    assert!(host.collection("Primitives").is_none());

    // Components still synthesize, painted with literal defaults
    assert_eq!(stats.components, 2);
    let badge = host.nodes().iter().find(|n| n.name == "Badge").unwrap();
    assert!(matches!(
        badge.background,
        Some(weft_core::Paint::Solid(_))
    ));
}

#[test]
fn progress_ends_at_one_hundred() {
    init_tracing();
    let mut host = MemoryHost::new();
    let sink = MemorySink::new();
    let payload = demo_payload();

    run(&mut host, &sink, Some(&payload), &SynthOptions::default()).unwrap();

    let percents: Vec<u8> = sink
        .events()
        .iter()
        .filter_map(|e| match e {
            weft_core::SynthEvent::Progress { percent, .. } => Some(*percent),
            _ => None,
        })
        .collect();
    assert!(!percents.is_empty());
    assert!(percents.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(percents.last(), Some(&100));
}

#[test]
fn mode_cap_warning_reaches_the_event_stream() {
    init_tracing();
    // Semantic and Component each request a Dark mode on top of their
    // default; a one-mode host cap refuses both.
    let mut host = MemoryHost::new().with_mode_limit(1);
    let sink = MemorySink::new();
    let payload = demo_payload();

    run(&mut host, &sink, Some(&payload), &SynthOptions::default()).unwrap();

    let warnings = sink.messages_at(LogLevel::Warning);
    assert!(
        warnings
            .iter()
            .any(|m| m.contains("Semantic") && m.contains("modes")),
        "no mode-cap warning on the event stream; warnings seen: {warnings:?}"
    );
    assert!(warnings
        .iter()
        .any(|m| m.contains("Component") && m.contains("modes")));
}

#[test]
fn override_summaries_are_logged_on_the_stream() {
    init_tracing();
    let mut host = MemoryHost::new();
    let sink = MemorySink::new();
    let payload = demo_payload();

    run(&mut host, &sink, Some(&payload), &SynthOptions::default()).unwrap();

    let infos = sink.messages_at(LogLevel::Info);
    // One summary per (theme, themable tier) pass; the component pass sees
    // only the foreign-prefix entry and skips it.
    assert!(infos.contains(&"theme overrides (semantic): 1 applied, 0 skipped".to_string()));
    assert!(infos.contains(&"theme overrides (component): 0 applied, 1 skipped".to_string()));
}

#[test]
fn missing_font_variant_warning_reaches_the_stream() {
    init_tracing();
    let mut host = MemoryHost::new().without_font("Inter", "Bold");
    let sink = MemorySink::new();
    let payload = demo_payload();

    run(&mut host, &sink, Some(&payload), &SynthOptions::default()).unwrap();

    let warnings = sink.messages_at(LogLevel::Warning);
    assert!(warnings
        .iter()
        .any(|m| m.contains("Bold") && m.contains("substituting")));
}

#[test]
fn labels_survive_a_missing_bold_face() {
    init_tracing();
    let mut host = MemoryHost::new().without_font("Inter", "Medium");
    let sink = MemorySink::new();
    let payload = demo_payload();

    run(&mut host, &sink, Some(&payload), &SynthOptions::default()).unwrap();

    // Button labels ask for Medium; Regular is substituted instead
    let substituted = host.nodes().iter().any(|n| {
        matches!(
            &n.kind,
            NodeKind::Text { content, style, .. }
                if content.contains("Button") && style == "Regular"
        )
    });
    assert!(substituted);
}
