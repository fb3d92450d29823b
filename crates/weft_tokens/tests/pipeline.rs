//! Three-tier pipeline behavior against the in-memory host

use std::collections::BTreeMap;

use weft_core::host::memory::MemoryHost;
use weft_core::payload::ThemeOverride;
use weft_core::{Color, TokenDefinition, TokenType, TokenValue};
use weft_tokens::{
    apply_overrides, create_collection, create_variables, Collection, SymbolTable, Tier,
};

fn literal(path: &str, ty: TokenType, value: TokenValue) -> TokenDefinition {
    TokenDefinition {
        path: path.into(),
        ty,
        value: Some(value),
        alias_path: None,
        description: None,
    }
}

fn alias(path: &str, ty: TokenType, target: &str) -> TokenDefinition {
    TokenDefinition {
        path: path.into(),
        ty,
        value: None,
        alias_path: Some(target.into()),
        description: None,
    }
}

fn run_tier(
    host: &mut MemoryHost,
    table: &mut SymbolTable,
    tier: Tier,
    modes: &[&str],
    defs: &[TokenDefinition],
) -> Collection {
    let mode_names: Vec<String> = modes.iter().map(|s| s.to_string()).collect();
    let coll = create_collection(host, tier.collection_name(), &mode_names).unwrap();
    create_variables(host, &coll, tier, defs, coll.default_mode(), table);
    coll
}

#[test]
fn cross_tier_aliases_resolve_without_fallback() {
    let mut host = MemoryHost::new();
    let mut table = SymbolTable::new();

    run_tier(
        &mut host,
        &mut table,
        Tier::Primitives,
        &["Value"],
        &[
            literal(
                "color/teal/600",
                TokenType::Color,
                TokenValue::Color(Color::from_hex(0x0D9488)),
            ),
            literal("space/2", TokenType::Dimension, TokenValue::Number(8.0)),
        ],
    );
    run_tier(
        &mut host,
        &mut table,
        Tier::Semantic,
        &["Light"],
        &[
            alias("color/bg/accent", TokenType::Color, "color/teal/600"),
            alias("space/control/gap", TokenType::Dimension, "primitives/space/2"),
        ],
    );
    let comp = run_tier(
        &mut host,
        &mut table,
        Tier::Component,
        &["Default"],
        &[alias(
            "button/bg",
            TokenType::Color,
            "semantic/color/bg/accent",
        )],
    );

    // Tier ordering invariant: every backward-pointing alias resolved to
    // the real value, not a typed fallback.
    assert_eq!(comp.name, "Component");
    assert_eq!(
        host.resolved_value("Component", "button/bg", "Default"),
        Some(TokenValue::Color(Color::from_hex(0x0D9488)))
    );
    assert_eq!(
        host.resolved_value("Semantic", "space/control/gap", "Light"),
        Some(TokenValue::Number(8.0))
    );
}

#[test]
fn resolver_closure_leaves_no_dangling_values() {
    let mut host = MemoryHost::new();
    let mut table = SymbolTable::new();

    run_tier(
        &mut host,
        &mut table,
        Tier::Primitives,
        &["Value"],
        &[literal(
            "color/ink",
            TokenType::Color,
            TokenValue::Color(Color::BLACK),
        )],
    );
    run_tier(
        &mut host,
        &mut table,
        Tier::Semantic,
        &["Light"],
        &[
            alias("color/text", TokenType::Color, "color/ink"),
            // Forward reference to a sibling created later in the same
            // tier: degrades to the typed default, by design.
            alias("color/heading", TokenType::Color, "color/muted"),
            alias("color/muted", TokenType::Color, "color/ink"),
            alias("opacity/disabled", TokenType::Number, "nowhere/at/all"),
        ],
    );

    // Every (path, mode) pair holds a concrete value.
    for path in ["color/text", "color/heading", "color/muted", "opacity/disabled"] {
        assert!(
            host.resolved_value("Semantic", path, "Light").is_some(),
            "{path} should hold a concrete value"
        );
    }
    assert_eq!(
        host.resolved_value("Semantic", "color/heading", "Light"),
        Some(TokenValue::Color(Color::MID_GRAY))
    );
    assert_eq!(
        host.resolved_value("Semantic", "opacity/disabled", "Light"),
        Some(TokenValue::Number(0.0))
    );
}

#[test]
fn override_containment_across_shared_sets() {
    let mut host = MemoryHost::new();
    let mut table = SymbolTable::new();

    run_tier(
        &mut host,
        &mut table,
        Tier::Semantic,
        &["Light", "Dark"],
        &[
            literal(
                "color/bg",
                TokenType::Color,
                TokenValue::Color(Color::WHITE),
            ),
            literal(
                "color/fg",
                TokenType::Color,
                TokenValue::Color(Color::BLACK),
            ),
        ],
    );
    let comp = run_tier(
        &mut host,
        &mut table,
        Tier::Component,
        &["Default", "Dark"],
        &[alias("button/bg", TokenType::Color, "semantic/color/bg")],
    );

    // One shared set with entries for both tiers
    let mut set: BTreeMap<String, ThemeOverride> = BTreeMap::new();
    set.insert(
        "semantic/color/bg".into(),
        ThemeOverride {
            value: TokenValue::Color(Color::from_hex(0x111111)),
        },
    );
    set.insert(
        "semantic/color/fg".into(),
        ThemeOverride {
            value: TokenValue::Color(Color::WHITE),
        },
    );
    set.insert(
        "component/button/bg".into(),
        ThemeOverride {
            value: TokenValue::Color(Color::from_hex(0x222222)),
        },
    );

    let dark = comp.mode_named("Dark").unwrap();
    let report = apply_overrides(&mut host, dark, &set, &table, "component");

    // Exactly the mismatched-prefix entries were skipped, the rest applied.
    assert_eq!(report.skipped, 2);
    assert_eq!(report.applied, 1);
    assert_eq!(
        host.resolved_value("Component", "button/bg", "Dark"),
        Some(TokenValue::Color(Color::from_hex(0x222222)))
    );
    // Semantic tier untouched by the component pass
    assert_eq!(
        host.resolved_value("Semantic", "color/bg", "Dark"),
        Some(TokenValue::Color(Color::WHITE))
    );
}

#[test]
fn definitions_straight_from_payload_json() {
    let defs: Vec<TokenDefinition> = serde_json::from_str(
        r##"[
            { "path": "color/teal/600", "type": "color", "value": "#0d9488" },
            { "path": "radius/md", "type": "dimension", "value": 10 }
        ]"##,
    )
    .unwrap();

    let mut host = MemoryHost::new();
    let mut table = SymbolTable::new();
    run_tier(&mut host, &mut table, Tier::Primitives, &["Value"], &defs);

    assert_eq!(
        host.resolved_value("Primitives", "radius/md", "Value"),
        Some(TokenValue::Number(10.0))
    );
}

/// End-to-end: two primitives, a semantic alias, a component alias, and a
/// dark-mode override on the semantic token.
#[test]
fn dark_override_reaches_the_component_alias() {
    let mut host = MemoryHost::new();
    let mut table = SymbolTable::new();

    run_tier(
        &mut host,
        &mut table,
        Tier::Primitives,
        &["Value"],
        &[
            literal(
                "color/teal/600",
                TokenType::Color,
                TokenValue::Color(Color::from_hex(0x0D9488)),
            ),
            literal(
                "color/teal/900",
                TokenType::Color,
                TokenValue::Color(Color::from_hex(0x134E4A)),
            ),
        ],
    );
    let sem = run_tier(
        &mut host,
        &mut table,
        Tier::Semantic,
        &["Light", "Dark"],
        &[alias("color/bg/accent", TokenType::Color, "color/teal/600")],
    );
    run_tier(
        &mut host,
        &mut table,
        Tier::Component,
        &["Default", "Dark"],
        &[alias(
            "button/bg",
            TokenType::Color,
            "semantic/color/bg/accent",
        )],
    );

    let mut set: BTreeMap<String, ThemeOverride> = BTreeMap::new();
    set.insert(
        "semantic/color/bg/accent".into(),
        ThemeOverride {
            value: TokenValue::Color(Color::from_hex(0x134E4A)),
        },
    );
    let dark = sem.mode_named("Dark").unwrap();
    let report = apply_overrides(&mut host, dark, &set, &table, "semantic");
    assert_eq!(report.applied, 1);

    // Dark mode: the component token resolves through its alias to the
    // overridden semantic value.
    assert_eq!(
        host.resolved_value("Component", "button/bg", "Dark"),
        Some(TokenValue::Color(Color::from_hex(0x134E4A)))
    );
    assert_eq!(
        host.resolved_value("Semantic", "color/bg/accent", "Dark"),
        Some(TokenValue::Color(Color::from_hex(0x134E4A)))
    );
    // Default mode: still the original primitive's value.
    assert_eq!(
        host.resolved_value("Semantic", "color/bg/accent", "Light"),
        Some(TokenValue::Color(Color::from_hex(0x0D9488)))
    );
    assert_eq!(
        host.resolved_value("Component", "button/bg", "Default"),
        Some(TokenValue::Color(Color::from_hex(0x0D9488)))
    );
}
