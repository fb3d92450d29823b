//! Variable resolution
//!
//! Walks a tier's token definitions in input order, creating one host
//! variable per definition and giving it a concrete value for the target
//! mode. Aliases resolve against the symbol table; anything that cannot be
//! resolved degrades to the typed default so the table never holds a
//! dangling reference. Per-occurrence logging is deliberately absent -
//! broken aliases are common in hand-authored payloads and would flood the
//! stream - only aggregate counts are surfaced.

use weft_core::{Host, HostError, TokenDefinition};

use crate::collections::{Collection, Tier};
use crate::symbol_table::{ResolvedVariable, SymbolTable};

/// Aggregate result of one tier/mode resolution pass
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResolveOutcome {
    /// Variables created on the host
    pub created: usize,
    /// Definitions skipped because the name already existed in the collection
    pub collisions: usize,
    /// Values that degraded to the typed default
    pub fallbacks: usize,
}

/// Create and value one variable per definition, registering each created
/// handle in `table` under its bare and tier-qualified paths.
///
/// Intra-collection name collisions are skipped silently: later tiers
/// legitimately reuse leaf names under different collections, and the same
/// payload section may be replayed for additional modes.
pub fn create_variables(
    host: &mut dyn Host,
    collection: &Collection,
    tier: Tier,
    definitions: &[TokenDefinition],
    mode: weft_core::ModeId,
    table: &mut SymbolTable,
) -> ResolveOutcome {
    let mut outcome = ResolveOutcome::default();

    for def in definitions {
        let handle = match host.create_variable(collection.id, &def.path, def.ty) {
            Ok(handle) => handle,
            Err(HostError::NameCollision(_)) => {
                outcome.collisions += 1;
                continue;
            }
            Err(err) => {
                tracing::debug!("variable {} not created: {err}", def.path);
                continue;
            }
        };

        let concrete = if let Some(alias) = def.alias_path.as_deref() {
            let bound = match table.lookup(alias) {
                Some(target) if host.set_variable_alias(handle, mode, target.handle).is_ok() => {
                    Some(target.value.clone())
                }
                _ => None,
            };
            match bound {
                Some(value) => value,
                None => {
                    // Broken path or type mismatch: substitute the typed default
                    let fallback = def.ty.fallback();
                    let _ = host.set_variable_value(handle, mode, &fallback);
                    outcome.fallbacks += 1;
                    fallback
                }
            }
        } else if let Some(value) = def.value.as_ref() {
            if host.set_variable_value(handle, mode, value).is_ok() {
                value.clone()
            } else {
                let fallback = def.ty.fallback();
                let _ = host.set_variable_value(handle, mode, &fallback);
                outcome.fallbacks += 1;
                fallback
            }
        } else {
            // Neither value nor alias; the definition still materializes
            let fallback = def.ty.fallback();
            let _ = host.set_variable_value(handle, mode, &fallback);
            outcome.fallbacks += 1;
            fallback
        };

        table.register(
            tier.prefix(),
            ResolvedVariable {
                path: def.path.clone(),
                collection: collection.name.clone(),
                handle,
                ty: def.ty,
                value: concrete,
            },
        );
        outcome.created += 1;
    }

    if outcome.fallbacks > 0 {
        tracing::debug!(
            "tier {}: {} of {} definitions fell back to typed defaults",
            collection.name,
            outcome.fallbacks,
            definitions.len()
        );
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collections::create_collection;
    use weft_core::host::memory::MemoryHost;
    use weft_core::{Color, TokenType, TokenValue};

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

    #[test]
    fn literals_and_aliases_both_materialize() {
        let mut host = MemoryHost::new();
        let mut table = SymbolTable::new();
        let prims = create_collection(&mut host, "Primitives", &["Value".into()]).unwrap();

        let defs = vec![
            literal(
                "color/teal/600",
                TokenType::Color,
                TokenValue::Color(Color::from_hex(0x0D9488)),
            ),
            alias("color/brand", TokenType::Color, "color/teal/600"),
        ];
        let outcome = create_variables(
            &mut host,
            &prims,
            Tier::Primitives,
            &defs,
            prims.default_mode(),
            &mut table,
        );

        assert_eq!(outcome.created, 2);
        assert_eq!(outcome.fallbacks, 0);
        assert_eq!(
            host.resolved_value("Primitives", "color/brand", "Value"),
            Some(TokenValue::Color(Color::from_hex(0x0D9488)))
        );
    }

    #[test]
    fn broken_alias_falls_back_to_typed_default() {
        let mut host = MemoryHost::new();
        let mut table = SymbolTable::new();
        let sem = create_collection(&mut host, "Semantic", &["Light".into()]).unwrap();

        let defs = vec![
            alias("color/bg", TokenType::Color, "color/does/not/exist"),
            alias("space/gap", TokenType::Dimension, "space/missing"),
        ];
        let outcome = create_variables(
            &mut host,
            &sem,
            Tier::Semantic,
            &defs,
            sem.default_mode(),
            &mut table,
        );

        assert_eq!(outcome.fallbacks, 2);
        assert_eq!(
            host.resolved_value("Semantic", "color/bg", "Light"),
            Some(TokenValue::Color(Color::MID_GRAY))
        );
        assert_eq!(
            host.resolved_value("Semantic", "space/gap", "Light"),
            Some(TokenValue::Number(0.0))
        );
    }

    #[test]
    fn type_mismatched_alias_falls_back() {
        let mut host = MemoryHost::new();
        let mut table = SymbolTable::new();
        let prims = create_collection(&mut host, "Primitives", &["Value".into()]).unwrap();

        let defs = vec![
            literal("space/2", TokenType::Dimension, TokenValue::Number(8.0)),
            // Color aliasing a dimension: the host rejects the bind
            alias("color/odd", TokenType::Color, "space/2"),
        ];
        create_variables(
            &mut host,
            &prims,
            Tier::Primitives,
            &defs,
            prims.default_mode(),
            &mut table,
        );

        assert_eq!(
            host.resolved_value("Primitives", "color/odd", "Value"),
            Some(TokenValue::Color(Color::MID_GRAY))
        );
    }

    #[test]
    fn collisions_skip_silently_and_keep_going() {
        let mut host = MemoryHost::new();
        let mut table = SymbolTable::new();
        let prims = create_collection(&mut host, "Primitives", &["Value".into()]).unwrap();

        let defs = vec![
            literal("space/2", TokenType::Dimension, TokenValue::Number(8.0)),
            literal("space/2", TokenType::Dimension, TokenValue::Number(99.0)),
            literal("space/4", TokenType::Dimension, TokenValue::Number(16.0)),
        ];
        let outcome = create_variables(
            &mut host,
            &prims,
            Tier::Primitives,
            &defs,
            prims.default_mode(),
            &mut table,
        );

        assert_eq!(outcome.created, 2);
        assert_eq!(outcome.collisions, 1);
        // First definition wins
        assert_eq!(
            host.resolved_value("Primitives", "space/2", "Value"),
            Some(TokenValue::Number(8.0))
        );
    }
}
