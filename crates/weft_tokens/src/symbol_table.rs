//! Shared symbol table
//!
//! A flat map from fully-qualified token path to resolved variable handle,
//! shared across all later pipeline stages. The resolver writes it, the
//! override applier and the component synthesizer read it; it is never
//! queried back from the host.

use rustc_hash::FxHashMap;

use weft_core::{TokenType, TokenValue, VariableId};

/// Tier prefixes searched when an alias path carries no tier qualifier,
/// in lookup priority order
const LOOKUP_PREFIXES: [&str; 3] = ["component", "semantic", "primitives"];

/// A variable created on the host, addressable by token path
#[derive(Clone, Debug)]
pub struct ResolvedVariable {
    pub path: String,
    /// Collection (tier) display name, e.g. `"Primitives"`
    pub collection: String,
    pub handle: VariableId,
    pub ty: TokenType,
    /// Concrete default-mode value captured at resolution time. Consumers
    /// that need a literal (numeric node properties) read this instead of
    /// querying the host.
    pub value: TokenValue,
}

/// Path to resolved-variable map.
///
/// Entries are only ever added; a later registration under the same bare
/// path (a later tier reusing a leaf name) supersedes the earlier one for
/// unqualified lookups, while tier-qualified keys stay unambiguous.
#[derive(Debug, Default)]
pub struct SymbolTable {
    entries: FxHashMap<String, ResolvedVariable>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a variable under its bare path and its tier-qualified path
    /// (`"<tier>/<path>"`), so later tiers can alias into it either way.
    pub fn register(&mut self, tier_prefix: &str, variable: ResolvedVariable) {
        let qualified = format!("{tier_prefix}/{}", variable.path);
        self.entries.insert(variable.path.clone(), variable.clone());
        self.entries.insert(qualified, variable);
    }

    /// Direct lookup by exact key, no prefix search. This is the only
    /// lookup the override applier uses.
    pub fn get(&self, path: &str) -> Option<&ResolvedVariable> {
        self.entries.get(path)
    }

    /// Alias lookup: the raw key first, then `component/`, `semantic/`,
    /// `primitives/` qualified keys, in that order. First hit wins.
    pub fn lookup(&self, path: &str) -> Option<&ResolvedVariable> {
        if let Some(found) = self.entries.get(path) {
            return Some(found);
        }
        LOOKUP_PREFIXES
            .iter()
            .find_map(|prefix| self.entries.get(&format!("{prefix}/{path}")))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
