//! Weft Token Pipeline
//!
//! The variable half of the synthesis engine: tier/mode creation, variable
//! resolution against the shared symbol table, and sparse theme overrides.
//!
//! Tiers are processed in strict dependency order - Primitives, then
//! Semantic, then Component - so every alias a later tier references
//! already exists in the symbol table by construction. No topological sort
//! is needed as long as callers respect that order.
//!
//! ```rust
//! use weft_core::host::memory::MemoryHost;
//! use weft_core::{TokenDefinition, TokenType, TokenValue, Color};
//! use weft_tokens::{create_collection, create_variables, SymbolTable, Tier};
//!
//! let mut host = MemoryHost::new();
//! let mut table = SymbolTable::new();
//! let prims = create_collection(&mut host, "Primitives", &["Value".into()]).unwrap();
//!
//! let defs = vec![TokenDefinition {
//!     path: "color/teal/600".into(),
//!     ty: TokenType::Color,
//!     value: Some(TokenValue::Color(Color::from_hex(0x0d9488))),
//!     alias_path: None,
//!     description: None,
//! }];
//! let mode = prims.default_mode();
//! create_variables(&mut host, &prims, Tier::Primitives, &defs, mode, &mut table);
//! assert!(table.lookup("color/teal/600").is_some());
//! ```

pub mod collections;
pub mod overrides;
pub mod resolver;
pub mod symbol_table;

pub use collections::{create_collection, Collection, ModeHandle, Tier};
pub use overrides::{apply_overrides, OverrideReport};
pub use resolver::{create_variables, ResolveOutcome};
pub use symbol_table::{ResolvedVariable, SymbolTable};
