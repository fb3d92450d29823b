//! Weft Core
//!
//! Foundational primitives for the Weft token & component synthesis engine:
//!
//! - **Token values**: typed token values with hex-color parsing and typed
//!   fallbacks
//! - **Payload model**: the serde data model for the three-tier token
//!   specification and the component catalog
//! - **Host abstraction**: the trait the engine drives to materialize
//!   collections, variables, styles, and scene nodes in a design tool
//! - **Run events**: the one-way progress/log/done/error stream emitted
//!   during a synthesis run
//!
//! # Example
//!
//! ```rust
//! use weft_core::{Color, TokenType, TokenValue};
//!
//! let teal = Color::from_hex(0x0d9488);
//! assert_eq!(Color::parse("#0d9488"), Some(teal));
//!
//! // Every token type has a safe fallback value
//! assert_eq!(TokenType::Number.fallback(), TokenValue::Number(0.0));
//! ```

pub mod color;
pub mod error;
pub mod events;
pub mod host;
pub mod payload;
pub mod value;

pub use color::Color;
pub use error::{EngineError, HostError};
pub use events::{EventSink, LogLevel, MemorySink, RunStats, SynthEvent, TracingSink};
pub use host::{CollectionId, Host, ModeId, NodeId, Paint, StyleId, VariableId};
pub use payload::{
    ComponentDefinition, ComponentKind, Payload, PropertyBindingDef, PropertyKind, SynthOptions,
    ThemeDefinition, TokenDefinition, VariantAxis,
};
pub use value::{TokenType, TokenValue};
