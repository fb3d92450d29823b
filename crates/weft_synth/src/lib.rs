//! Weft Synthesis Engine
//!
//! The orchestrating half of Weft: turns a token payload plus a component
//! catalog into a positioned scene graph on a [`weft_core::Host`].
//!
//! A run is a fixed, single-threaded stage sequence:
//!
//! 1. font loading (the only point where the host may await resources)
//! 2. variable collections, tier by tier (Primitives, Semantic, Component)
//! 3. theme overrides per non-default mode
//! 4. text / effect / color styles
//! 5. component synthesis (variant generation + per-kind builders)
//! 6. layout packing (variant grids, then category sections)
//! 7. a generated getting-started frame
//!
//! Per-item failures never abort the run; progress and warnings go out on
//! the [`weft_core::EventSink`] stream, and only a missing payload is
//! fatal.

pub mod bindings;
pub mod builders;
pub mod engine;
pub mod fonts;
pub mod variants;

pub use bindings::PathTemplate;
pub use builders::Artifact;
pub use engine::{run, VARIANT_CAP};
pub use fonts::FontBook;
pub use variants::{generate_combinations, Combination};
