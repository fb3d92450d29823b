//! Host platform abstraction
//!
//! The engine never talks to a design tool directly; it drives this trait.
//! A production backend adapts the host application's plugin API (owning
//! any async font/resource loading behind the blocking trait methods); the
//! bundled [`memory::MemoryHost`] backend materializes everything in plain
//! data structures for tests and preview runs.

pub mod memory;

use crate::color::Color;
use crate::error::HostError;
use crate::payload::{ColorStyleDefinition, EffectStyleDefinition, TextStyleDefinition};
use crate::value::{TokenType, TokenValue};

/// Handle to a variable collection on the host
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CollectionId(pub u32);

/// Handle to a mode within a collection
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ModeId(pub u32);

/// Handle to a variable on the host
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VariableId(pub u32);

/// Handle to a published style on the host
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StyleId(pub u32);

/// Handle to a scene node on the host
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

/// A paint applied to a node: either a literal color or a binding to a
/// resolved variable, so the node follows theme mode switches on the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Paint {
    Solid(Color),
    Variable(VariableId),
}

/// The node-creation and variable API the engine drives.
///
/// All methods are synchronous from the engine's point of view; a backend
/// wrapping an async host awaits internally before returning. Every method
/// is fallible, and the engine degrades per-item failures rather than
/// propagating them (see the error-handling policy in the engine crate).
pub trait Host {
    // ---- Collections and modes ----

    /// Create a collection; returns its id and the id of the implicitly
    /// created default mode.
    fn create_collection(&mut self, name: &str) -> Result<(CollectionId, ModeId), HostError>;

    fn rename_mode(
        &mut self,
        collection: CollectionId,
        mode: ModeId,
        name: &str,
    ) -> Result<(), HostError>;

    /// Add a mode; hosts may refuse past a plan/capacity limit.
    fn add_mode(&mut self, collection: CollectionId, name: &str) -> Result<ModeId, HostError>;

    // ---- Variables ----

    /// Create a typed variable. Fails with [`HostError::NameCollision`]
    /// when the name already exists in the collection.
    fn create_variable(
        &mut self,
        collection: CollectionId,
        name: &str,
        ty: TokenType,
    ) -> Result<VariableId, HostError>;

    fn set_variable_value(
        &mut self,
        variable: VariableId,
        mode: ModeId,
        value: &TokenValue,
    ) -> Result<(), HostError>;

    /// Bind the variable's value for a mode to another variable.
    fn set_variable_alias(
        &mut self,
        variable: VariableId,
        mode: ModeId,
        target: VariableId,
    ) -> Result<(), HostError>;

    // ---- Styles ----

    fn create_text_style(&mut self, def: &TextStyleDefinition) -> Result<StyleId, HostError>;
    fn create_effect_style(&mut self, def: &EffectStyleDefinition) -> Result<StyleId, HostError>;
    fn create_color_style(&mut self, def: &ColorStyleDefinition) -> Result<StyleId, HostError>;

    // ---- Fonts ----

    /// Load one font variant, blocking until it is usable. Text nodes may
    /// only request (family, style) pairs that loaded successfully.
    fn load_font(&mut self, family: &str, style: &str) -> Result<(), HostError>;

    // ---- Scene nodes ----

    fn create_frame(&mut self, name: &str) -> Result<NodeId, HostError>;

    fn create_text(
        &mut self,
        content: &str,
        family: &str,
        style: &str,
        size: f64,
    ) -> Result<NodeId, HostError>;

    fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), HostError>;

    fn set_bounds(
        &mut self,
        node: NodeId,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> Result<(), HostError>;

    fn set_background(&mut self, node: NodeId, paint: Paint) -> Result<(), HostError>;

    fn set_border(&mut self, node: NodeId, paint: Paint, width: f64) -> Result<(), HostError>;

    fn set_corner_radius(&mut self, node: NodeId, radius: f64) -> Result<(), HostError>;

    fn set_text_color(&mut self, node: NodeId, paint: Paint) -> Result<(), HostError>;
}
