//! Weft Layout Packing
//!
//! Deterministic, single-pass placement for synthesized artifacts:
//!
//! - [`grid`]: variants of one component go into a uniform grid whose cell
//!   is the largest artifact's extent, so mixed sizes never overlap
//! - [`sections`]: components go into category sections packed left to
//!   right with row wrapping, stacked vertically
//!
//! Neither pass backtracks or optimizes for density; the product
//! requirement is non-overlap and reasonable fill, not tight packing.

pub mod grid;
pub mod sections;

/// A positioned, sized rectangle. Position is assigned exclusively by the
/// packing passes; width and height come from the synthesized artifact.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LayoutBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl LayoutBox {
    pub fn sized(width: f64, height: f64) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width,
            height,
        }
    }

    /// Whether two boxes share any pixel region
    pub fn intersects(&self, other: &LayoutBox) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }
}

pub use grid::{arrange_variant_grid, GridSpec};
pub use sections::{arrange_sections, Section, SectionSpec};
