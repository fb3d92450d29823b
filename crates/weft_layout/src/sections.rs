//! Category sections
//!
//! Component artifacts are grouped into one section per non-empty category
//! and packed left to right with row wrapping. Child coordinates are
//! relative to their section's origin; sections themselves stack
//! vertically with a fixed gap, so the caller can parent artifact nodes
//! into section frames directly.

use crate::LayoutBox;

/// Packing parameters for the section pass
#[derive(Clone, Copy, Debug)]
pub struct SectionSpec {
    /// Row wrap threshold; sections are never narrower than this
    pub max_row_width: f64,
    /// Inner padding on all four sides
    pub padding: f64,
    /// Gap between artifacts, horizontally and between rows
    pub gap: f64,
    /// Vertical gap between stacked sections
    pub section_gap: f64,
}

impl Default for SectionSpec {
    fn default() -> Self {
        Self {
            max_row_width: 1600.0,
            padding: 48.0,
            gap: 48.0,
            section_gap: 96.0,
        }
    }
}

/// One packed, auto-sized category section
#[derive(Clone, Debug)]
pub struct Section {
    pub category: String,
    /// Indices into the caller's artifact list, in placement order
    pub children: Vec<usize>,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Pack artifacts into category sections.
///
/// `groups` is the fixed category order with the indices of member boxes;
/// empty categories are skipped. Box positions are written in place,
/// relative to their section.
///
/// The wrap rule: a new row starts when placing the next artifact would
/// cross `max_row_width` and at least one artifact is already on the row.
/// An oversized first artifact is never wrapped against itself.
pub fn arrange_sections(
    boxes: &mut [LayoutBox],
    groups: &[(String, Vec<usize>)],
    spec: &SectionSpec,
) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut section_y = 0.0;

    for (category, members) in groups {
        if members.is_empty() {
            continue;
        }

        let mut cursor_x = spec.padding;
        let mut cursor_y = spec.padding;
        let mut row_max_h: f64 = 0.0;
        let mut row_len = 0usize;
        let mut widest_row_end: f64 = 0.0;

        for &idx in members {
            let (w, h) = (boxes[idx].width, boxes[idx].height);

            if row_len > 0 && cursor_x + w > spec.max_row_width {
                cursor_x = spec.padding;
                cursor_y += row_max_h + spec.gap;
                row_max_h = 0.0;
                row_len = 0;
            }

            boxes[idx].x = cursor_x;
            boxes[idx].y = cursor_y;
            row_max_h = row_max_h.max(h);
            cursor_x += w + spec.gap;
            widest_row_end = widest_row_end.max(cursor_x - spec.gap);
            row_len += 1;
        }

        let width = (widest_row_end + spec.padding).max(spec.max_row_width);
        let height = cursor_y + row_max_h + spec.padding;
        tracing::trace!(
            "section {category}: {} artifacts, {width}x{height}",
            members.len()
        );

        sections.push(Section {
            category: category.clone(),
            children: members.clone(),
            x: 0.0,
            y: section_y,
            width,
            height,
        });
        section_y += height + spec.section_gap;
    }

    sections
}
