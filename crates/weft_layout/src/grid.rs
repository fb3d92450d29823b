//! Uniform variant grid
//!
//! All variants of one component share a grid whose cell is the maximum
//! artifact extent, so differently sized variants land in a rectangular,
//! overlap-free arrangement.

use crate::LayoutBox;

/// Fixed gaps between grid cells
#[derive(Clone, Copy, Debug)]
pub struct GridSpec {
    pub gap_x: f64,
    pub gap_y: f64,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            gap_x: 40.0,
            gap_y: 40.0,
        }
    }
}

/// Column count heuristic, in priority order:
///
/// 1. more than one axis: the number of values in the last declared axis,
///    so each row reads as one sweep of that axis
/// 2. exactly one axis: the axis length, capped at 6
/// 3. no axes: `ceil(sqrt(count))`
///
/// The result is floored at 2 columns.
pub fn column_count(axis_value_counts: &[usize], box_count: usize) -> usize {
    let columns = match axis_value_counts {
        [] => (box_count as f64).sqrt().ceil() as usize,
        [only] => (*only).min(6),
        [.., last] => *last,
    };
    columns.max(2)
}

/// Position `boxes` in place on a uniform grid.
///
/// Returns the column count used, mostly for callers sizing the enclosing
/// frame.
pub fn arrange_variant_grid(
    boxes: &mut [LayoutBox],
    axis_value_counts: &[usize],
    spec: &GridSpec,
) -> usize {
    let columns = column_count(axis_value_counts, boxes.len());
    if boxes.is_empty() {
        return columns;
    }

    // Mixed artifact sizes normalize to one cell
    let max_w = boxes.iter().map(|b| b.width).fold(0.0, f64::max);
    let max_h = boxes.iter().map(|b| b.height).fold(0.0, f64::max);

    for (i, b) in boxes.iter_mut().enumerate() {
        let col = i % columns;
        let row = i / columns;
        b.x = col as f64 * (max_w + spec.gap_x);
        b.y = row as f64 * (max_h + spec.gap_y);
    }

    columns
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boxes(sizes: &[(f64, f64)]) -> Vec<LayoutBox> {
        sizes.iter().map(|&(w, h)| LayoutBox::sized(w, h)).collect()
    }

    fn assert_no_overlap(boxes: &[LayoutBox]) {
        for (i, a) in boxes.iter().enumerate() {
            for b in &boxes[i + 1..] {
                assert!(!a.intersects(b), "{a:?} overlaps {b:?}");
            }
        }
    }

    #[test]
    fn single_short_axis_uses_axis_length() {
        let mut bs = boxes(&[(100.0, 40.0); 4]);
        let cols = arrange_variant_grid(&mut bs, &[4], &GridSpec::default());
        assert_eq!(cols, 4);
        assert_no_overlap(&bs);
    }

    #[test]
    fn single_long_axis_caps_at_six() {
        let mut bs = boxes(&[(80.0, 40.0); 9]);
        let cols = arrange_variant_grid(&mut bs, &[9], &GridSpec::default());
        assert_eq!(cols, 6);
        assert_no_overlap(&bs);
        // Row 2 exists
        assert!(bs[6].y > bs[5].y);
    }

    #[test]
    fn multi_axis_uses_last_axis_length() {
        // Size x State: rows sweep State
        let mut bs = boxes(&[(120.0, 48.0); 6]);
        let cols = arrange_variant_grid(&mut bs, &[3, 2], &GridSpec::default());
        assert_eq!(cols, 2);
        assert_no_overlap(&bs);
    }

    #[test]
    fn no_axes_square_ish_with_floor_of_two() {
        assert_eq!(column_count(&[], 10), 4);
        assert_eq!(column_count(&[], 1), 2);
        assert_eq!(column_count(&[1], 1), 2);
    }

    #[test]
    fn mixed_sizes_share_the_largest_cell() {
        let mut bs = boxes(&[(60.0, 30.0), (200.0, 90.0), (90.0, 45.0), (120.0, 60.0)]);
        arrange_variant_grid(&mut bs, &[2, 2], &GridSpec::default());
        assert_no_overlap(&bs);
        // Second column starts one full max-width cell over
        assert_eq!(bs[1].x, 200.0 + GridSpec::default().gap_x);
        // Second row starts one full max-height cell down
        assert_eq!(bs[2].y, 90.0 + GridSpec::default().gap_y);
    }
}
