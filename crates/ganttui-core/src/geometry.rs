#![forbid(unsafe_code)]

//! Block geometry and column snapping math.
//!
//! A timeline block occupies a horizontal [`Span`]: an offset from the
//! chart's left origin and a width, both in pixels. Gestures accumulate raw
//! pixel deltas and snap the result to whole columns, so the math here
//! defines the snapping contract the rest of the system relies on.
//!
//! # Invariants
//!
//! 1. [`snap_to_column`] always returns an integer multiple of `column`.
//! 2. Half-column values round toward positive infinity, matching the
//!    rendering layer's rounding of fractional pixel positions.
//! 3. [`column_shifts`] is ceiling division: the smallest whole-column count
//!    that covers the signed pixel delta.

/// Horizontal geometry of a block, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Offset of the left edge from the timeline's left origin.
    pub offset: i32,
    /// Width of the block. Non-negative outside of test construction.
    pub width: i32,
}

impl Span {
    /// Create a new span.
    #[inline]
    #[must_use]
    pub const fn new(offset: i32, width: i32) -> Self {
        Self { offset, width }
    }

    /// Position of the right edge (`offset + width`).
    #[inline]
    #[must_use]
    pub const fn right(&self) -> i32 {
        self.offset + self.width
    }

    /// Whether both edges sit on whole-column boundaries.
    #[must_use]
    pub const fn is_column_aligned(&self, column: i32) -> bool {
        column > 0 && self.offset % column == 0 && self.width % column == 0
    }
}

/// Snap a pixel value to the nearest multiple of `column`.
///
/// Half-column values round toward positive infinity: with a 40 px column,
/// `-20` snaps to `0` and `20` snaps to `40`.
///
/// `column` must be positive.
#[must_use]
pub fn snap_to_column(value: i32, column: i32) -> i32 {
    debug_assert!(column > 0, "column width must be positive");
    let value = i64::from(value);
    let column = i64::from(column);
    let snapped = (2 * value + column).div_euclid(2 * column) * column;
    snapped as i32
}

/// Number of whole columns covered by a signed pixel delta, rounded up.
///
/// This is ceiling division: `column_shifts(55, 40) == 2`,
/// `column_shifts(-15, 40) == 0`, `column_shifts(-40, 40) == -1`.
///
/// `column` must be positive.
#[must_use]
pub fn column_shifts(delta: i32, column: i32) -> i32 {
    debug_assert!(column > 0, "column width must be positive");
    let quotient = delta.div_euclid(column);
    if delta.rem_euclid(column) != 0 {
        quotient + 1
    } else {
        quotient
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_right_edge() {
        assert_eq!(Span::new(80, 120).right(), 200);
        assert_eq!(Span::new(-40, 40).right(), 0);
    }

    #[test]
    fn span_column_alignment() {
        assert!(Span::new(80, 120).is_column_aligned(40));
        assert!(!Span::new(85, 120).is_column_aligned(40));
        assert!(!Span::new(80, 125).is_column_aligned(40));
        assert!(!Span::new(80, 120).is_column_aligned(0));
    }

    #[test]
    fn snap_rounds_to_nearest_multiple() {
        assert_eq!(snap_to_column(175, 40), 160);
        assert_eq!(snap_to_column(185, 40), 200);
        assert_eq!(snap_to_column(160, 40), 160);
        assert_eq!(snap_to_column(0, 40), 0);
    }

    #[test]
    fn snap_half_column_rounds_up() {
        // Exactly half a column away rounds toward positive infinity.
        assert_eq!(snap_to_column(180, 40), 200);
        assert_eq!(snap_to_column(20, 40), 40);
        assert_eq!(snap_to_column(-20, 40), 0);
        assert_eq!(snap_to_column(-60, 40), -40);
    }

    #[test]
    fn snap_negative_values() {
        assert_eq!(snap_to_column(-55, 40), -40);
        assert_eq!(snap_to_column(-65, 40), -80);
    }

    #[test]
    fn snap_is_idempotent() {
        for v in [-130, -40, -1, 0, 7, 39, 40, 41, 175, 9999] {
            let once = snap_to_column(v, 40);
            assert_eq!(snap_to_column(once, 40), once);
        }
    }

    #[test]
    fn snap_column_of_one_is_identity() {
        for v in [-17, 0, 3, 250] {
            assert_eq!(snap_to_column(v, 1), v);
        }
    }

    #[test]
    fn column_shifts_is_ceiling_division() {
        assert_eq!(column_shifts(0, 40), 0);
        assert_eq!(column_shifts(1, 40), 1);
        assert_eq!(column_shifts(40, 40), 1);
        assert_eq!(column_shifts(41, 40), 2);
        assert_eq!(column_shifts(55, 40), 2);
        assert_eq!(column_shifts(-1, 40), 0);
        assert_eq!(column_shifts(-15, 40), 0);
        assert_eq!(column_shifts(-40, 40), -1);
        assert_eq!(column_shifts(-41, 40), -1);
        assert_eq!(column_shifts(-80, 40), -2);
    }

    #[test]
    fn column_shifts_of_snapped_width_delta() {
        // A right-resize that snapped 120 -> 160 covers exactly one column.
        assert_eq!(column_shifts(160 - 120, 40), 1);
    }
}
