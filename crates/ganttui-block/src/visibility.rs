#![forbid(unsafe_code)]

//! Off-screen detection and the "jump to block" affordance.
//!
//! A block can sit entirely outside the visible scroll window on either
//! side. The left case is pure arithmetic over the scroll offset; the right
//! case needs a live layout measurement of the block's on-screen position,
//! which this module caches and re-measures only when the host reports a
//! scroll change. Geometry updates during an active drag bypass this path
//! entirely.

use ganttui_core::geometry::Span;
use ganttui_core::viewport::{TimelineSurface, Viewport};

/// Horizontal padding applied when jumping to a block, in pixels.
const JUMP_PADDING: i32 = 4;

/// Width reserved for the jump affordance itself, in pixels.
const AFFORDANCE_WIDTH: i32 = 36;

/// Visibility state for one block, re-measured on scroll changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisibilityIndicator {
    pos_from_left: Option<i32>,
}

impl VisibilityIndicator {
    /// A fresh indicator with no measurement yet.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pos_from_left: None,
        }
    }

    /// Re-measure the block's on-screen left position.
    ///
    /// Call whenever the viewport's scroll offset changes; this is the only
    /// reactive recomputation point.
    pub fn refresh(&mut self, span: &Span, surface: &dyn TimelineSurface) {
        self.pos_from_left = surface.block_client_left(span);
    }

    /// Last measured client-space position of the block's left edge.
    #[inline]
    #[must_use]
    pub const fn pos_from_left(&self) -> Option<i32> {
        self.pos_from_left
    }

    /// Whether the block sits entirely left of the scroll window.
    #[must_use]
    pub const fn hidden_on_left(&self, span: &Span, viewport: &Viewport) -> bool {
        viewport.scroll_offset > span.right()
    }

    /// Whether the block's measured left edge sits beyond the viewport's
    /// right side. `false` while unmeasured.
    #[must_use]
    pub fn hidden_on_right(&self, surface: &dyn TimelineSurface) -> bool {
        match self.pos_from_left {
            Some(pos) => pos > surface.view_width(),
            None => false,
        }
    }

    /// Scroll the chart so the block's left edge is just inside the window.
    pub fn scroll_to_block(&self, span: &Span, surface: &mut dyn TimelineSurface) {
        surface.scroll_to(span.offset - JUMP_PADDING);
    }

    /// Client-space x of the left-side jump affordance.
    #[must_use]
    pub const fn left_affordance_x(&self, viewport: &Viewport) -> i32 {
        viewport.scroll_offset + JUMP_PADDING
    }

    /// Client-space x of the right-side jump affordance, positioned against
    /// the viewport's right edge using the measured block position.
    #[must_use]
    pub fn right_affordance_x(&self, span: &Span, surface: &dyn TimelineSurface) -> Option<i32> {
        let pos = self.pos_from_left?;
        Some(span.offset - pos + surface.view_width() - AFFORDANCE_WIDTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ganttui_core::viewport::Anchors;
    use ganttui_core::viewport::test_surface::FixedSurface;

    fn surface() -> FixedSurface {
        FixedSurface::new(Anchors::new(0, 800, 0), 800)
    }

    #[test]
    fn hidden_on_left_iff_scrolled_past_right_edge() {
        let indicator = VisibilityIndicator::new();
        let span = Span::new(80, 120);

        assert!(!indicator.hidden_on_left(&span, &Viewport::new(40, 200)));
        assert!(indicator.hidden_on_left(&span, &Viewport::new(40, 201)));
        assert!(!indicator.hidden_on_left(&span, &Viewport::new(40, 0)));
    }

    #[test]
    fn jump_reveals_a_left_hidden_block() {
        let mut surface = surface();
        let indicator = VisibilityIndicator::new();
        let span = Span::new(400, 120);

        surface.scroll_to(600);
        let viewport = Viewport::new(40, surface.scroll_offset);
        assert!(indicator.hidden_on_left(&span, &viewport));

        indicator.scroll_to_block(&span, &mut surface);
        assert_eq!(surface.scroll_offset, 396);

        let viewport = Viewport::new(40, surface.scroll_offset);
        assert!(!indicator.hidden_on_left(&span, &viewport));
    }

    #[test]
    fn hidden_on_right_uses_measured_position() {
        let mut indicator = VisibilityIndicator::new();
        let surface = surface();
        let span = Span::new(900, 120);

        // Unmeasured: not hidden.
        assert!(!indicator.hidden_on_right(&surface));

        indicator.refresh(&span, &surface);
        assert_eq!(indicator.pos_from_left(), Some(900));
        assert!(indicator.hidden_on_right(&surface));
    }

    #[test]
    fn refresh_on_scroll_clears_right_hidden_state() {
        let mut indicator = VisibilityIndicator::new();
        let mut surface = surface();
        let span = Span::new(900, 120);

        indicator.refresh(&span, &surface);
        assert!(indicator.hidden_on_right(&surface));

        // Scrolling right brings the block into view; the indicator only
        // sees it after a refresh.
        surface.scroll_to(400);
        assert!(indicator.hidden_on_right(&surface));
        indicator.refresh(&span, &surface);
        assert!(!indicator.hidden_on_right(&surface));
    }

    #[test]
    fn unmounted_surface_never_hides_right() {
        let mut indicator = VisibilityIndicator::new();
        let surface = FixedSurface::unmounted();
        indicator.refresh(&Span::new(900, 120), &surface);
        assert!(!indicator.hidden_on_right(&surface));
    }

    #[test]
    fn affordance_positions() {
        let mut indicator = VisibilityIndicator::new();
        let surface = surface();
        let span = Span::new(900, 120);
        let viewport = Viewport::new(40, 250);

        assert_eq!(indicator.left_affordance_x(&viewport), 254);

        assert_eq!(indicator.right_affordance_x(&span, &surface), None);
        indicator.refresh(&span, &surface);
        // 900 - 900 + 800 - 36
        assert_eq!(indicator.right_affordance_x(&span, &surface), Some(764));
    }
}
