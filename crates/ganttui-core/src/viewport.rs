#![forbid(unsafe_code)]

//! Viewport state and the injected host surface.
//!
//! The surrounding chart supplies a [`Viewport`] (column width and scroll
//! position) on every call into the interaction layer. Scrolling and layout
//! measurement go through the [`TimelineSurface`] trait so the interaction
//! state machine never reaches into a rendered tree; hosts implement it over
//! their own scroll container, and tests implement it in memory.
//!
//! # Failure Modes
//!
//! Layout anchors and measurements can be unavailable (the chart may not be
//! mounted yet). Those paths return `None` and callers skip the affected
//! tick; nothing here panics.

use crate::geometry::Span;

/// Externally supplied chart state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Snapping granularity in pixels per column. Always positive.
    pub column_width: i32,

    /// Horizontal scroll position of the chart's scrollable region.
    pub scroll_offset: i32,
}

impl Viewport {
    /// Create a new viewport.
    #[must_use]
    pub const fn new(column_width: i32, scroll_offset: i32) -> Self {
        Self {
            column_width,
            scroll_offset,
        }
    }

    /// Viewport with an updated scroll position.
    #[must_use]
    pub const fn with_scroll_offset(mut self, scroll_offset: i32) -> Self {
        self.scroll_offset = scroll_offset;
        self
    }
}

/// Measured layout anchors of the chart container, in client-space pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchors {
    /// Left edge of the chart container.
    pub container_left: i32,

    /// Right edge of the chart container.
    pub container_right: i32,

    /// Width of the fixed sidebar on the container's left.
    pub sidebar_width: i32,
}

impl Anchors {
    /// Create new anchors.
    #[must_use]
    pub const fn new(container_left: i32, container_right: i32, sidebar_width: i32) -> Self {
        Self {
            container_left,
            container_right,
            sidebar_width,
        }
    }

    /// Left boundary of the scrollable area (container edge plus sidebar).
    #[inline]
    #[must_use]
    pub const fn scroll_left_boundary(&self) -> i32 {
        self.container_left + self.sidebar_width
    }
}

/// Host handle for the chart's scrollable region.
///
/// The interaction layer calls into this trait for edge auto-scroll, for the
/// "jump to block" affordance, and for live layout measurement of a block's
/// on-screen position.
pub trait TimelineSurface {
    /// Current layout anchors, or `None` if the container cannot be measured.
    fn anchors(&self) -> Option<Anchors>;

    /// Scroll the region horizontally by `dx` pixels.
    fn scroll_by(&mut self, dx: i32);

    /// Set the region's horizontal scroll position to `x`.
    fn scroll_to(&mut self, x: i32);

    /// Width of the visible viewport.
    fn view_width(&self) -> i32;

    /// Measured client-space position of the block's left edge, or `None`
    /// if the block is not currently laid out.
    fn block_client_left(&self, span: &Span) -> Option<i32>;
}

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_surface {
    //! In-memory [`TimelineSurface`] for headless tests.

    use super::{Anchors, TimelineSurface};
    use crate::geometry::Span;

    /// A surface with fixed anchors that records scroll calls.
    #[derive(Debug, Clone, Default)]
    pub struct FixedSurface {
        pub anchors: Option<Anchors>,
        pub scroll_offset: i32,
        pub view_width: i32,
        pub scroll_by_calls: Vec<i32>,
        pub scroll_to_calls: Vec<i32>,
    }

    impl FixedSurface {
        /// A surface whose scrollable area starts at `container_left +
        /// sidebar_width` and ends at `container_right`.
        #[must_use]
        pub fn new(anchors: Anchors, view_width: i32) -> Self {
            Self {
                anchors: Some(anchors),
                scroll_offset: 0,
                view_width,
                scroll_by_calls: Vec::new(),
                scroll_to_calls: Vec::new(),
            }
        }

        /// A surface that cannot be measured (chart not mounted).
        #[must_use]
        pub fn unmounted() -> Self {
            Self::default()
        }
    }

    impl TimelineSurface for FixedSurface {
        fn anchors(&self) -> Option<Anchors> {
            self.anchors
        }

        fn scroll_by(&mut self, dx: i32) {
            self.scroll_offset += dx;
            self.scroll_by_calls.push(dx);
        }

        fn scroll_to(&mut self, x: i32) {
            self.scroll_offset = x;
            self.scroll_to_calls.push(x);
        }

        fn view_width(&self) -> i32 {
            self.view_width
        }

        fn block_client_left(&self, span: &Span) -> Option<i32> {
            let anchors = self.anchors?;
            Some(anchors.scroll_left_boundary() + span.offset - self.scroll_offset)
        }
    }
}
