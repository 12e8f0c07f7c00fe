#![forbid(unsafe_code)]

//! Edge auto-scroll policy for in-flight gestures.
//!
//! While a drag is active, a pointer parked near either scroll boundary of
//! the chart keeps the timeline moving: the surface is scrolled by a fixed
//! step and that step becomes the tick's effective delta, so geometry keeps
//! pace with the scroll instead of with the (stationary) pointer.
//!
//! # Invariants
//!
//! 1. Near an edge but moving away from it, the tick's delta is `0`.
//! 2. Near an edge and not moving away, the delta is exactly `±SCROLL_STEP`
//!    and the surface has been scrolled by the same amount.
//! 3. Away from both edges, the delta is the raw pointer movement and the
//!    surface is untouched.
//! 4. An unmeasurable surface yields `0`; the tick is a silent no-op.

use ganttui_core::event::PointerEvent;
use ganttui_core::viewport::TimelineSurface;

/// Distance from a scroll boundary at which auto-scroll engages, in pixels.
pub const SCROLL_THRESHOLD: i32 = 70;

/// Fixed scroll step injected per tick while auto-scrolling, in pixels.
pub const SCROLL_STEP: i32 = 5;

/// Effective horizontal delta for one pointer-move tick.
///
/// Scrolls `surface` as a side effect when the pointer is within
/// [`SCROLL_THRESHOLD`] of a boundary. The left boundary accounts for the
/// fixed sidebar; the right boundary is the container's right edge.
#[must_use]
pub fn effective_delta(event: &PointerEvent, surface: &mut dyn TimelineSurface) -> i32 {
    let Some(anchors) = surface.anchors() else {
        return 0;
    };

    // Left boundary: sidebar-adjusted container edge.
    let from_left = event.client_x - anchors.scroll_left_boundary();
    if from_left <= SCROLL_THRESHOLD {
        if event.movement_x > 0 {
            return 0;
        }
        surface.scroll_by(-SCROLL_STEP);
        #[cfg(feature = "tracing")]
        tracing::trace!(step = -SCROLL_STEP, "edge auto-scroll left");
        return -SCROLL_STEP;
    }

    // Right boundary: container edge.
    let from_right = anchors.container_right - event.client_x;
    if from_right <= SCROLL_THRESHOLD {
        if event.movement_x < 0 {
            return 0;
        }
        surface.scroll_by(SCROLL_STEP);
        #[cfg(feature = "tracing")]
        tracing::trace!(step = SCROLL_STEP, "edge auto-scroll right");
        return SCROLL_STEP;
    }

    event.movement_x
}

#[cfg(test)]
mod tests {
    use super::*;
    use ganttui_core::event::PointerEvent;
    use ganttui_core::viewport::Anchors;
    use ganttui_core::viewport::test_surface::FixedSurface;

    // Container spans client x 0..=1000 with a 100 px sidebar, so the
    // scrollable area starts at 100. Left trigger zone: x <= 170; right
    // trigger zone: x >= 930.
    fn surface() -> FixedSurface {
        FixedSurface::new(Anchors::new(0, 1000, 100), 1000)
    }

    #[test]
    fn raw_delta_away_from_edges() {
        let mut surface = surface();
        let delta = effective_delta(&PointerEvent::moved(500, 12), &mut surface);
        assert_eq!(delta, 12);
        assert!(surface.scroll_by_calls.is_empty());
    }

    #[test]
    fn left_edge_scrolls_fixed_step() {
        let mut surface = surface();
        let delta = effective_delta(&PointerEvent::moved(150, -3), &mut surface);
        assert_eq!(delta, -SCROLL_STEP);
        assert_eq!(surface.scroll_by_calls, vec![-SCROLL_STEP]);
    }

    #[test]
    fn left_edge_stationary_pointer_still_scrolls() {
        let mut surface = surface();
        let delta = effective_delta(&PointerEvent::moved(150, 0), &mut surface);
        assert_eq!(delta, -SCROLL_STEP);
        assert_eq!(surface.scroll_offset, -SCROLL_STEP);
    }

    #[test]
    fn left_edge_moving_away_is_dead_tick() {
        let mut surface = surface();
        let delta = effective_delta(&PointerEvent::moved(150, 4), &mut surface);
        assert_eq!(delta, 0);
        assert!(surface.scroll_by_calls.is_empty());
    }

    #[test]
    fn right_edge_scrolls_fixed_step() {
        let mut surface = surface();
        let delta = effective_delta(&PointerEvent::moved(950, 8), &mut surface);
        assert_eq!(delta, SCROLL_STEP);
        assert_eq!(surface.scroll_by_calls, vec![SCROLL_STEP]);
    }

    #[test]
    fn right_edge_moving_away_is_dead_tick() {
        let mut surface = surface();
        let delta = effective_delta(&PointerEvent::moved(950, -8), &mut surface);
        assert_eq!(delta, 0);
        assert!(surface.scroll_by_calls.is_empty());
    }

    #[test]
    fn threshold_boundary_is_inclusive() {
        // Exactly SCROLL_THRESHOLD from the left boundary (x = 170).
        let mut inside = surface();
        let delta = effective_delta(&PointerEvent::moved(170, -1), &mut inside);
        assert_eq!(delta, -SCROLL_STEP);

        // One pixel outside the zone behaves normally.
        let mut outside = surface();
        let delta = effective_delta(&PointerEvent::moved(171, -1), &mut outside);
        assert_eq!(delta, -1);
        assert!(outside.scroll_by_calls.is_empty());
    }

    #[test]
    fn sidebar_shifts_the_left_zone() {
        // Without the sidebar x=150 would be outside the trigger zone.
        let mut surface = FixedSurface::new(Anchors::new(0, 1000, 0), 1000);
        let delta = effective_delta(&PointerEvent::moved(150, -3), &mut surface);
        assert_eq!(delta, -3);
        assert!(surface.scroll_by_calls.is_empty());
    }

    #[test]
    fn unmounted_surface_yields_zero() {
        let mut surface = FixedSurface::unmounted();
        let delta = effective_delta(&PointerEvent::moved(150, -3), &mut surface);
        assert_eq!(delta, 0);
        assert!(surface.scroll_by_calls.is_empty());
    }
}
