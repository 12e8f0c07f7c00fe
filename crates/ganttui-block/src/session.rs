#![forbid(unsafe_code)]

//! Gesture sessions: per-drag geometry state and the commit computation.
//!
//! A [`GestureSession`] lives for exactly one pointer-down → pointer-up
//! interaction. It snapshots the block's geometry at start, accumulates raw
//! pixel deltas across move ticks, and publishes snapped geometry to the
//! block each tick. [`GestureSession::finish`] converts the net geometry
//! change into a whole-column [`BlockChange`] for the owning data layer.
//!
//! # Invariants
//!
//! 1. Published `width` never drops below one column during a resize; a tick
//!    that would do so is rejected and the session keeps listening.
//! 2. Published `offset` and `width` are column multiples after every
//!    accepted tick.
//! 3. A left resize keeps the right edge fixed across accepted ticks: the
//!    offset is compensated by exactly the width change.
//! 4. Accumulators carry raw (unsnapped) deltas, so sub-column movement is
//!    never lost between ticks.
//!
//! Note the deliberate sign asymmetry: a left resize *subtracts* the tick
//! delta from its width accumulator (dragging left grows the block), while a
//! right resize adds it. The left-resize offset accumulator also advances on
//! rejected ticks; rendering depends on both behaviors.

use core::fmt;

use ganttui_core::geometry::{Span, column_shifts, snap_to_column};

/// Hard floor for a block's published width during a right resize, in pixels.
pub const MIN_BLOCK_WIDTH: i32 = 80;

/// Which drag handle a gesture was started from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureKind {
    /// Resizing from the left edge; the right edge stays fixed.
    ResizeLeft,

    /// Resizing from the right edge; the left edge stays fixed.
    ResizeRight,

    /// Moving the whole block; the width stays fixed.
    Move,
}

impl GestureKind {
    /// Wire name of the gesture, as reported to the data layer.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ResizeLeft => "left",
            Self::ResizeRight => "right",
            Self::Move => "move",
        }
    }
}

impl fmt::Display for GestureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The authoritative result of a completed gesture.
///
/// `column_shifts` is the signed number of whole columns the gesture's net
/// geometry change represents. Zero is a valid commit and is reported, not
/// suppressed; callers treat it as a no-op update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockChange {
    /// Signed whole-column count covering the net pixel change.
    pub column_shifts: i32,

    /// Which handle the gesture used.
    pub kind: GestureKind,
}

/// Ephemeral state for one pointer-down → pointer-up interaction.
///
/// Holds exclusive write access to the block's geometry for its duration;
/// each accepted tick publishes a new snapped [`Span`] snapshot.
#[derive(Debug, Clone)]
pub struct GestureSession {
    kind: GestureKind,
    baseline: Span,
    acc_width: i32,
    acc_offset: i32,
}

impl GestureSession {
    /// Start a session over the block's current geometry.
    #[must_use]
    pub const fn begin(kind: GestureKind, span: Span) -> Self {
        Self {
            kind,
            baseline: span,
            acc_width: span.width,
            acc_offset: span.offset,
        }
    }

    /// The gesture kind this session was started with.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> GestureKind {
        self.kind
    }

    /// Geometry snapshot taken at gesture start.
    #[inline]
    #[must_use]
    pub const fn baseline(&self) -> Span {
        self.baseline
    }

    /// Apply one move tick with the given effective pixel delta.
    ///
    /// On success, `published` holds the new snapped geometry. Returns
    /// `false` when the tick is rejected (resize below one column); the
    /// session stays live and later ticks may still apply.
    pub fn apply(&mut self, delta: i32, column: i32, published: &mut Span) -> bool {
        match self.kind {
            GestureKind::ResizeLeft => {
                self.acc_width -= delta;
                let new_width = snap_to_column(self.acc_width, column);
                // Compensate the offset so the right edge stays put. The
                // accumulator takes the candidate even if the width check
                // rejects the tick.
                let new_offset = self.acc_offset - (new_width - published.width);
                self.acc_offset = new_offset;
                if new_width < column {
                    return false;
                }
                *published = Span::new(new_offset, new_width);
                true
            }
            GestureKind::ResizeRight => {
                self.acc_width += delta;
                let new_width = snap_to_column(self.acc_width, column);
                if new_width < column {
                    return false;
                }
                published.width = new_width.max(MIN_BLOCK_WIDTH);
                true
            }
            GestureKind::Move => {
                self.acc_offset += delta;
                published.offset = snap_to_column(self.acc_offset, column);
                true
            }
        }
    }

    /// Consume the session and compute the commit for the data layer.
    ///
    /// Resizes diff the published width against the baseline; moves diff the
    /// offset. The pixel diff is converted with ceiling division, so any
    /// partial final column counts as a full shift.
    #[must_use]
    pub fn finish(self, published: &Span, column: i32) -> BlockChange {
        let moved = match self.kind {
            GestureKind::ResizeLeft | GestureKind::ResizeRight => {
                published.width - self.baseline.width
            }
            GestureKind::Move => published.offset - self.baseline.offset,
        };
        BlockChange {
            column_shifts: column_shifts(moved, column),
            kind: self.kind,
        }
    }
}
