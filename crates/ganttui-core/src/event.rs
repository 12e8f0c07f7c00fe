#![forbid(unsafe_code)]

//! Canonical pointer event types.
//!
//! All events derive `Clone`, `Copy`, `PartialEq`, and `Eq` for use in tests
//! and pattern matching.
//!
//! # Design Notes
//!
//! - Coordinates are client-space pixels, signed: a pointer can sit left of
//!   the chart origin while a drag is in flight.
//! - `movement_x` is the horizontal delta since the previous pointer event,
//!   as reported by the host input layer.

/// Pointer button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Primary button (usually left). Only this button starts gestures.
    Primary,

    /// Secondary button (usually right).
    Secondary,

    /// Auxiliary button (usually middle/wheel).
    Auxiliary,
}

/// The type of pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    /// Pointer button pressed down.
    Down(PointerButton),

    /// Pointer moved. While a gesture is active the host delivers these for
    /// the whole input surface, not just the originating handle.
    Move,

    /// Pointer button released.
    Up(PointerButton),
}

/// A normalized pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    /// The type of pointer event.
    pub kind: PointerEventKind,

    /// Horizontal position in client-space pixels.
    pub client_x: i32,

    /// Horizontal movement since the previous pointer event, in pixels.
    pub movement_x: i32,
}

impl PointerEvent {
    /// Create a new pointer event.
    #[must_use]
    pub const fn new(kind: PointerEventKind, client_x: i32, movement_x: i32) -> Self {
        Self {
            kind,
            client_x,
            movement_x,
        }
    }

    /// A button-down event at the given position.
    #[must_use]
    pub const fn down(button: PointerButton, client_x: i32) -> Self {
        Self::new(PointerEventKind::Down(button), client_x, 0)
    }

    /// A move event at the given position with the given delta.
    #[must_use]
    pub const fn moved(client_x: i32, movement_x: i32) -> Self {
        Self::new(PointerEventKind::Move, client_x, movement_x)
    }

    /// A button-up event at the given position.
    #[must_use]
    pub const fn up(button: PointerButton, client_x: i32) -> Self {
        Self::new(PointerEventKind::Up(button), client_x, 0)
    }

    /// Whether this is a primary-button press.
    #[must_use]
    pub const fn is_primary_down(&self) -> bool {
        matches!(self.kind, PointerEventKind::Down(PointerButton::Primary))
    }
}
