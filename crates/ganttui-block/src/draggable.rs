#![forbid(unsafe_code)]

//! The draggable block controller.
//!
//! [`ChartDraggable`] owns one block record and interprets pointer events
//! against it: a primary-button press on a drag handle opens a
//! [`GestureSession`], move events update the published geometry live (with
//! edge auto-scroll), and release destroys the session and produces exactly
//! one [`BlockChange`] commit.
//!
//! # Invariants
//!
//! 1. At most one gesture session is active at a time; a press while a
//!    session is open never starts a second one.
//! 2. A gesture started with a non-primary button never begins.
//! 3. Every started gesture commits exactly once on release, even when the
//!    net column shift is zero.
//! 4. The `moving` flag is set only while a move gesture is receiving ticks
//!    and is cleared unconditionally on release.

use core::fmt;

use bitflags::bitflags;
use ganttui_core::event::{PointerButton, PointerEvent, PointerEventKind};
use ganttui_core::geometry::Span;
use ganttui_core::viewport::{TimelineSurface, Viewport};

use crate::autoscroll;
use crate::session::{BlockChange, GestureKind, GestureSession};

/// Opaque identifier for a block, stable for the block's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockId(u64);

impl BlockId {
    /// Create a new block id.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// The raw id value.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "block-{}", self.0)
    }
}

/// A caller-owned block record: identity, opaque payload, and geometry.
///
/// The payload is passed through untouched to the render hook; the
/// controller only ever reads and republishes `span`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block<D> {
    /// Stable identity.
    pub id: BlockId,

    /// Opaque payload for the render hook.
    pub data: D,

    /// Current published geometry.
    pub span: Span,
}

impl<D> Block<D> {
    /// Create a new block record.
    #[must_use]
    pub const fn new(id: BlockId, data: D, span: Span) -> Self {
        Self { id, data, span }
    }
}

bitflags! {
    /// Capability flags gating which drag handles are active.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct InteractionFlags: u8 {
        /// Left-edge resize handle.
        const LEFT_RESIZE  = 0b001;
        /// Right-edge resize handle.
        const RIGHT_RESIZE = 0b010;
        /// Whole-block move via the body.
        const MOVE         = 0b100;
    }
}

/// The drag handle a pointer press landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragHandle {
    /// The resize grip on the block's left edge.
    LeftEdge,

    /// The resize grip on the block's right edge.
    RightEdge,

    /// The block body (move).
    Body,
}

impl DragHandle {
    /// The gesture kind this handle starts.
    #[must_use]
    pub const fn gesture_kind(self) -> GestureKind {
        match self {
            Self::LeftEdge => GestureKind::ResizeLeft,
            Self::RightEdge => GestureKind::ResizeRight,
            Self::Body => GestureKind::Move,
        }
    }

    /// The capability flag that must be set for this handle to be active.
    #[must_use]
    pub const fn required_flag(self) -> InteractionFlags {
        match self {
            Self::LeftEdge => InteractionFlags::LEFT_RESIZE,
            Self::RightEdge => InteractionFlags::RIGHT_RESIZE,
            Self::Body => InteractionFlags::MOVE,
        }
    }
}

/// Interaction controller for one draggable timeline block.
///
/// Drive it with [`on_pointer_down`](Self::on_pointer_down),
/// [`on_pointer_move`](Self::on_pointer_move), and
/// [`on_pointer_up`](Self::on_pointer_up). The host delivers move and up
/// events for the whole input surface while a gesture is active, so the
/// gesture survives the pointer leaving the handle's bounds.
pub struct ChartDraggable<D> {
    block: Block<D>,
    flags: InteractionFlags,
    session: Option<GestureSession>,
    moving: bool,
    on_change: Option<Box<dyn FnMut(BlockChange)>>,
}

impl<D: fmt::Debug> fmt::Debug for ChartDraggable<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChartDraggable")
            .field("block", &self.block)
            .field("flags", &self.flags)
            .field("active_kind", &self.active_kind())
            .field("moving", &self.moving)
            .finish()
    }
}

impl<D> ChartDraggable<D> {
    /// Create a controller over a block with the given capabilities.
    #[must_use]
    pub fn new(block: Block<D>, flags: InteractionFlags) -> Self {
        Self {
            block,
            flags,
            session: None,
            moving: false,
            on_change: None,
        }
    }

    /// Register the change handler invoked once per completed gesture.
    #[must_use]
    pub fn with_change_handler(mut self, handler: impl FnMut(BlockChange) + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }

    /// The block's current published geometry.
    #[inline]
    #[must_use]
    pub const fn span(&self) -> Span {
        self.block.span
    }

    /// The owned block record.
    #[inline]
    #[must_use]
    pub const fn block(&self) -> &Block<D> {
        &self.block
    }

    /// The capability flags.
    #[inline]
    #[must_use]
    pub const fn flags(&self) -> InteractionFlags {
        self.flags
    }

    /// Whether a gesture session is currently open.
    #[inline]
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// The kind of the active gesture, if any.
    #[must_use]
    pub fn active_kind(&self) -> Option<GestureKind> {
        self.session.as_ref().map(GestureSession::kind)
    }

    /// Whether a move gesture is in flight. Hosts use this to disable
    /// pointer interaction on the block's inner content during the drag.
    #[inline]
    #[must_use]
    pub const fn is_moving(&self) -> bool {
        self.moving
    }

    /// Horizontal displacement for the block's interior text, keeping it in
    /// view while the block extends left of the scroll window.
    #[must_use]
    pub const fn text_displacement(&self, viewport: &Viewport) -> i32 {
        viewport.scroll_offset - self.block.span.offset
    }

    /// Render the block's interior through a caller-supplied hook.
    pub fn render_content<R>(&self, viewport: &Viewport, f: impl FnOnce(&D, i32) -> R) -> R {
        f(&self.block.data, self.text_displacement(viewport))
    }

    /// Handle a pointer press on a drag handle.
    ///
    /// Starts a gesture session and returns `true` iff the press is with the
    /// primary button, the handle's capability flag is set, the viewport has
    /// a usable column width, and no session is already open.
    pub fn on_pointer_down(
        &mut self,
        handle: DragHandle,
        event: &PointerEvent,
        viewport: &Viewport,
    ) -> bool {
        if self.session.is_some() {
            return false;
        }
        let PointerEventKind::Down(button) = event.kind else {
            return false;
        };
        if button != PointerButton::Primary {
            return false;
        }
        if !self.flags.contains(handle.required_flag()) {
            return false;
        }
        if viewport.column_width <= 0 {
            return false;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            block = %self.block.id,
            kind = %handle.gesture_kind(),
            "gesture start"
        );

        self.session = Some(GestureSession::begin(handle.gesture_kind(), self.block.span));
        true
    }

    /// Handle a pointer move while a gesture is active.
    ///
    /// Computes the tick's effective delta (injecting edge auto-scroll
    /// through `surface` when the pointer is near a boundary) and applies it
    /// to the live geometry. Returns `true` iff the tick was applied; a tick
    /// rejected by the minimum-width rule or arriving with no open session
    /// returns `false` without touching the geometry.
    pub fn on_pointer_move(
        &mut self,
        event: &PointerEvent,
        viewport: &Viewport,
        surface: &mut dyn TimelineSurface,
    ) -> bool {
        if event.kind != PointerEventKind::Move {
            return false;
        }
        let Some(session) = self.session.as_mut() else {
            return false;
        };

        if session.kind() == GestureKind::Move {
            self.moving = true;
        }

        let delta = autoscroll::effective_delta(event, surface);
        session.apply(delta, viewport.column_width, &mut self.block.span)
    }

    /// Handle the pointer release that ends a gesture.
    ///
    /// Destroys the session, clears the moving flag, and produces the commit
    /// exactly once per started gesture. A zero net column shift is still
    /// reported. Returns `None` when no gesture was open.
    pub fn on_pointer_up(&mut self, viewport: &Viewport) -> Option<BlockChange> {
        self.moving = false;
        let session = self.session.take()?;
        let change = session.finish(&self.block.span, viewport.column_width);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            block = %self.block.id,
            kind = %change.kind,
            column_shifts = change.column_shifts,
            "gesture commit"
        );

        if let Some(handler) = self.on_change.as_mut() {
            handler(change);
        }
        Some(change)
    }
}
