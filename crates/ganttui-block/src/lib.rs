#![forbid(unsafe_code)]

//! Interactive timeline block for GanttUI.
//!
//! # Role in GanttUI
//! `ganttui-block` is the interaction layer: it turns pointer events into
//! live geometry updates on a single timeline block and reports the net
//! column shift of each completed gesture back to the owning data layer.
//!
//! # Primary responsibilities
//! - **ChartDraggable**: the controller. One gesture session at a time,
//!   started on primary-button press on a drag handle, committed on release.
//! - **GestureSession**: resize-left / resize-right / move tick semantics
//!   with column snapping and minimum-width enforcement.
//! - **Edge auto-scroll**: fixed-step scrolling when the pointer nears the
//!   chart's scroll boundaries mid-drag.
//! - **VisibilityIndicator**: off-screen detection and the "jump to block"
//!   affordance.
//!
//! # How it fits in the system
//! The host owns block records and the scroll container; it adapts its input
//! and layout to `ganttui-core` types and consumes [`BlockChange`] commits
//! for date/range recalculation. No persistence happens here.

pub mod autoscroll;
pub mod draggable;
pub mod session;
pub mod visibility;

pub use draggable::{Block, BlockId, ChartDraggable, DragHandle, InteractionFlags};
pub use session::{BlockChange, GestureKind, GestureSession, MIN_BLOCK_WIDTH};
pub use visibility::VisibilityIndicator;
