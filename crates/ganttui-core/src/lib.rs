#![forbid(unsafe_code)]

//! Core: pointer events, block geometry, and viewport state.
//!
//! # Role in GanttUI
//! `ganttui-core` is the input and measurement layer. It owns the canonical
//! pointer event types, the pixel geometry of a timeline block, and the
//! handles through which the host exposes its scrollable chart region.
//!
//! # Primary responsibilities
//! - **PointerEvent**: normalized pointer input (down, move, up).
//! - **Span**: a block's horizontal geometry plus column snapping math.
//! - **Viewport / TimelineSurface**: externally supplied chart state and the
//!   injected handle for scrolling and layout measurement.
//!
//! # How it fits in the system
//! The interaction layer (`ganttui-block`) consumes `ganttui-core` events and
//! drives gesture sessions against a `TimelineSurface`. Nothing in this crate
//! performs I/O; hosts adapt their own windowing or DOM layer to these types.

pub mod event;
pub mod geometry;
pub mod viewport;
