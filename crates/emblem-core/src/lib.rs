//! Core systems for the Emblem widget library.
//!
//! This crate provides the pieces of Emblem that are independent of geometry
//! and rendering:
//!
//! - [`Signal`] - a direct-invocation signal/slot mechanism for change
//!   notification
//! - [`RedrawQueue`] / [`RedrawHandle`] - cross-thread redraw-request
//!   marshaling onto the rendering thread
//! - [`logging`] - `tracing` target constants for log filtering
//!
//! Emblem widgets never run their own event loop; the host drains the redraw
//! queue on whichever thread owns the rendering surface.

pub mod logging;
mod redraw;
mod signal;

pub use redraw::{RedrawHandle, RedrawQueue};
pub use signal::{ConnectionId, Signal};
