//! Logging facilities for Emblem.
//!
//! Emblem uses the `tracing` crate for instrumentation. To see logs, install
//! a tracing subscriber in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt::init();
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "emblem_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "emblem_core::signal";
    /// Redraw marshaling target.
    pub const REDRAW: &str = "emblem_core::redraw";
    /// Layout engine target.
    pub const LAYOUT: &str = "emblem::layout";
    /// Compositor target.
    pub const COMPOSITOR: &str = "emblem::compositor";
}
