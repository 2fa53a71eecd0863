//! Logging facilities for Vitrine.
//!
//! Vitrine uses the `tracing` crate for instrumentation. To see logs, install
//! a subscriber in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("vitrine::carousel=debug,vitrine::net=info")
//!         .init();
//! }
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Carousel state transitions.
    pub const CAROUSEL: &str = "vitrine::carousel";
    /// Timer system target.
    pub const TIMER: &str = "vitrine::timer";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "vitrine::signal";
    /// Data source fetches.
    pub const NET: &str = "vitrine::net";
    /// Load / retry lifecycle of a carousel session.
    pub const SESSION: &str = "vitrine::session";
    /// Configuration loading.
    pub const CONFIG: &str = "vitrine::config";
}
