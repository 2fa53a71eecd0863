//! Vitrine - headless carousels for portfolio showcases.
//!
//! This is the main crate. It re-exports the core primitives from
//! `vitrine-core` and the data sources from `vitrine-net`, and adds:
//!
//! - [`carousel::CarouselController`]: circular navigation, filtering,
//!   autoplay and keyboard bindings for one list
//! - [`session::CarouselSession`]: a data source paired with a controller,
//!   with load / retry state for the view
//! - [`config::VitrineConfig`]: TOML configuration for autoplay and sources
//!
//! # Example
//!
//! ```no_run
//! use vitrine::prelude::*;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = VitrineConfig::load("vitrine.toml")?;
//! let client = config.http_client()?;
//!
//! let mut projects = CarouselSession::new(config.repository_source(client));
//! if projects.load().await.is_ok() {
//!     config.apply_autoplay(projects.controller_mut());
//! }
//!
//! // From the application's event loop:
//! projects.controller_mut().process_events();
//! let _sleep_for = projects.controller_mut().time_until_next_event();
//! # Ok(())
//! # }
//! ```

pub use vitrine_core::*;

/// Data sources.
pub mod net {
    pub use vitrine_net::*;
}

pub mod carousel;
pub mod config;
pub mod prelude;
pub mod session;
