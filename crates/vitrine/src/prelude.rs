//! Prelude module for Vitrine.
//!
//! ```ignore
//! use vitrine::prelude::*;
//! ```

// ============================================================================
// Carousel
// ============================================================================

pub use crate::carousel::{
    text_filter, CarouselCommand, CarouselController, CarouselSnapshot, Key, KeyPress,
    Searchable, SlideDirection,
};

// ============================================================================
// Loading and configuration
// ============================================================================

pub use crate::config::{ConfigError, VitrineConfig};
pub use crate::session::{CarouselSession, LoadState};

// ============================================================================
// Core and sources
// ============================================================================

pub use vitrine_core::{CarouselError, ManualClock, Signal, SystemClock};
pub use vitrine_net::{
    FetchError, HttpClient, ListDataSource, Repository, RepositorySource, ResumeSource,
    StaticListSource, TimelineEntry,
};
