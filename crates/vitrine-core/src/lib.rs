//! Core systems for Vitrine.
//!
//! This crate provides the foundational pieces the carousel controller is
//! built on:
//!
//! - **Signal/Slot System**: Type-safe change notification for view renderers
//! - **Timers**: One-shot and repeating timers driven by an injectable [`Clock`]
//! - **Errors**: Carousel and timer error types
//! - **Logging**: `tracing` target names for each subsystem
//!
//! # Signal/Slot Example
//!
//! ```
//! use vitrine_core::Signal;
//!
//! let index_changed = Signal::<usize>::new();
//!
//! let conn_id = index_changed.connect(|index| {
//!     println!("Now showing slide {}", index);
//! });
//!
//! index_changed.emit(2);
//! index_changed.disconnect(conn_id);
//! ```
//!
//! # Timer Example
//!
//! ```
//! use std::sync::Arc;
//! use std::time::Duration;
//! use vitrine_core::{ManualClock, TimerQueue};
//!
//! let clock = Arc::new(ManualClock::new());
//! let mut timers = TimerQueue::with_clock(clock.clone());
//!
//! let id = timers.start_repeating(Duration::from_millis(5000));
//! clock.advance(Duration::from_millis(5000));
//! assert_eq!(timers.process_expired(), vec![id]);
//! ```

mod error;
pub mod logging;
pub mod signal;
mod timer;

pub use error::{CarouselError, Result, TimerError};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
pub use timer::{Clock, ManualClock, SystemClock, TimerId, TimerQueue};
