//! Loading a carousel from a data source.

use std::sync::Arc;

use vitrine_core::logging::targets;
use vitrine_core::Clock;
use vitrine_net::{FetchError, ListDataSource};

use crate::carousel::CarouselController;

/// Progress of the most recent load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    /// No load has been attempted.
    #[default]
    Idle,
    /// A load is in flight.
    Loading,
    /// The last load succeeded.
    Ready,
    /// The last load failed; the view offers a retry.
    Failed(FetchError),
}

impl LoadState {
    /// Whether a load is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The error from the last load, if it failed.
    pub fn error(&self) -> Option<&FetchError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// A data source paired with the controller that displays it.
///
/// A failed load leaves the controller as it was: the first failure shows an
/// empty carousel with a retry affordance, a failed refresh keeps the items
/// from the last success.
#[derive(Debug)]
pub struct CarouselSession<S: ListDataSource> {
    source: S,
    controller: CarouselController<S::Item>,
    state: LoadState,
    loads: u32,
}

impl<S: ListDataSource> CarouselSession<S> {
    /// Pair `source` with a fresh controller.
    pub fn new(source: S) -> Self {
        Self::with_controller(source, CarouselController::new())
    }

    /// Pair `source` with a controller whose autoplay reads `clock`.
    pub fn with_clock(source: S, clock: Arc<dyn Clock>) -> Self {
        Self::with_controller(source, CarouselController::with_clock(clock))
    }

    /// Pair `source` with an existing controller.
    pub fn with_controller(source: S, controller: CarouselController<S::Item>) -> Self {
        Self {
            source,
            controller,
            state: LoadState::Idle,
            loads: 0,
        }
    }

    /// Fetch the list and show it.
    pub async fn load(&mut self) -> Result<(), FetchError> {
        self.state = LoadState::Loading;
        self.loads += 1;
        tracing::debug!(target: targets::SESSION, attempt = self.loads, "loading carousel items");

        match self.source.load().await {
            Ok(items) => {
                tracing::debug!(target: targets::SESSION, count = items.len(), "carousel items loaded");
                self.controller.initialize(items);
                self.state = LoadState::Ready;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(
                    target: targets::SESSION,
                    %err,
                    transient = err.is_transient(),
                    "carousel items failed to load"
                );
                self.state = LoadState::Failed(err.clone());
                Err(err)
            }
        }
    }

    /// Load again after a failure, replacing the items wholesale.
    pub async fn retry(&mut self) -> Result<(), FetchError> {
        self.load().await
    }

    /// Progress of the most recent load.
    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Number of loads attempted.
    pub fn load_count(&self) -> u32 {
        self.loads
    }

    /// Whether the view should show its "no results" message: the list
    /// loaded but nothing is visible.
    pub fn is_showing_empty_result(&self) -> bool {
        self.state == LoadState::Ready && self.controller.is_empty()
    }

    /// The controller.
    pub fn controller(&self) -> &CarouselController<S::Item> {
        &self.controller
    }

    /// The controller, for navigation and filtering.
    pub fn controller_mut(&mut self) -> &mut CarouselController<S::Item> {
        &mut self.controller
    }

    /// The data source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Dispose the controller and return the source.
    pub fn into_source(mut self) -> S {
        self.controller.dispose();
        self.source
    }
}
