//! List data sources.
//!
//! A [`ListDataSource`] produces the ordered items a carousel shows. Sources
//! are stateless with respect to their callers: any number of controllers can
//! call [`load`](ListDataSource::load) on the same source without
//! coordination. Sources never retry; a failed load is reported once as a
//! [`FetchError`](crate::FetchError) and the caller decides what to do next.
//!
//! Provided sources:
//!
//! - [`StaticListSource`] - an in-memory list bundled with the application
//! - [`ResumeSource`] - the static resume document (work, education,
//!   certifications) merged into one date-sorted timeline
//! - [`RepositorySource`] - a public repository listing, newest first

mod repository;
mod resume;

use std::future::Future;

pub use repository::{newest_first, Repository, RepositorySource, DEFAULT_REPOSITORY_LIMIT};
pub use resume::{
    parse_timeline_date, Description, EntryKind, ResumeDocument, ResumeEntry, ResumeLocation,
    ResumeSource, TimelineEntry,
};

use crate::error::Result;

/// An asynchronous, read-only producer of an ordered item list.
pub trait ListDataSource: Send + Sync {
    /// The item type produced.
    type Item: Send;

    /// Load the full list in display order.
    fn load(&self) -> impl Future<Output = Result<Vec<Self::Item>>> + Send;
}

/// A source backed by a list compiled into the application.
///
/// Loading clones the list and never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticListSource<T> {
    items: Vec<T>,
}

impl<T> StaticListSource<T> {
    /// Wrap a list.
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    /// The wrapped items.
    pub fn items(&self) -> &[T] {
        &self.items
    }
}

impl<T> From<Vec<T>> for StaticListSource<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T: Clone + Send + Sync> ListDataSource for StaticListSource<T> {
    type Item = T;

    async fn load(&self) -> Result<Vec<T>> {
        Ok(self.items.clone())
    }
}
