//! Data sources for Vitrine.
//!
//! This crate loads the item lists that carousels display:
//!
//! - **Static lists**: items bundled with the application
//! - **Resume documents**: work, education and certification entries from a
//!   JSON file, merged into one date-sorted timeline
//! - **Repository listings**: public repositories from a listing API, newest
//!   first and capped to a configurable count
//!
//! Every source implements [`ListDataSource`]. A load either yields the full
//! ordered list or a [`FetchError`]; sources never retry.
//!
//! # Example
//!
//! ```ignore
//! use vitrine_net::{HttpClient, ListDataSource, RepositorySource};
//!
//! let source = RepositorySource::github_user(HttpClient::new(), "octocat").with_limit(6);
//! let repositories = source.load().await?;
//! for repo in &repositories {
//!     println!("{} - {}", repo.name, repo.description_or_default());
//! }
//! ```

pub mod error;
pub mod http;
pub mod source;

pub use error::{FetchError, Result};
pub use http::{HttpClient, HttpClientBuilder, HttpClientConfig};
pub use source::{
    newest_first, parse_timeline_date, Description, EntryKind, ListDataSource, Repository,
    RepositorySource, ResumeDocument, ResumeEntry, ResumeLocation, ResumeSource, StaticListSource,
    TimelineEntry, DEFAULT_REPOSITORY_LIMIT,
};
