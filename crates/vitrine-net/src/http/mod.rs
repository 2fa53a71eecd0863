//! HTTP client used by remote data sources.
//!
//! # Example
//!
//! ```ignore
//! use vitrine_net::http::HttpClient;
//!
//! let client = HttpClient::new();
//! let response = client
//!     .get("https://api.github.com/users/octocat/repos")
//!     .query("per_page", "100")
//!     .send()
//!     .await?;
//! let repos: Vec<Repository> = response.error_for_status().await?.json().await?;
//! ```

mod client;
mod response;

pub use client::{HttpClient, HttpClientBuilder, HttpClientConfig, RequestBuilder};
pub use response::HttpResponse;
