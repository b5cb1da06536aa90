//! Streaming downloads that never leave a partial file at the destination.
//!
//! # Architecture
//!
//! This crate follows the three-layer pattern:
//! - [`data`] - Immutable configuration and request types
//! - [`core`] - Pure header and filename handling
//! - [`effects`] - I/O behind the [`HttpClient`] seam
//! - [`providers`] - GitHub release and OneDrive share-link resolvers
//!
//! A download streams into a temp file in the destination's own directory
//! and is renamed into place only after the body is complete and a
//! filename is known. Dropping the future mid-download deletes the temp
//! file.

pub mod core;
pub mod data;
pub mod effects;
mod error;
pub mod providers;

pub use data::{DownloadTarget, FetchOptions, ResolvedDownload, Timeouts};
pub use effects::{BoxStream, Fetcher, HttpClient, Response};
pub use error::{FetchError, Result};
pub use providers::{GitHubReleases, ReleaseAssetUrl, ShareLink};

#[cfg(feature = "reqwest")]
pub use effects::ReqwestClient;
