//! Turn provider-specific URLs into plain downloads.

pub mod github;
pub mod onedrive;

pub use github::{GitHubReleases, ReleaseAssetUrl};
pub use onedrive::ShareLink;
