//! hutil: a personal utility toolkit.
//!
//! Re-exports the workspace crates under one roof and adds the [`datetime`]
//! helpers.

pub use hutil_archive as archive;
pub use hutil_fetch as fetch;
pub use hutil_fs as fs;
pub use hutil_hash as hash;
pub use hutil_platform as platform;

pub mod datetime;
