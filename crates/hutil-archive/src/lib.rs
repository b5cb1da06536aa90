//! Zip archives that are byte-for-byte reproducible, published atomically.
//!
//! # Architecture
//!
//! - `walk.rs` - Explicit-stack directory walker
//! - `entry.rs` - Entry naming and per-entry header fields
//! - `writer.rs` - Staged archive writing and publish
//! - `extract.rs` - Path-checked extraction

pub use entry::{ArchiveEntry, EntryMetadata, fixed_timestamp};
pub use error::{Error, Result};
pub use extract::{ExtractReport, extract};
pub use options::ArchiveOptions;
pub use writer::{archive, archive_dir, archive_files};

pub mod entry;
mod error;
mod extract;
pub mod options;
mod walk;
mod writer;
