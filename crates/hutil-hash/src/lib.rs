//! Streaming file digests.
//!
//! Files are hashed as they are read, never loaded whole.
//!
//! ```no_run
//! let digest = hutil_hash::hash_file("~/release.zip", hutil_hash::Algorithm::Sha256)?;
//! println!("{digest}");
//! # Ok::<(), hutil_hash::HashError>(())
//! ```

pub use self::error::{HashError, Result};
pub use self::file::hash_file;
pub use self::hasher::{Algorithm, AnyHasher, Hasher};
pub use self::reader::HashingReader;

#[cfg(feature = "sha256")]
pub use self::file::sha256;
#[cfg(feature = "sha256")]
pub use self::hasher::Sha256Hasher;

#[cfg(feature = "md5")]
pub use self::file::md5;
#[cfg(feature = "md5")]
pub use self::hasher::Md5Hasher;

mod error;
mod file;
mod hasher;
mod reader;
