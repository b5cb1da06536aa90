pub use error::{Error, Result};
pub use os::{MODE_EXECUTABLE, MODE_READ_ONLY, Platform, current};

mod error;
pub mod os;
pub mod path;
