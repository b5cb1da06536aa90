use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use hutil::datetime::{datetime_now, format_datetime, time_now};
use hutil::hash::{Algorithm, hash_file};

#[derive(Clone, Debug, Args)]
pub struct HashArg {
    pub path: PathBuf,
    /// sha256 or md5
    #[arg(long, short, default_value = "sha256")]
    pub algorithm: Algorithm,
}

impl HashArg {
    pub fn run(self) -> Result<()> {
        let digest = hash_file(&self.path, self.algorithm)
            .with_context(|| format!("failed to hash {}", self.path.display()))?;
        println!("{digest}  {}", self.path.display());
        Ok(())
    }
}

#[derive(Clone, Debug, Args)]
pub struct NowArg {
    /// Only the time of day
    #[arg(long, short)]
    pub time: bool,
}

impl NowArg {
    pub fn run(self) -> Result<()> {
        if self.time {
            println!("{}", time_now());
        } else {
            println!("{}", format_datetime(&datetime_now()));
        }
        Ok(())
    }
}
