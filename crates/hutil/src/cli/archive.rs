use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use hutil::archive::{ArchiveOptions, archive, archive_dir, extract};

#[derive(Clone, Debug, Args)]
pub struct ZipArg {
    /// Files and directories to include
    #[arg(required = true)]
    pub sources: Vec<PathBuf>,
    /// Archive to write
    #[arg(long, short)]
    pub output: PathBuf,
    /// Fixed timestamps and modes, sorted entries
    #[arg(long, short)]
    pub deterministic: bool,
}

impl ZipArg {
    pub fn run(self) -> Result<()> {
        let options = ArchiveOptions::new().deterministic(self.deterministic);
        let path = archive(&self.sources, &self.output, options)
            .with_context(|| format!("failed to write {}", self.output.display()))?;
        println!("{}", path.display());
        Ok(())
    }
}

#[derive(Clone, Debug, Args)]
pub struct ZipDirArg {
    pub dir: PathBuf,
    /// Output path; the extension is replaced with `.zip`
    pub output: PathBuf,
}

impl ZipDirArg {
    pub fn run(self) -> Result<()> {
        let path = archive_dir(&self.dir, &self.output)
            .with_context(|| format!("failed to zip {}", self.dir.display()))?;
        println!("{}", path.display());
        Ok(())
    }
}

#[derive(Clone, Debug, Args)]
pub struct UnzipArg {
    pub archive: PathBuf,
    #[arg(default_value = ".")]
    pub dest: PathBuf,
}

impl UnzipArg {
    pub fn run(self) -> Result<()> {
        let report = extract(&self.archive, &self.dest)
            .with_context(|| format!("failed to extract {}", self.archive.display()))?;
        tracing::info!(
            entries = report.entry_count,
            bytes = report.total_bytes,
            "extracted"
        );
        Ok(())
    }
}
