use anyhow::Result;
use clap::{Parser, Subcommand};

use super::archive::{UnzipArg, ZipArg, ZipDirArg};
use super::fetch::{DownloadArg, GhReleaseArg, OneDriveArg};
use super::misc::{HashArg, NowArg};

#[derive(Clone, Debug, Parser)]
#[command(name = "hutil", version = env!("CARGO_PKG_VERSION"), about, long_about = None, propagate_version = true)]
pub struct App {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    // Archive
    #[command(name = "zip", about = "Zip files and directories")]
    Zip(ZipArg),
    #[command(name = "zip-dir", about = "Zip the contents of a directory")]
    ZipDir(ZipDirArg),
    #[command(alias = "x", name = "unzip", about = "Extract a zip archive")]
    Unzip(UnzipArg),

    // Fetch
    #[command(alias = "dl", name = "download", about = "Download a URL")]
    Download(DownloadArg),
    #[command(name = "gh-release", about = "Download an asset from a private GitHub release")]
    GhRelease(GhReleaseArg),
    #[command(name = "onedrive", about = "Download a OneDrive share link")]
    OneDrive(OneDriveArg),

    // Misc
    #[command(name = "hash", about = "Print a file digest")]
    Hash(HashArg),
    #[command(name = "now", about = "Print the current Shanghai time")]
    Now(NowArg),
}

impl App {
    pub async fn run(self) -> Result<()> {
        match self.cmd {
            Commands::Zip(arg) => arg.run(),
            Commands::ZipDir(arg) => arg.run(),
            Commands::Unzip(arg) => arg.run(),
            Commands::Download(arg) => arg.run().await,
            Commands::GhRelease(arg) => arg.run().await,
            Commands::OneDrive(arg) => arg.run().await,
            Commands::Hash(arg) => arg.run(),
            Commands::Now(arg) => arg.run(),
        }
    }
}
