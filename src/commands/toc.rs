use cdda_toc::CddaLocator;
use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_DEVICE: &str = "/dev/cdrom";

/// Lists the audio tracks on the disc
#[derive(Parser, Debug, Clone)]
pub struct ReadCommand {
    /// CD device to read from
    #[arg(value_name = "DEVICE", env = "CDDA_TOC_DEVICE", default_value = DEFAULT_DEVICE)]
    pub device: PathBuf,

    /// Print the tracks as a JSON array
    #[arg(long, short = 'j', default_value_t = false)]
    pub json: bool,

    /// Give up after this many seconds if the drive does not answer
    #[arg(long, short = 't', value_name = "SECS")]
    pub timeout: Option<u64>,
}

/// Dumps the raw TOC entries, lead-out included
#[derive(Parser, Debug, Clone)]
pub struct RawCommand {
    /// CD device to read from
    #[arg(value_name = "DEVICE", env = "CDDA_TOC_DEVICE", default_value = DEFAULT_DEVICE)]
    pub device: PathBuf,
}

/// Splits a cdda:// locator into track number and device
#[derive(Parser, Debug, Clone)]
pub struct LocateCommand {
    #[arg(value_name = "LOCATOR")]
    pub locator: CddaLocator,
}
