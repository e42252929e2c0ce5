use serde::{Serialize, Serializer};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

pub const CDDA_SCHEME: &str = "cdda://";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocatorError {
    #[error("Locator does not start with cdda://: {0}")]
    InvalidScheme(String),

    #[error("Locator is missing the '/#' device separator: {0}")]
    MissingDevice(String),

    #[error("Invalid track number in locator: {0}")]
    InvalidTrackNumber(String),
}

/// Address of one audio track on one drive, `cdda://<track>/#<device>`.
///
/// The rendered form is text, so a device path that is not valid UTF-8 has
/// those bytes replaced with U+FFFD and will not parse back to the same path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CddaLocator {
    pub track_number: u8,
    pub device_path: PathBuf,
}

impl CddaLocator {
    pub fn new(track_number: u8, device_path: impl AsRef<Path>) -> Self {
        Self {
            track_number,
            device_path: device_path.as_ref().to_path_buf(),
        }
    }
}

impl fmt::Display for CddaLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}/#{}",
            CDDA_SCHEME,
            self.track_number,
            self.device_path.display()
        )
    }
}

impl FromStr for CddaLocator {
    type Err = LocatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rest = s
            .strip_prefix(CDDA_SCHEME)
            .ok_or_else(|| LocatorError::InvalidScheme(s.to_string()))?;
        let (track, device) = rest
            .split_once("/#")
            .ok_or_else(|| LocatorError::MissingDevice(s.to_string()))?;
        if device.is_empty() {
            return Err(LocatorError::MissingDevice(s.to_string()));
        }

        let track_number = track
            .parse::<u8>()
            .map_err(|_| LocatorError::InvalidTrackNumber(track.to_string()))?;
        if track_number == 0 {
            return Err(LocatorError::InvalidTrackNumber(track.to_string()));
        }

        Ok(Self::new(track_number, device))
    }
}

impl Serialize for CddaLocator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
