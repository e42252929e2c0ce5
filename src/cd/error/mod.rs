use crate::cd::device::ControlRequest;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CdTocError {
    #[error("Could not open CD device {path:?}: {source}")]
    DeviceOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{request} request failed: {source}")]
    DeviceIo {
        request: ControlRequest,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "Driver answered TOC entry {index} with addressing mode {found:#04x}, expected {expected:#04x}"
    )]
    Protocol { index: u8, expected: u8, found: u8 },

    #[error(transparent)]
    BinRWError(#[from] binrw::Error),
}

pub type CdTocResult<T> = Result<T, CdTocError>;
