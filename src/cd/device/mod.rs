use crate::cd::{CDROMREADTOCENTRY, CDROMREADTOCHDR};
use log::debug;
use std::fmt;
use std::fs::{File, OpenOptions};
use std::path::Path;

#[cfg(test)]
pub(crate) mod mock;

/// The control requests the TOC reader issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlRequest {
    ReadTocHeader,
    ReadTocEntry,
}

impl ControlRequest {
    pub fn code(self) -> u32 {
        match self {
            Self::ReadTocHeader => CDROMREADTOCHDR,
            Self::ReadTocEntry => CDROMREADTOCENTRY,
        }
    }
}

impl fmt::Display for ControlRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReadTocHeader => write!(f, "CDROMREADTOCHDR ({:#06x})", self.code()),
            Self::ReadTocEntry => write!(f, "CDROMREADTOCENTRY ({:#06x})", self.code()),
        }
    }
}

/// Something that accepts CD-ROM control requests.
///
/// `payload` is the request struct on the way in and is overwritten with the
/// driver's answer on success.
pub trait CdromDevice {
    fn control(&mut self, request: ControlRequest, payload: &mut [u8]) -> std::io::Result<()>;
}

/// An open optical drive. The descriptor is closed when the handle is dropped.
#[derive(Debug)]
pub struct CdromHandle {
    file: File,
}

impl CdromHandle {
    /// Opens `path` read-only. `O_NONBLOCK` lets the open succeed with an
    /// empty or open tray so the failure surfaces on the first request.
    pub fn open(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let mut options = OpenOptions::new();
        options.read(true);

        #[cfg(target_os = "linux")]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.custom_flags(libc::O_NONBLOCK);
        }

        let file = options.open(path.as_ref())?;
        debug!("Opened CD device {:?}", path.as_ref());
        Ok(Self { file })
    }
}

impl CdromDevice for CdromHandle {
    #[cfg(target_os = "linux")]
    fn control(&mut self, request: ControlRequest, payload: &mut [u8]) -> std::io::Result<()> {
        use std::os::fd::AsRawFd;

        let fd = self.file.as_raw_fd();
        let ret = unsafe {
            libc::ioctl(
                fd,
                request.code() as _,
                payload.as_mut_ptr() as *mut libc::c_void,
            )
        };
        if ret < 0 {
            return Err(std::io::Error::last_os_error());
        }

        Ok(())
    }

    #[cfg(not(target_os = "linux"))]
    fn control(&mut self, request: ControlRequest, _payload: &mut [u8]) -> std::io::Result<()> {
        Err(std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            format!("{request} is only available on Linux"),
        ))
    }
}

impl<D: CdromDevice + ?Sized> CdromDevice for &mut D {
    fn control(&mut self, request: ControlRequest, payload: &mut [u8]) -> std::io::Result<()> {
        (**self).control(request, payload)
    }
}
