// Constants from linux/include/uapi/linux/cdrom.h
use crate::cd::assembler::{Track, assemble_tracks};
use crate::cd::device::CdromDevice;
use crate::cd::error::CdTocResult;
use crate::cd::toc::{read_toc, read_toc_from};
use log::debug;
use std::path::Path;

pub mod assembler;
pub mod device;
pub mod error;
pub mod locator;
pub mod models;
pub mod toc;

pub const CDROMREADTOCHDR: u32 = 0x5305;
pub const CDROMREADTOCENTRY: u32 = 0x5306;

/// Index of the lead-out, the last TOC entry
pub const CDROM_LEADOUT: u8 = 0xAA;

/// Binary minute/second/frame addressing, as opposed to `CDROM_LBA`
pub const CDROM_MSF: u8 = 0x02;

/// Bit in the control nibble marking a data track
pub const CDROM_DATA_TRACK: u8 = 0x04;

/// Frames per second, `CD_FRAMES`
pub const CD_FRAMES: u8 = 75;

/// Reads the disc in `device_path` and returns its audio tracks.
pub fn read_cd_index(device_path: impl AsRef<Path>) -> CdTocResult<Vec<Track>> {
    let device_path = device_path.as_ref();
    debug!("Reading CD index from {:?}", device_path);

    let entries = read_toc(device_path)?;
    Ok(assemble_tracks(&entries, device_path))
}

/// Like [`read_cd_index`] on an already opened device; `device_path` only
/// ends up in the track locators.
pub fn read_cd_index_from(
    device: impl CdromDevice,
    device_path: impl AsRef<Path>,
) -> CdTocResult<Vec<Track>> {
    let entries = read_toc_from(device)?;
    Ok(assemble_tracks(&entries, device_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cd::device::mock::ScriptedDevice;
    use crate::cd::error::CdTocError;
    use crate::cd::models::Msf;

    #[test]
    fn mixed_mode_disc() {
        let device = ScriptedDevice::disc(
            &[
                (true, Msf::new(0, 2, 0)),
                (false, Msf::new(20, 0, 0)),
                (false, Msf::new(23, 25, 0)),
            ],
            Msf::new(27, 0, 15),
        );
        let dropped = device.dropped.clone();

        let tracks = read_cd_index_from(device, "/dev/sr0").unwrap();

        assert!(dropped.get());
        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[0].track_number, 2);
        assert_eq!(tracks[0].duration_seconds, 205.0);
        assert_eq!(tracks[0].locator.to_string(), "cdda://2/#/dev/sr0");
        assert_eq!(tracks[1].track_number, 3);
        assert_eq!(tracks[1].duration_seconds, 215.2);
    }

    #[test]
    fn protocol_error_surfaces_from_combined_read() {
        let mut device = ScriptedDevice::disc(&[(false, Msf::new(0, 2, 0))], Msf::new(3, 0, 0));
        device
            .entries
            .get_mut(&CDROM_LEADOUT)
            .unwrap()
            .format = 0x01;
        let dropped = device.dropped.clone();

        let err = read_cd_index_from(device, "/dev/sr0").unwrap_err();

        assert!(matches!(
            err,
            CdTocError::Protocol {
                index: CDROM_LEADOUT,
                ..
            }
        ));
        assert!(dropped.get());
    }
}
