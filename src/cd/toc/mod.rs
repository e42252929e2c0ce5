use crate::cd::device::{CdromDevice, CdromHandle, ControlRequest};
use crate::cd::error::{CdTocError, CdTocResult};
use crate::cd::models::{RawTocEntry, TocEntryFrame, TocHeader};
use crate::cd::{CDROM_LEADOUT, CDROM_MSF};
use log::{debug, warn};
use std::path::Path;

/// Issues `CDROMREADTOCHDR` and returns the inclusive track index range.
pub fn read_header(device: &mut impl CdromDevice) -> CdTocResult<TocHeader> {
    let request = ControlRequest::ReadTocHeader;
    let mut payload = TocHeader {
        first_track: 0,
        last_track: 0,
    }
    .encode()?;

    device
        .control(request, &mut payload)
        .map_err(|source| CdTocError::DeviceIo { request, source })?;

    let header = TocHeader::decode(&payload)?;
    debug!(
        "TOC header: tracks {} to {}",
        header.first_track, header.last_track
    );
    Ok(header)
}

/// Issues `CDROMREADTOCENTRY` for `index` in MSF mode.
pub fn read_entry(device: &mut impl CdromDevice, index: u8) -> CdTocResult<RawTocEntry> {
    let request = ControlRequest::ReadTocEntry;
    let mut payload = TocEntryFrame::msf_request(index).encode()?;

    device
        .control(request, &mut payload)
        .map_err(|source| CdTocError::DeviceIo { request, source })?;

    let frame = TocEntryFrame::decode(&payload)?;
    if frame.format != CDROM_MSF {
        return Err(CdTocError::Protocol {
            index,
            expected: CDROM_MSF,
            found: frame.format,
        });
    }

    let entry = RawTocEntry::from(frame);
    debug!(
        "TOC entry {}: track {} at {}{}",
        index,
        entry.track_number,
        entry.position,
        if entry.is_data_track { " (data)" } else { "" }
    );
    Ok(entry)
}

/// Reads every TOC entry from `device`, lead-out last.
///
/// The device is consumed and closed before this returns, on success or error.
pub fn read_toc_from(mut device: impl CdromDevice) -> CdTocResult<Vec<RawTocEntry>> {
    let header = read_header(&mut device)?;

    let last_track = if header.last_track >= CDROM_LEADOUT {
        warn!(
            "Driver reports tracks up to {}, stopping before the lead-out index {}",
            header.last_track, CDROM_LEADOUT
        );
        CDROM_LEADOUT - 1
    } else {
        header.last_track
    };

    let indices = (header.first_track..=last_track).chain(std::iter::once(CDROM_LEADOUT));
    let mut entries = Vec::with_capacity(last_track as usize + 1);
    for index in indices {
        entries.push(read_entry(&mut device, index)?);
    }

    Ok(entries)
}

/// Opens the drive at `device_path` and reads its TOC.
pub fn read_toc(device_path: impl AsRef<Path>) -> CdTocResult<Vec<RawTocEntry>> {
    let path = device_path.as_ref();
    let device = CdromHandle::open(path).map_err(|source| CdTocError::DeviceOpen {
        path: path.to_path_buf(),
        source,
    })?;

    read_toc_from(device)
}
