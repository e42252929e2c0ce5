use crate::cd::device::{CdromDevice, ControlRequest};
use crate::cd::models::{Msf, TocEntryFrame, TocHeader};
use crate::cd::{CDROM_LEADOUT, CDROM_MSF};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

/// Answers control requests from a fixed disc layout and records what it was asked.
pub(crate) struct ScriptedDevice {
    pub header: TocHeader,
    pub entries: HashMap<u8, TocEntryFrame>,
    pub fail_header: bool,
    pub fail_entry: Option<u8>,
    pub requests: Rc<RefCell<Vec<(ControlRequest, u8)>>>,
    pub dropped: Rc<Cell<bool>>,
}

impl ScriptedDevice {
    /// `tracks` are `(is_data, start)` pairs numbered from 1, followed by the lead-out.
    pub fn disc(tracks: &[(bool, Msf)], lead_out: Msf) -> Self {
        let mut entries = HashMap::new();
        for (i, (is_data, start)) in tracks.iter().enumerate() {
            let number = i as u8 + 1;
            entries.insert(number, Self::frame(number, *is_data, *start));
        }
        entries.insert(CDROM_LEADOUT, Self::frame(CDROM_LEADOUT, false, lead_out));

        Self {
            header: TocHeader {
                first_track: 1,
                last_track: tracks.len() as u8,
            },
            entries,
            fail_header: false,
            fail_entry: None,
            requests: Rc::new(RefCell::new(Vec::new())),
            dropped: Rc::new(Cell::new(false)),
        }
    }

    pub fn frame(track: u8, is_data: bool, start: Msf) -> TocEntryFrame {
        TocEntryFrame {
            track,
            adr_ctrl: if is_data { 0x41 } else { 0x01 },
            format: CDROM_MSF,
            alignment: 0,
            addr: start.to_addr(),
            datamode: 0,
            tail_padding: [0; 3],
        }
    }
}

impl CdromDevice for ScriptedDevice {
    fn control(&mut self, request: ControlRequest, payload: &mut [u8]) -> std::io::Result<()> {
        match request {
            ControlRequest::ReadTocHeader => {
                assert_eq!(payload, &[0, 0]);
                self.requests.borrow_mut().push((request, 0));
                if self.fail_header {
                    return Err(std::io::Error::from_raw_os_error(libc::ENOMEDIUM));
                }
                payload.copy_from_slice(&self.header.encode().unwrap());
            }
            ControlRequest::ReadTocEntry => {
                let asked = TocEntryFrame::decode(payload).unwrap();
                assert_eq!(asked.format, CDROM_MSF);
                self.requests.borrow_mut().push((request, asked.track));
                if self.fail_entry == Some(asked.track) {
                    return Err(std::io::Error::from_raw_os_error(libc::EIO));
                }
                let answer = self
                    .entries
                    .get(&asked.track)
                    .ok_or_else(|| std::io::Error::from_raw_os_error(libc::EINVAL))?;
                payload.copy_from_slice(&answer.encode().unwrap());
            }
        }

        Ok(())
    }
}

impl Drop for ScriptedDevice {
    fn drop(&mut self) {
        self.dropped.set(true);
    }
}
