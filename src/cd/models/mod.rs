use crate::cd::{CD_FRAMES, CDROM_DATA_TRACK, CDROM_LEADOUT, CDROM_MSF};
use binrw::{BinRead, BinResult, BinWrite, Endian};
use std::io::Cursor;

/// `struct cdrom_tochdr`: the inclusive range of track indices on the disc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, BinRead, BinWrite)]
pub struct TocHeader {
    /// Lowest track index, normally 1
    pub first_track: u8,

    /// Highest track index
    pub last_track: u8,
}

impl TocHeader {
    pub const SIZE: usize = 2;

    pub fn decode(buf: &[u8]) -> BinResult<Self> {
        Self::read_options(&mut Cursor::new(buf), Endian::NATIVE, ())
    }

    pub fn encode(&self) -> BinResult<[u8; Self::SIZE]> {
        let mut buf = [0u8; Self::SIZE];
        self.write_options(&mut Cursor::new(&mut buf[..]), Endian::NATIVE, ())?;
        Ok(buf)
    }
}

/// `struct cdrom_tocentry` as the kernel lays it out, padding included.
///
/// The same frame is sent as the request and filled in by the driver.
/// Multi-byte fields use host byte order since the kernel copies the struct
/// verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, BinRead, BinWrite)]
pub struct TocEntryFrame {
    /// Requested index on the way in, reported track number on the way out
    pub track: u8,

    /// Low nibble `adr`, high nibble `ctrl`
    pub adr_ctrl: u8,

    /// Addressing mode, `CDROM_MSF` or `CDROM_LBA`
    pub format: u8,

    /// Aligns `addr` to four bytes
    pub alignment: u8,

    /// Either an LBA or, in MSF mode, minute/second/frame in its first three bytes
    pub addr: i32,

    pub datamode: u8,

    /// Pads the struct to a multiple of four bytes
    pub tail_padding: [u8; 3],
}

impl TocEntryFrame {
    pub const SIZE: usize = 12;

    pub fn msf_request(index: u8) -> Self {
        Self {
            track: index,
            adr_ctrl: 0,
            format: CDROM_MSF,
            alignment: 0,
            addr: 0,
            datamode: 0,
            tail_padding: [0; 3],
        }
    }

    pub fn decode(buf: &[u8]) -> BinResult<Self> {
        Self::read_options(&mut Cursor::new(buf), Endian::NATIVE, ())
    }

    pub fn encode(&self) -> BinResult<[u8; Self::SIZE]> {
        let mut buf = [0u8; Self::SIZE];
        self.write_options(&mut Cursor::new(&mut buf[..]), Endian::NATIVE, ())?;
        Ok(buf)
    }

    pub fn ctrl(&self) -> u8 {
        (self.adr_ctrl & 0xF0) >> 4
    }

    pub fn is_data_track(&self) -> bool {
        self.ctrl() & CDROM_DATA_TRACK != 0
    }

    /// Reads `union cdrom_addr` as `struct cdrom_msf0`.
    pub fn msf(&self) -> Msf {
        let [minute, second, frame, _] = self.addr.to_ne_bytes();
        Msf {
            minute,
            second,
            frame,
        }
    }
}

/// Minute:Second:Frame position from the start of the disc, 75 frames per second.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Msf {
    pub minute: u8,
    pub second: u8,
    pub frame: u8,
}

impl Msf {
    pub fn new(minute: u8, second: u8, frame: u8) -> Self {
        Self {
            minute,
            second,
            frame,
        }
    }

    /// Seconds between `self` and `next`, negative when `next` comes first.
    pub fn delta_seconds(&self, next: &Msf) -> f64 {
        let minutes = next.minute as i32 - self.minute as i32;
        let seconds = next.second as i32 - self.second as i32;
        let frames = next.frame as i32 - self.frame as i32;
        (minutes * 60 + seconds) as f64 + frames as f64 / CD_FRAMES as f64
    }

    pub fn to_addr(&self) -> i32 {
        i32::from_ne_bytes([self.minute, self.second, self.frame, 0])
    }
}

impl std::fmt::Display for Msf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.minute, self.second, self.frame)
    }
}

/// One TOC slot as reported by the drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawTocEntry {
    /// Driver-assigned index, `CDROM_LEADOUT` for the lead-out
    pub track_number: u8,

    /// `true` for computer data, `false` for audio
    pub is_data_track: bool,

    /// Where this slot begins
    pub position: Msf,
}

impl RawTocEntry {
    pub fn is_lead_out(&self) -> bool {
        self.track_number == CDROM_LEADOUT
    }
}

impl From<TocEntryFrame> for RawTocEntry {
    fn from(frame: TocEntryFrame) -> Self {
        Self {
            track_number: frame.track,
            is_data_track: frame.is_data_track(),
            position: frame.msf(),
        }
    }
}
