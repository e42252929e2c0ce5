use crate::cd::locator::CddaLocator;
use crate::cd::models::RawTocEntry;
use log::warn;
use serde::Serialize;
use std::path::Path;

/// One playable audio track.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Track {
    pub locator: CddaLocator,
    pub display_title: String,

    /// Position on the disc, counting data tracks
    pub track_number: u8,

    /// Not clamped, a damaged TOC can make this zero or negative
    pub duration_seconds: f64,
}

/// Turns raw TOC entries into audio tracks.
///
/// The last entry must be the lead-out. Data tracks are skipped but still
/// count towards the numbering of the tracks after them.
pub fn assemble_tracks(entries: &[RawTocEntry], device_path: impl AsRef<Path>) -> Vec<Track> {
    let device_path = device_path.as_ref();
    let real_track_count = entries.len().saturating_sub(1);

    let mut tracks = Vec::with_capacity(real_track_count);
    for (position, pair) in entries.windows(2).enumerate() {
        let (current, next) = (&pair[0], &pair[1]);
        if current.is_data_track {
            continue;
        }

        let Ok(track_number) = u8::try_from(position + 1) else {
            warn!(
                "TOC has {} entries before the lead-out, ignoring everything after track 255",
                real_track_count
            );
            break;
        };
        if current.track_number != track_number {
            warn!(
                "Unexpected index found. TOC entry {} claims to be track number {}",
                position, current.track_number
            );
        }

        let duration_seconds = current.position.delta_seconds(&next.position);
        if duration_seconds <= 0.0 {
            warn!(
                "Track {} has a non-positive length of {}s ({} to {})",
                track_number, duration_seconds, current.position, next.position
            );
        }

        tracks.push(Track {
            locator: CddaLocator::new(track_number, device_path),
            display_title: format!("Track {track_number}"),
            track_number,
            duration_seconds,
        });
    }

    tracks
}
