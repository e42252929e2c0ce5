pub mod cd;

pub use cd::assembler::{Track, assemble_tracks};
pub use cd::device::{CdromDevice, CdromHandle, ControlRequest};
pub use cd::error::{CdTocError, CdTocResult};
pub use cd::locator::{CddaLocator, LocatorError};
pub use cd::models::{Msf, RawTocEntry};
pub use cd::toc::{read_entry, read_header, read_toc, read_toc_from};
pub use cd::{read_cd_index, read_cd_index_from};
