// The NHD header, as seen by T98-Next and friends.

// Imports
use crate::config::COMMENT_MAX_LENGTH;
use crate::header::wire::{WireU16, WireU32};

// Layout
//
// | Offset | Size | Field             |
// |--------|------|-------------------|
// | 0      | 15   | signature         |
// | 15     | 1    | reserved          |
// | 16     | 256  | comment           |
// | 272    | 4    | header_size       |
// | 276    | 4    | cylinders         |
// | 280    | 2    | heads             |
// | 282    | 2    | sectors_per_track |
// | 284    | 2    | bytes_per_sector  |
// | 286    | 226  | reserved          |

pub(crate) const SIGNATURE_OFFSET: usize = 0;
pub(crate) const COMMENT_OFFSET: usize = 16;
pub(crate) const HEADER_SIZE_OFFSET: usize = 272;
pub(crate) const CYLINDERS_OFFSET: usize = 276;
pub(crate) const HEADS_OFFSET: usize = 280;
pub(crate) const SECTORS_OFFSET: usize = 282;
pub(crate) const SECTOR_LENGTH_OFFSET: usize = 284;

/// Room for the comment, including the NUL that always ends it.
pub(crate) const COMMENT_CAPACITY: usize = COMMENT_MAX_LENGTH + 1;

// Structs, Enums, Flags

/// The descriptor that goes in front of a raw disk image.
///
/// Numbers are held in wire order. Reserved ranges are not stored, they are
/// always written as zeroes.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct NhdHeader {
    /// Always [`crate::config::NHD_FILE_ID`].
    pub(crate) signature: [u8; 15],
    /// Free text, NUL padded.
    pub(crate) comment: [u8; COMMENT_CAPACITY],
    /// Always [`crate::config::HEADER_SIZE`].
    pub(crate) header_size: WireU32,
    pub(crate) cylinders: WireU32,
    pub(crate) heads: WireU16,
    pub(crate) sectors_per_track: WireU16,
    /// Sector length in bytes.
    pub(crate) bytes_per_sector: WireU16,
}
