// Errors from hunting for a boot sector.
use std::io::ErrorKind;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
/// Automatic geometry discovery failed.
///
/// None of these leave the header half-populated, the geometry is only
/// stored once every check has passed.
pub enum ScanError {
    #[error("Source image cannot be opened: {0}")]
    SourceUnreadable(ErrorKind),
    #[error("Reading the source image failed part way through: {0}")]
    SourceReadFault(ErrorKind),
    #[error("Partition boot block was not found.")]
    BootSectorNotFound,
    #[error("Boot block reports {heads} heads and {sectors_per_track} sectors per track, cannot derive cylinders.")]
    InvalidGeometry { heads: u16, sectors_per_track: u16 },
    #[error("Image would need {0} cylinders, which does not fit in the header.")]
    TooManyCylinders(u64),
    #[error("Sector length {0} is too short to hold a boot record.")]
    InvalidSectorLength(usize),
}
