// Errors from writing headers and merging images.
use std::io::ErrorKind;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
/// Something went wrong while producing the output file.
///
/// Output is not cleaned up on failure. A destination may be left empty, holding
/// a partial header, or holding the header and part of the payload.
pub enum ImageIOError {
    #[error("Source image cannot be opened: {0}")]
    SourceUnreadable(ErrorKind),
    #[error("Destination file cannot be opened for writing: {0}")]
    DestinationUnwritable(ErrorKind),
    #[error("Header writing error: {0}")]
    HeaderWriteFault(ErrorKind),
    #[error("Data reading error: {0}")]
    PayloadReadFault(ErrorKind),
    #[error("Data writing error: {0}")]
    PayloadWriteFault(ErrorKind),
    #[error("Failed to allocate a {0} byte transfer buffer.")]
    AllocationFault(usize),
    #[error("Transfer buffer size must be greater than zero.")]
    InvalidBufferSize,
    #[error("Finished output could not be moved over the destination: {0}")]
    PersistFault(ErrorKind),
}
