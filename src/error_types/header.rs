// Errors for header conversions.
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
/// Reasons a run of bytes could not be turned back into a header.
pub enum HeaderError {
    #[error("Expected {expected} bytes of header, got {found}.")]
    Truncated { expected: usize, found: usize },
    #[error("The header is completely blank.")]
    Blank,
    #[error("Format tag was missing, this is not an NHD header.")]
    Invalid,
    #[error("Header claims to be {0} bytes long, which is not the size of an NHD header.")]
    WrongSize(u32),
}
