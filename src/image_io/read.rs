// Reading!

use std::io::{ErrorKind, Read};

/// Read until `buffer` is full or the reader runs dry.
///
/// Returns how many bytes landed in the buffer. Anything less than the full
/// buffer means end of file was reached. Interrupted reads are re-issued, every
/// other error is handed straight back.
pub(crate) fn read_chunk<R: Read>(reader: &mut R, buffer: &mut [u8]) -> std::io::Result<usize> {
    let mut filled: usize = 0;
    while filled < buffer.len() {
        match reader.read(&mut buffer[filled..]) {
            Ok(0) => break,
            Ok(read) => filled += read,
            Err(error) if error.kind() == ErrorKind::Interrupted => continue,
            Err(error) => return Err(error),
        }
    }
    Ok(filled)
}
