// How big is it?

use std::io::{Seek, SeekFrom};

/// Total length of a seekable stream.
///
/// Seeks to the end to find out, then puts the position back where it was, so
/// this is safe to call in the middle of reading.
pub fn stream_size<S: Seek>(stream: &mut S) -> std::io::Result<u64> {
    let current = stream.stream_position()?;
    let last = stream.seek(SeekFrom::End(0))?;
    let _ = stream.seek(SeekFrom::Start(current))?;
    Ok(last)
}
