// Header + image = NHD.

// Imports

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use log::{debug, error, info};

use crate::config::{HEADER_SIZE, MERGE_BUFFER_SIZE};
use crate::error_types::image_io::ImageIOError;
use crate::header::header_struct::NhdHeader;
use crate::image_io::read::read_chunk;

// Structs, Enums, Flags

/// Knobs for merging.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct MergeOptions {
    /// How many bytes of the source are held in memory at once. Peak memory use
    /// is this, no matter how big the source is.
    pub buffer_size: usize,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            buffer_size: MERGE_BUFFER_SIZE,
        }
    }
}

/// What a finished merge wrote.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct MergeReport {
    pub header_bytes: u64,
    pub payload_bytes: u64,
}

impl MergeReport {
    /// Size of the destination file.
    pub fn total_bytes(&self) -> u64 {
        self.header_bytes + self.payload_bytes
    }
}

// Implementations

/// Write `header` followed by the entire source image into `destination`.
///
/// Any existing destination is truncated. If the source cannot be opened, the
/// destination is not touched at all. On any later failure whatever was written
/// so far is left behind.
pub fn merge_header(
    header: &NhdHeader,
    source: &Path,
    destination: &Path,
) -> Result<MergeReport, ImageIOError> {
    merge_header_with(header, source, destination, MergeOptions::default())
}

/// [`merge_header`] with a custom transfer buffer size.
pub fn merge_header_with(
    header: &NhdHeader,
    source: &Path,
    destination: &Path,
    options: MergeOptions,
) -> Result<MergeReport, ImageIOError> {
    // Grab the buffer first, no point opening anything if we can't hold a chunk.
    let mut buffer = allocate_buffer(options.buffer_size)?;

    let mut source_file = File::open(source).map_err(|error| {
        error!("Source file '{}' cannot be opened: {error}", source.display());
        ImageIOError::SourceUnreadable(error.kind())
    })?;

    let mut destination_file = File::create(destination).map_err(|error| {
        error!("Failed to open the file '{}': {error}", destination.display());
        ImageIOError::DestinationUnwritable(error.kind())
    })?;

    stream_merge(header, &mut source_file, &mut destination_file, &mut buffer)
}

/// Merge between arbitrary streams, with a buffer of `options.buffer_size`.
pub fn merge_into<R: Read, W: Write>(
    header: &NhdHeader,
    source: &mut R,
    destination: &mut W,
    options: MergeOptions,
) -> Result<MergeReport, ImageIOError> {
    let mut buffer = allocate_buffer(options.buffer_size)?;
    stream_merge(header, source, destination, &mut buffer)
}

fn allocate_buffer(size: usize) -> Result<Vec<u8>, ImageIOError> {
    if size == 0 {
        return Err(ImageIOError::InvalidBufferSize);
    }
    let mut buffer: Vec<u8> = Vec::new();
    if buffer.try_reserve_exact(size).is_err() {
        error!("Failed to allocate memory.");
        return Err(ImageIOError::AllocationFault(size));
    }
    buffer.resize(size, 0);
    Ok(buffer)
}

fn stream_merge<R: Read, W: Write>(
    header: &NhdHeader,
    source: &mut R,
    destination: &mut W,
    buffer: &mut [u8],
) -> Result<MergeReport, ImageIOError> {
    // Header goes first, in full.
    if let Err(error) = destination.write_all(&header.to_bytes()) {
        error!("Header writing error: {error}");
        return Err(ImageIOError::HeaderWriteFault(error.kind()));
    }
    info!("Header write ok.");

    let mut done: u64 = 0;
    loop {
        debug!("Reading...");
        let size = match read_chunk(source, buffer) {
            Ok(size) => size,
            Err(error) => {
                error!("Data reading error: {error}");
                return Err(ImageIOError::PayloadReadFault(error.kind()));
            }
        };

        debug!("Writing {size} bytes...");
        if let Err(error) = destination
            .write_all(&buffer[..size])
            .and_then(|()| destination.flush())
        {
            error!("Data writing error: {error}");
            return Err(ImageIOError::PayloadWriteFault(error.kind()));
        }

        done += size as u64;
        info!("{done} bytes done.");

        // A short chunk means the source ran out.
        if size < buffer.len() {
            break;
        }
    }

    Ok(MergeReport {
        header_bytes: HEADER_SIZE as u64,
        payload_bytes: done,
    })
}
