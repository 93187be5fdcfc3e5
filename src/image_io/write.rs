// Header, and nothing else.

// Imports

use std::fs::File;
use std::io::Write;
use std::path::Path;

use log::{error, info};

use crate::error_types::image_io::ImageIOError;
use crate::header::header_struct::NhdHeader;

// Implementations

/// Write just the header to `destination`, truncating whatever was there.
pub fn write_header(header: &NhdHeader, destination: &Path) -> Result<(), ImageIOError> {
    info!("Writing...");
    let mut file = File::create(destination).map_err(|error| {
        error!(
            "Failed to open the file '{}'. Inputs were discarded. ({error})",
            destination.display()
        );
        ImageIOError::DestinationUnwritable(error.kind())
    })?;

    write_header_into(header, &mut file)?;
    info!("Done.");
    Ok(())
}

/// Write just the header into any stream.
pub fn write_header_into<W: Write>(header: &NhdHeader, destination: &mut W) -> Result<(), ImageIOError> {
    destination
        .write_all(&header.to_bytes())
        .and_then(|()| destination.flush())
        .map_err(|error| {
            error!("Header writing error: {error}");
            ImageIOError::HeaderWriteFault(error.kind())
        })
}
