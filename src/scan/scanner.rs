// Where's the boot sector?

// Imports

use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;

use log::{debug, info, warn};

use crate::config::{SCAN_PROGRESS_INTERVAL, SECTOR_LENGTH};
use crate::error_types::scan::ScanError;
use crate::header::geometry::Geometry;
use crate::header::header_struct::NhdHeader;
use crate::header::wire::{WireU16, WireU32};
use crate::image_io::read::read_chunk;
use crate::image_io::size::stream_size;
use crate::scan::boot_sector::{BootSectorView, FatKind, BOOT_RECORD_LENGTH};

// Structs, Enums, Flags

/// Knobs for scanning.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct ScanOptions {
    /// How many bytes are read and tested at a time. This is also the sector
    /// length written into the header, the boot record's own idea of sector
    /// length is not consulted.
    pub sector_length: usize,
    /// Log progress every this many sectors. Zero turns progress off.
    pub progress_interval: u64,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            sector_length: SECTOR_LENGTH,
            progress_interval: SCAN_PROGRESS_INTERVAL,
        }
    }
}

/// A sector that looked like a FAT boot record.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct BootSectorMatch {
    pub kind: FatKind,
    /// Which sector it was, counting from where the scan started.
    pub sector_index: u64,
    /// Where the sector starts, in bytes from the start of the stream.
    pub offset: u64,
    /// Wire order, as found on disk.
    pub heads: WireU16,
    /// Wire order, as found on disk.
    pub sectors_per_track: WireU16,
}

// Implementations

/// Fill in the header's geometry from the first FAT boot record in `source`.
///
/// On any failure the header's geometry is left exactly as it was.
pub fn auto_header(source: &Path, header: &mut NhdHeader) -> Result<Geometry, ScanError> {
    auto_header_with(source, header, ScanOptions::default())
}

/// [`auto_header`] with custom options.
pub fn auto_header_with(
    source: &Path,
    header: &mut NhdHeader,
    options: ScanOptions,
) -> Result<Geometry, ScanError> {
    let mut file = File::open(source).map_err(|error| {
        warn!("Source file '{}' cannot be opened: {error}", source.display());
        ScanError::SourceUnreadable(error.kind())
    })?;
    auto_header_from(&mut file, header, options)
}

/// [`auto_header`] on any seekable stream. Scanning starts at the current
/// position, cylinders are worked out from the full length of the stream.
pub fn auto_header_from<R: Read + Seek>(
    source: &mut R,
    header: &mut NhdHeader,
    options: ScanOptions,
) -> Result<Geometry, ScanError> {
    let sector_length = check_sector_length(options.sector_length)?;

    let Some(found) = scan_sectors(source, options)? else {
        warn!("Partition boot block was not found.");
        return Err(ScanError::BootSectorNotFound);
    };
    info!(
        "Partition boot block ({:?}) found at offset {}.",
        found.kind, found.offset
    );

    let file_size = stream_size(source).map_err(|error| ScanError::SourceReadFault(error.kind()))?;

    // Math happens in host order.
    let heads = found.heads.to_host();
    let sectors_per_track = found.sectors_per_track.to_host();
    let cylinder_size =
        u64::from(heads) * u64::from(sectors_per_track) * u64::from(sector_length.to_host());
    if cylinder_size == 0 {
        warn!("Boot block has {heads} heads and {sectors_per_track} sectors per track, giving up.");
        return Err(ScanError::InvalidGeometry {
            heads,
            sectors_per_track,
        });
    }
    let cylinders = file_size / cylinder_size;
    let cylinders = u32::try_from(cylinders).map_err(|_| ScanError::TooManyCylinders(cylinders))?;

    // Everything checked out, now the header changes.
    // Heads and sectors came off the disk in wire order already.
    header.set_heads(found.heads);
    header.set_sectors_per_track(found.sectors_per_track);
    header.set_bytes_per_sector(sector_length);
    header.set_cylinders(WireU32::from_host(cylinders));

    let geometry = header.geometry();
    info!(
        "Disk parameters are... Heads: {} Sectors: {} Cylinders: {} Sector length: {}",
        geometry.heads, geometry.sectors_per_track, geometry.cylinders, geometry.bytes_per_sector
    );
    Ok(geometry)
}

/// Walk `source` one sector at a time until something looks like a FAT boot record.
///
/// A short read at the end of the stream is never tested. Returns `None` if
/// the end is reached without a match.
pub fn find_boot_sector<R: Read + Seek>(
    source: &mut R,
    options: ScanOptions,
) -> Result<Option<BootSectorMatch>, ScanError> {
    let _ = check_sector_length(options.sector_length)?;
    scan_sectors(source, options)
}

// Sector length must already be checked.
fn scan_sectors<R: Read + Seek>(
    source: &mut R,
    options: ScanOptions,
) -> Result<Option<BootSectorMatch>, ScanError> {
    let start = source
        .stream_position()
        .map_err(|error| ScanError::SourceReadFault(error.kind()))?;
    let mut sector: Vec<u8> = vec![0u8; options.sector_length];

    for sector_index in 0u64.. {
        if options.progress_interval != 0 && sector_index % options.progress_interval == 0 {
            info!("{} bytes were scanned.", sector_index * options.sector_length as u64);
        }

        let read = read_chunk(source, &mut sector).map_err(|error| {
            warn!("Reading sector {sector_index} failed: {error}");
            ScanError::SourceReadFault(error.kind())
        })?;
        if read < options.sector_length {
            // Out of full sectors.
            debug!("Scan hit the end after {sector_index} sectors, {read} bytes left over.");
            return Ok(None);
        }

        // Length was checked by the caller, this always succeeds.
        let Some(view) = BootSectorView::new(&sector) else {
            return Ok(None);
        };
        if let Some(kind) = view.detect() {
            debug!(
                "Sector {sector_index} OEM name: {}",
                String::from_utf8_lossy(view.oem_name())
            );
            return Ok(Some(BootSectorMatch {
                kind,
                sector_index,
                offset: start + sector_index * options.sector_length as u64,
                heads: view.bios_heads(),
                sectors_per_track: view.bios_sectors(),
            }));
        }
    }

    // 2^64 sectors, sure.
    Ok(None)
}

fn check_sector_length(sector_length: usize) -> Result<WireU16, ScanError> {
    if sector_length < BOOT_RECORD_LENGTH {
        return Err(ScanError::InvalidSectorLength(sector_length));
    }
    u16::try_from(sector_length)
        .map(WireU16::from_host)
        .map_err(|_| ScanError::InvalidSectorLength(sector_length))
}
