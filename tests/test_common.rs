// Shared bits for the integration tests.
#![allow(dead_code)]
#![allow(clippy::unwrap_used)]

use std::path::{Path, PathBuf};

use log::{debug, info};
use rand::RngCore;
use tempfile::{tempdir, TempDir};

//
// Helper functions
//

// Temporary directories for images
pub fn get_actually_temp_dir() -> TempDir {
    info!("Getting a non-persistent temp dir for testing...");
    let dir = tempdir().unwrap();
    debug!("Created a temp directory at {}", dir.path().to_string_lossy());
    dir
}

/// A 512 byte FAT16 boot record with the given BIOS geometry.
pub fn fat16_boot_sector(heads: u16, sectors_per_track: u16) -> [u8; 512] {
    let mut sector = [0u8; 512];
    sector[0..3].copy_from_slice(&[0xEB, 0x3C, 0x90]);
    sector[3..11].copy_from_slice(b"NEC 5.00");
    sector[11..13].copy_from_slice(&512u16.to_le_bytes());
    sector[24..26].copy_from_slice(&sectors_per_track.to_le_bytes());
    sector[26..28].copy_from_slice(&heads.to_le_bytes());
    sector[54..62].copy_from_slice(b"FAT16   ");
    sector[510] = 0x55;
    sector[511] = 0xAA;
    sector
}

/// Write an image of `total_sectors` random sectors with a FAT16 boot record
/// at `boot_at`, and hand back its path and contents.
pub fn write_fat16_image(
    dir: &Path,
    name: &str,
    boot_at: usize,
    heads: u16,
    sectors_per_track: u16,
    total_sectors: usize,
) -> (PathBuf, Vec<u8>) {
    let mut image = vec![0u8; 512 * total_sectors];
    rand::rng().fill_bytes(&mut image);
    // Random bytes must not spell out a filesystem type before the real one.
    for sector in image.chunks_mut(512) {
        sector[54] = 0;
        sector[82] = 0;
    }
    image[boot_at * 512..(boot_at + 1) * 512].copy_from_slice(&fat16_boot_sector(heads, sectors_per_track));
    let path = dir.join(name);
    std::fs::write(&path, &image).unwrap();
    (path, image)
}
