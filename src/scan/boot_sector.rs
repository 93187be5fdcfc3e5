// Just enough of a FAT boot record to recognize one.

// Imports
use crate::header::header_methods::read_array;
use crate::header::wire::WireU16;

// Offsets into the boot record. FAT12 and FAT16 share a layout, FAT32 pushes
// the filesystem type string further back to make room for its extended BPB.
const OEM_NAME_OFFSET: usize = 3;
const BIOS_SECTORS_OFFSET: usize = 24;
const BIOS_HEADS_OFFSET: usize = 26;
const FAT16_FILESYSTEM_OFFSET: usize = 54;
const FAT32_FILESYSTEM_OFFSET: usize = 82;

/// Shortest run of bytes we are willing to treat as a boot record.
pub const BOOT_RECORD_LENGTH: usize = 512;

/// Which flavour of FAT a boot record claims to be.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FatKind {
    Fat12,
    Fat16,
    Fat32,
}

impl FatKind {
    /// The filesystem type string, space padded to 8 bytes.
    pub const fn signature(self) -> &'static [u8; 8] {
        match self {
            FatKind::Fat12 => b"FAT12   ",
            FatKind::Fat16 => b"FAT16   ",
            FatKind::Fat32 => b"FAT32   ",
        }
    }
}

/// A read-only look at one sector, as if it were a FAT boot record.
#[derive(Debug, Clone, Copy)]
pub struct BootSectorView<'a> {
    sector: &'a [u8],
}

impl<'a> BootSectorView<'a> {
    /// None if the sector is too short to be a boot record.
    pub fn new(sector: &'a [u8]) -> Option<Self> {
        if sector.len() < BOOT_RECORD_LENGTH {
            return None;
        }
        Some(Self { sector })
    }

    /// Check the filesystem type strings. FAT16 and FAT12 are checked in the
    /// short BPB layout, FAT32 in the extended one. First hit wins.
    ///
    /// These are byte strings, byte order doesn't matter here.
    pub fn detect(&self) -> Option<FatKind> {
        let short = self.fat16_filesystem();
        if short == FatKind::Fat16.signature() {
            return Some(FatKind::Fat16);
        }
        if short == FatKind::Fat12.signature() {
            return Some(FatKind::Fat12);
        }
        if self.fat32_filesystem() == FatKind::Fat32.signature() {
            return Some(FatKind::Fat32);
        }
        None
    }

    pub fn oem_name(&self) -> &'a [u8] {
        &self.sector[OEM_NAME_OFFSET..OEM_NAME_OFFSET + 8]
    }
    /// Heads as the BIOS sees them. Wire order, straight off the disk.
    pub fn bios_heads(&self) -> WireU16 {
        WireU16::from_le_bytes(read_array(self.sector, BIOS_HEADS_OFFSET))
    }
    /// Sectors per track as the BIOS sees them. Wire order, straight off the disk.
    pub fn bios_sectors(&self) -> WireU16 {
        WireU16::from_le_bytes(read_array(self.sector, BIOS_SECTORS_OFFSET))
    }

    fn fat16_filesystem(&self) -> &'a [u8] {
        &self.sector[FAT16_FILESYSTEM_OFFSET..FAT16_FILESYSTEM_OFFSET + 8]
    }
    fn fat32_filesystem(&self) -> &'a [u8] {
        &self.sector[FAT32_FILESYSTEM_OFFSET..FAT32_FILESYSTEM_OFFSET + 8]
    }
}
