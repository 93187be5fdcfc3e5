// Disk geometry in host order, for doing math on.

/// Heads, sectors, sector length and cylinders of a disk image.
///
/// Unlike the header, these are plain host order numbers.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct Geometry {
    pub heads: u16,
    pub sectors_per_track: u16,
    pub bytes_per_sector: u16,
    pub cylinders: u32,
}

impl Geometry {
    /// Size in bytes of the image this geometry describes.
    ///
    /// This is 32 bit math and wraps silently. Anything past 4 GiB comes out
    /// modulo 2^32, which is what ends up in front of the user.
    pub fn total_size(&self) -> u32 {
        u32::from(self.heads)
            .wrapping_mul(u32::from(self.sectors_per_track))
            .wrapping_mul(u32::from(self.bytes_per_sector))
            .wrapping_mul(self.cylinders)
    }

    /// Bytes per cylinder, in full width. Zero if any factor is zero.
    pub fn cylinder_size(&self) -> u64 {
        u64::from(self.heads) * u64::from(self.sectors_per_track) * u64::from(self.bytes_per_sector)
    }
}
