// Knobs and magic numbers.

/// Format tag stamped into every header. "T98HDDIMAGE.R0" plus its terminating NUL.
pub const NHD_FILE_ID: &[u8; 15] = b"T98HDDIMAGE.R0\0";

/// Size of the header record on disk. Also the value of its `header_size` field.
pub const HEADER_SIZE: usize = 512;

/// Sector length used when scanning for a boot sector, and the sector length
/// recorded by automatic discovery.
pub const SECTOR_LENGTH: usize = 512;

/// How much of the source image is held in memory at once while merging.
pub const MERGE_BUFFER_SIZE: usize = 1024 * 1024 * 32;

/// Log scan progress every this many sectors.
pub const SCAN_PROGRESS_INTERVAL: u64 = 100;

/// Longest comment we store. The field is one byte longer so it always ends in a NUL.
pub const COMMENT_MAX_LENGTH: usize = 255;
