// So no head?

// Imports

use log::debug;

use crate::config::{HEADER_SIZE, NHD_FILE_ID};
use crate::error_types::header::HeaderError;
use crate::header::geometry::Geometry;
use crate::header::header_struct::{
    COMMENT_CAPACITY, COMMENT_OFFSET, CYLINDERS_OFFSET, HEADER_SIZE_OFFSET, HEADS_OFFSET,
    SECTORS_OFFSET, SECTOR_LENGTH_OFFSET, SIGNATURE_OFFSET,
};
use crate::header::wire::{WireU16, WireU32};

use super::header_struct::NhdHeader;

// Implementations

impl NhdHeader {
    /// A fresh header with the format tag, the size field and the comment filled in.
    /// Geometry is all zeroes until a populate step runs.
    ///
    /// The comment is raw bytes, any encoding goes (Shift-JIS is common).
    /// Comments longer than 255 bytes are cut short.
    pub fn new<C: AsRef<[u8]>>(comment: C) -> Self {
        new_header(comment.as_ref())
    }
    /// Encode into the exact bytes that go on disk.
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        header_to_bytes(self)
    }
    /// Try and decode a header from the front of an image.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, HeaderError> {
        header_from_bytes(bytes)
    }

    /// The comment, up to the first NUL.
    pub fn comment(&self) -> &[u8] {
        let end = self
            .comment
            .iter()
            .position(|byte| *byte == 0)
            .unwrap_or(COMMENT_CAPACITY);
        &self.comment[..end]
    }
    pub fn signature(&self) -> &[u8; 15] {
        &self.signature
    }
    /// The stored size field, in host order.
    pub fn header_size(&self) -> u32 {
        self.header_size.to_host()
    }

    // Raw wire accessors. The scanner hands us numbers that are already in
    // wire order, these let them go straight in.

    pub fn heads(&self) -> WireU16 {
        self.heads
    }
    pub fn sectors_per_track(&self) -> WireU16 {
        self.sectors_per_track
    }
    pub fn bytes_per_sector(&self) -> WireU16 {
        self.bytes_per_sector
    }
    pub fn cylinders(&self) -> WireU32 {
        self.cylinders
    }
    pub fn set_heads(&mut self, heads: WireU16) {
        self.heads = heads;
    }
    pub fn set_sectors_per_track(&mut self, sectors: WireU16) {
        self.sectors_per_track = sectors;
    }
    pub fn set_bytes_per_sector(&mut self, length: WireU16) {
        self.bytes_per_sector = length;
    }
    pub fn set_cylinders(&mut self, cylinders: WireU32) {
        self.cylinders = cylinders;
    }

    /// Geometry in host order.
    pub fn geometry(&self) -> Geometry {
        Geometry {
            heads: self.heads.to_host(),
            sectors_per_track: self.sectors_per_track.to_host(),
            bytes_per_sector: self.bytes_per_sector.to_host(),
            cylinders: self.cylinders.to_host(),
        }
    }
    /// Store a host order geometry.
    pub fn set_geometry(&mut self, geometry: Geometry) {
        self.heads = WireU16::from_host(geometry.heads);
        self.sectors_per_track = WireU16::from_host(geometry.sectors_per_track);
        self.bytes_per_sector = WireU16::from_host(geometry.bytes_per_sector);
        self.cylinders = WireU32::from_host(geometry.cylinders);
    }
}

fn new_header(comment: &[u8]) -> NhdHeader {
    // Comments are capped so there is always at least one NUL on the end.
    let kept = comment.len().min(COMMENT_CAPACITY - 1);
    if kept < comment.len() {
        debug!("Comment is {} bytes long, keeping the first {kept}.", comment.len());
    }
    let mut comment_field = [0u8; COMMENT_CAPACITY];
    comment_field[..kept].copy_from_slice(&comment[..kept]);

    NhdHeader {
        signature: *NHD_FILE_ID,
        comment: comment_field,
        // 512 always fits.
        header_size: WireU32::from_host(HEADER_SIZE as u32),
        cylinders: WireU32::default(),
        heads: WireU16::default(),
        sectors_per_track: WireU16::default(),
        bytes_per_sector: WireU16::default(),
    }
}

fn header_to_bytes(header: &NhdHeader) -> [u8; HEADER_SIZE] {
    // Deconstruct / discombobulate
    #[deny(unused_variables)] // You need to write ALL of them.
    let NhdHeader {
        signature,
        comment,
        header_size,
        cylinders,
        heads,
        sectors_per_track,
        bytes_per_sector,
    } = header;

    // Reserved ranges stay zeroed.
    let mut buffer: [u8; HEADER_SIZE] = [0u8; HEADER_SIZE];

    buffer[SIGNATURE_OFFSET..SIGNATURE_OFFSET + 15].copy_from_slice(signature);
    buffer[COMMENT_OFFSET..COMMENT_OFFSET + COMMENT_CAPACITY].copy_from_slice(comment);

    // Already wire ordered, no swapping here.
    buffer[HEADER_SIZE_OFFSET..HEADER_SIZE_OFFSET + 4].copy_from_slice(&header_size.to_le_bytes());
    buffer[CYLINDERS_OFFSET..CYLINDERS_OFFSET + 4].copy_from_slice(&cylinders.to_le_bytes());
    buffer[HEADS_OFFSET..HEADS_OFFSET + 2].copy_from_slice(&heads.to_le_bytes());
    buffer[SECTORS_OFFSET..SECTORS_OFFSET + 2].copy_from_slice(&sectors_per_track.to_le_bytes());
    buffer[SECTOR_LENGTH_OFFSET..SECTOR_LENGTH_OFFSET + 2]
        .copy_from_slice(&bytes_per_sector.to_le_bytes());

    buffer
}

fn header_from_bytes(bytes: &[u8]) -> Result<NhdHeader, HeaderError> {
    if bytes.len() < HEADER_SIZE {
        return Err(HeaderError::Truncated {
            expected: HEADER_SIZE,
            found: bytes.len(),
        });
    }
    let bytes = &bytes[..HEADER_SIZE];

    if bytes[SIGNATURE_OFFSET..SIGNATURE_OFFSET + 15] != NHD_FILE_ID[..] {
        // No tag. Might just be an empty file.
        if bytes.iter().all(|byte| *byte == 0) {
            return Err(HeaderError::Blank);
        }
        return Err(HeaderError::Invalid);
    }

    let header_size = WireU32::from_le_bytes(read_array(bytes, HEADER_SIZE_OFFSET));
    if header_size.to_host() as usize != HEADER_SIZE {
        return Err(HeaderError::WrongSize(header_size.to_host()));
    }

    Ok(NhdHeader {
        signature: *NHD_FILE_ID,
        comment: read_array(bytes, COMMENT_OFFSET),
        header_size,
        cylinders: WireU32::from_le_bytes(read_array(bytes, CYLINDERS_OFFSET)),
        heads: WireU16::from_le_bytes(read_array(bytes, HEADS_OFFSET)),
        sectors_per_track: WireU16::from_le_bytes(read_array(bytes, SECTORS_OFFSET)),
        bytes_per_sector: WireU16::from_le_bytes(read_array(bytes, SECTOR_LENGTH_OFFSET)),
    })
}

/// Copy a fixed-size run out of a slice that is already known to be long enough.
pub(crate) fn read_array<const N: usize>(bytes: &[u8], offset: usize) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(&bytes[offset..offset + N]);
    out
}
