// This is where the fun begins

use std::path::PathBuf;

use crate::config::MERGE_BUFFER_SIZE;
use crate::error_types::generator::GeneratorError;
use crate::header::geometry::Geometry;

/// Where the geometry comes from.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PopulateMode {
    /// Ask for it.
    Manual,
    /// Find a FAT boot sector in the source image and work it out.
    Auto,
}

/// What gets written to the destination.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum OutputMode {
    /// Just the 512 byte header.
    HeaderOnly,
    /// The header, then the whole source image.
    Merge,
}

/// Everything needed for one run.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct GeneratorOptions {
    pub(super) populate: PopulateMode,
    pub(super) output: OutputMode,
    /// Required for automatic discovery and for merging.
    pub(super) source: Option<PathBuf>,
    pub(super) destination: PathBuf,
    /// Merge transfer buffer size.
    pub(super) buffer_size: usize,
    /// Write to a temp file next to the destination and rename it over at the end.
    pub(super) atomic: bool,
    /// Dump the finished header as hex before writing it.
    pub(super) show_header: bool,
}

impl GeneratorOptions {
    /// Fails if the chosen modes need a source and none was given.
    pub fn new(
        populate: PopulateMode,
        output: OutputMode,
        source: Option<PathBuf>,
        destination: PathBuf,
    ) -> Result<Self, GeneratorError> {
        let needs_source = populate == PopulateMode::Auto || output == OutputMode::Merge;
        if needs_source && source.is_none() {
            return Err(GeneratorError::MissingSource);
        }
        Ok(Self {
            populate,
            output,
            source,
            destination,
            buffer_size: MERGE_BUFFER_SIZE,
            atomic: false,
            show_header: false,
        })
    }
    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }
    pub fn with_atomic(mut self, atomic: bool) -> Self {
        self.atomic = atomic;
        self
    }
    pub fn with_show_header(mut self, show_header: bool) -> Self {
        self.show_header = show_header;
        self
    }
}

/// How a run went.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct GenerationReport {
    /// Geometry as stored in the header, host order.
    pub geometry: Geometry,
    /// Size of the destination file.
    pub bytes_written: u64,
}
