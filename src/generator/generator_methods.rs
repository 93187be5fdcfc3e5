// Pick a way in, pick a way out.

// Imports

use std::fs::File;
use std::io::{BufRead, Write};
use std::path::Path;

use log::{debug, info};
use tempfile::{Builder, NamedTempFile};

use crate::config::HEADER_SIZE;
use crate::error_types::generator::GeneratorError;
use crate::error_types::image_io::ImageIOError;
use crate::error_types::prompt::PromptError;
use crate::header::header_struct::NhdHeader;
use crate::helpers::hex_view::hex_view;
use crate::image_io::merge::{merge_header_with, merge_into, MergeOptions};
use crate::image_io::write::{write_header, write_header_into};
use crate::prompt::comment::read_comment;
use crate::prompt::manual_header::manual_header;
use crate::scan::scanner::auto_header;

use super::generator_struct::{GenerationReport, GeneratorOptions, OutputMode, PopulateMode};

// Implementations

impl GeneratorOptions {
    /// Run the whole thing: comment, geometry, output.
    ///
    /// Prompts go to `output` and replies come from `input`. If the geometry
    /// can't be worked out the destination is never opened.
    pub fn generate<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        output: &mut W,
    ) -> Result<GenerationReport, GeneratorError> {
        generate(self, input, output)
    }
}

fn generate<R: BufRead, W: Write>(
    options: &GeneratorOptions,
    input: &mut R,
    output: &mut W,
) -> Result<GenerationReport, GeneratorError> {
    info!(
        "Mode: {}",
        match options.populate {
            PopulateMode::Manual => "manual",
            PopulateMode::Auto => "auto",
        }
    );
    info!("Merge: {}", if options.output == OutputMode::Merge { "yes" } else { "no" });
    info!(
        "Source file: {}",
        options
            .source
            .as_deref()
            .map_or_else(|| "(none)".to_string(), |path| path.display().to_string())
    );
    info!("Destination file: {}", options.destination.display());

    let comment = read_comment(input, output)?;
    let mut header = NhdHeader::new(&comment);

    // Fill in the geometry
    match options.populate {
        PopulateMode::Manual => {
            let _ = manual_header(input, output, &mut header)?;
        }
        PopulateMode::Auto => {
            let _ = auto_header(require_source(options)?, &mut header)?;
        }
    }

    if options.show_header {
        output
            .write_all(hex_view(&header.to_bytes()).as_bytes())
            .map_err(|error| PromptError::OutputUnwritable(error.kind()))?;
    }

    let bytes_written = if options.atomic {
        dispose_atomic(options, &header)?
    } else {
        dispose(options, &header)?
    };

    Ok(GenerationReport {
        geometry: header.geometry(),
        bytes_written,
    })
}

fn require_source(options: &GeneratorOptions) -> Result<&Path, GeneratorError> {
    options.source.as_deref().ok_or(GeneratorError::MissingSource)
}

/// Write straight to the destination.
fn dispose(options: &GeneratorOptions, header: &NhdHeader) -> Result<u64, GeneratorError> {
    match options.output {
        OutputMode::HeaderOnly => {
            write_header(header, &options.destination)?;
            Ok(HEADER_SIZE as u64)
        }
        OutputMode::Merge => {
            let merge_options = MergeOptions {
                buffer_size: options.buffer_size,
            };
            let report = merge_header_with(header, require_source(options)?, &options.destination, merge_options)?;
            Ok(report.total_bytes())
        }
    }
}

/// Write to a temp file beside the destination, and only rename it into place
/// once everything went in. A failure leaves the destination as it was.
fn dispose_atomic(options: &GeneratorOptions, header: &NhdHeader) -> Result<u64, GeneratorError> {
    // Source first, same as the direct path.
    let mut source_file: Option<File> = match options.output {
        OutputMode::HeaderOnly => None,
        OutputMode::Merge => Some(
            File::open(require_source(options)?)
                .map_err(|error| ImageIOError::SourceUnreadable(error.kind()))?,
        ),
    };

    let directory = match options.destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp = staging_file(directory, &options.destination)
        .map_err(|error| ImageIOError::DestinationUnwritable(error.kind()))?;
    debug!("Staging output in {}", temp.path().display());

    let written = match source_file.as_mut() {
        Some(source) => {
            let merge_options = MergeOptions {
                buffer_size: options.buffer_size,
            };
            merge_into(header, source, temp.as_file_mut(), merge_options)?.total_bytes()
        }
        None => {
            write_header_into(header, temp.as_file_mut())?;
            HEADER_SIZE as u64
        }
    };

    // Dropping a failed persist cleans the temp file up.
    let _ = temp
        .persist(&options.destination)
        .map_err(|error| ImageIOError::PersistFault(error.error.kind()))?;
    info!("Moved finished output into {}", options.destination.display());
    Ok(written)
}

/// Temp file that ends up with the same mode `File::create` would have given
/// the destination: an existing destination keeps its mode, a new one gets
/// 0666 minus the umask.
fn staging_file(directory: &Path, destination: &Path) -> std::io::Result<NamedTempFile> {
    #[cfg_attr(not(unix), allow(unused_mut))]
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // Applied at creation, so the umask still gets its say.
        let _ = builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    let temp = builder.tempfile_in(directory)?;

    if let Ok(metadata) = std::fs::metadata(destination) {
        temp.as_file().set_permissions(metadata.permissions())?;
    }
    Ok(temp)
}
