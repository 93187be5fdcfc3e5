// The error everything above ends up as.
use thiserror::Error;

use crate::error_types::image_io::ImageIOError;
use crate::error_types::prompt::PromptError;
use crate::error_types::scan::ScanError;

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
/// Anything that can stop a header from being generated.
pub enum GeneratorError {
    #[error("A source image is required for automatic mode and for merging.")]
    MissingSource,
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error(transparent)]
    Prompt(#[from] PromptError),
    #[error(transparent)]
    ImageIO(#[from] ImageIOError),
}
