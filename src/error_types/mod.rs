// Every error we can hand back to a caller.
// We do not allow string errors.

pub mod generator;
pub mod header;
pub mod image_io;
pub mod prompt;
pub mod scan;
