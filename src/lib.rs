// The library cannot use unwraps.
#![deny(clippy::unwrap_used)]
// Gotta use all the results.
#![deny(unused_results)]

pub mod config;
pub mod error_types;
pub mod generator;
pub mod header;
pub mod image_io;
pub mod prompt;
pub mod scan;

// Within the crate, we can use:
mod helpers;
