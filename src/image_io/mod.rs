pub mod merge;
pub mod read;
pub mod size;
pub mod write;
