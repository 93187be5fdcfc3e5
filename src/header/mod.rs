pub mod geometry;
pub mod header_methods;
pub mod header_struct;
pub mod wire;
