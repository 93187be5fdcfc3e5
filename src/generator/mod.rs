pub mod generator_methods;
pub mod generator_struct;
