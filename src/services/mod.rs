// Service exports
pub mod dataset;
pub mod generator;

pub use dataset::{DataError, Dataset};
pub use generator::{GeneratedData, GeneratorError};
