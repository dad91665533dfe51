//! Student sources. Implement `StudentSource`.

pub mod json_file;
pub mod sample;

pub use json_file::JsonFileSource;
pub use sample::SampleSource;
