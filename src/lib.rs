//! gpa-transcript: weighted grades, GPA and honors for student transcripts, with Hexagonal Architecture.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
