//! Infrastructure adapters. Implement outbound ports.
//!
//! Input files, built-in data, console and file outputs. Map errors to DomainError.

pub mod input;
pub mod output;
