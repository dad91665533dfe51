//! Port traits. API boundaries for the hexagon.
//!
//! - Outbound: Called by application into infrastructure (input sources, output sinks)

pub mod outbound;

pub use outbound::{StudentSource, TranscriptSink};
