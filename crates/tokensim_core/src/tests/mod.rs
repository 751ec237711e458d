//! Engine tests
//!
//! Tests are organized by topic:
//! - `engine` - Run sequencing, sampling and error handling
//! - `invariants` - Properties every emitted row must satisfy

mod engine;
mod invariants;
