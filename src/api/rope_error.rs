use std::collections::TryReserveError;

use thiserror::Error;

///
/// Errors that can be produced by rope operations
///
#[derive(Debug, Error)]
pub enum RopeError {
    /// The start of a range was after its end
    #[error("Invalid range: start {start} is after end {end}")]
    InvalidRange { start: usize, end: usize },

    /// A range extended past the end of the rope
    #[error("Range {start}..{end} is out of bounds for a rope of {size} bytes")]
    OutOfBounds { start: usize, end: usize, size: usize },

    /// Memory could not be reserved to hold the contents of the rope
    #[error("Unable to allocate {size} bytes for the rope contents")]
    AllocationFailed { size: usize, #[source] source: TryReserveError }
}
