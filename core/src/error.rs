use std::io;

use caravan_common::models::journey::JourneyError;
use thiserror::Error;

use crate::delay::DelayError;

/// Failures that end a session. Bad tokens never get here; the collector
/// asks again instead.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("input ended while waiting for {field}")]
    EndOfInput { field: String },

    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Journey(#[from] JourneyError),

    #[error(transparent)]
    Delay(#[from] DelayError),
}
