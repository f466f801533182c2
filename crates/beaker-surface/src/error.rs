//! Error types for surface operations.

use crate::handle::BodyHandle;
use std::error::Error;
use std::fmt;

/// Errors from surface body operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceError {
    /// The handle's slot is empty or has been reused by a newer body.
    StaleHandle(BodyHandle),
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StaleHandle(handle) => write!(f, "stale body handle: {handle}"),
        }
    }
}

impl Error for SurfaceError {}
