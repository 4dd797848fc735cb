//! Error taxonomy of the lightbox core.
//!
//! Only three things can go wrong inside the viewer:
//!
//! - [`GalleryError::NotFound`]: a requested id is not in the collection.
//!   Callers either close the viewer or treat the request as a no-op.
//! - [`GalleryError::InvariantViolation`]: the collection breaks the input
//!   contract (sparse ids, duplicate navigation ids). This is a caller-side
//!   data bug and is logged, never swallowed.
//! - [`GalleryError::LoadFailure`]: an image asset failed to load. The viewer
//!   keeps `image_loaded == false`; there is no retry.
//!
//! Reaching the end of the collection is not an error: neighbor lookups
//! return `None` there.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GalleryError {
    #[error("Photo {0} not found")]
    NotFound(usize),
    #[error("Invalid photo collection: {0}")]
    InvariantViolation(String),
    #[error("Photo {id} failed to load: {reason}")]
    LoadFailure { id: usize, reason: String },
}

impl GalleryError {
    /// Whether the current view cannot continue after this error.
    pub fn is_fatal(&self) -> bool {
        matches!(self, GalleryError::InvariantViolation(_))
    }
}
