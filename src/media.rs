//! Image URL resolution against the external media host.
//!
//! The gallery never stores pixels. Every displayable URL is produced by the
//! media host from a `public_id`, a `format`, and an optional target width,
//! and the host resizes on the fly. The core only passes these three values
//! through; it does not build or validate URLs itself.

use crate::types::PhotoRecord;

/// Produces displayable image URLs.
pub trait MediaHost: Sync {
    /// URL of `public_id.format`, scaled to `width` pixels if given, otherwise
    /// the original upload.
    fn image_url(&self, public_id: &str, format: &str, width: Option<u32>) -> String;

    fn photo_url(&self, photo: &PhotoRecord, width: Option<u32>) -> String {
        self.image_url(&photo.public_id, &photo.format, width)
    }
}

/// Cloudinary delivery URLs (`c_scale,w_<width>` transformation).
#[derive(Debug, Clone)]
pub struct CloudinaryHost {
    cloud_name: String,
}

impl CloudinaryHost {
    pub fn new(cloud_name: impl Into<String>) -> Self {
        Self {
            cloud_name: cloud_name.into(),
        }
    }
}

impl MediaHost for CloudinaryHost {
    fn image_url(&self, public_id: &str, format: &str, width: Option<u32>) -> String {
        match width {
            Some(w) => format!(
                "https://res.cloudinary.com/{}/image/upload/c_scale,w_{w}/{public_id}.{format}",
                self.cloud_name
            ),
            None => format!(
                "https://res.cloudinary.com/{}/image/upload/{public_id}.{format}",
                self.cloud_name
            ),
        }
    }
}
