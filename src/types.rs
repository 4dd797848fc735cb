//! Shared types used by the resolver, the viewer and the renderer.
//!
//! [`PhotoRecord`] is serialized the way the media host exports it: camelCase
//! keys, with intrinsic dimensions as decimal strings. Deserialization parses
//! them to integers up front so no ratio math ever sees a string.

use serde::{Deserialize, Deserializer, Serialize};

/// One image's gallery metadata.
///
/// Two orderings coexist:
/// - [`id`](PhotoRecord::id) is the stable, URL-addressable position.
/// - [`navigation_id`](PhotoRecord::navigation_id) is the display order used
///   by swipe navigation, and may be shuffled relative to `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoRecord {
    pub id: usize,
    pub navigation_id: usize,
    #[serde(deserialize_with = "dimension")]
    pub width: u32,
    #[serde(deserialize_with = "dimension")]
    pub height: u32,
    pub public_id: String,
    pub format: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blur_placeholder: Option<String>,
}

impl PhotoRecord {
    /// Identifier used for URLs and storage-order adjacency.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Position in display order, used for next/previous by gesture.
    pub fn navigation_id(&self) -> usize {
        self.navigation_id
    }

    pub fn intrinsic(&self) -> Dimensions {
        Dimensions {
            width: self.width,
            height: self.height,
        }
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.intrinsic().aspect_ratio()
    }
}

/// A pixel size, either intrinsic or on-screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn aspect_ratio(self) -> f64 {
        self.width as f64 / self.height as f64
    }
}

/// The sampled browser window size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Accepts `"2000"` or `2000`; rejects zero and anything non-numeric.
pub(crate) fn dimension<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u32),
        Text(String),
    }

    let value = match Raw::deserialize(deserializer)? {
        Raw::Number(n) => n,
        Raw::Text(s) => s.trim().parse::<u32>().map_err(|_| {
            serde::de::Error::custom(format!("dimension {s:?} is not a decimal integer"))
        })?,
    };
    if value == 0 {
        return Err(serde::de::Error::custom("dimension must be non-zero"));
    }
    Ok(value)
}
