//! Pure calculation functions for on-screen image dimensions.
//!
//! All functions here are pure and testable without a browser or images.
//! Results depend only on the intrinsic size and the current viewport, never
//! on a previous result, so repeated resizes cannot drift.

use crate::types::{Dimensions, Viewport};
use serde::{Deserialize, Serialize};

/// Bounds the lightbox keeps around the displayed image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutLimits {
    /// Widest the image is ever displayed, in pixels.
    pub max_width: u32,
    /// Space reserved around the image on each axis (both sides together).
    pub margin: u32,
}

impl Default for LayoutLimits {
    fn default() -> Self {
        Self {
            max_width: 1280,
            margin: 100,
        }
    }
}

/// Display size of an image inside `viewport`, using the default limits.
///
/// # Examples
/// ```
/// # use gallery_lightbox::types::{Dimensions, Viewport};
/// # use gallery_lightbox::viewer::compute_display_dimensions;
/// // 2:1 landscape: capped by max width 1280 → 1280x640
/// let d = compute_display_dimensions(Dimensions::new(2000, 1000), Viewport::new(1400, 900));
/// assert_eq!(d, Dimensions::new(1280, 640));
///
/// // 1:2 portrait: capped by viewport height 900 - 100 → 400x800
/// let d = compute_display_dimensions(Dimensions::new(800, 1600), Viewport::new(1400, 900));
/// assert_eq!(d, Dimensions::new(400, 800));
/// ```
pub fn compute_display_dimensions(intrinsic: Dimensions, viewport: Viewport) -> Dimensions {
    display_dimensions(intrinsic, viewport, LayoutLimits::default())
}

/// Display size of an image inside `viewport` under explicit `limits`.
///
/// - Landscape (`ratio > 1`): width is `min(max_w, intrinsic width)`, height
///   follows from the ratio.
/// - Portrait or square: height is `min(max_h, intrinsic height)`, width
///   follows from the ratio.
///
/// `max_w = min(limits.max_width, viewport.width - margin)` and
/// `max_h = viewport.height - margin`, both floored at 1px.
pub fn display_dimensions(
    intrinsic: Dimensions,
    viewport: Viewport,
    limits: LayoutLimits,
) -> Dimensions {
    let max_w = limits
        .max_width
        .min(viewport.width.saturating_sub(limits.margin))
        .max(1);
    let max_h = viewport.height.saturating_sub(limits.margin).max(1);
    let ratio = intrinsic.aspect_ratio();

    if ratio > 1.0 {
        let width = max_w.min(intrinsic.width) as f64;
        Dimensions {
            width: width.round() as u32,
            height: (width / ratio).round() as u32,
        }
    } else {
        let height = max_h.min(intrinsic.height) as f64;
        Dimensions {
            width: (height * ratio).round() as u32,
            height: height.round() as u32,
        }
    }
}
