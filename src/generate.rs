//! Static gallery generation.
//!
//! Takes a search export from the media host and writes a self-contained
//! static gallery. Images themselves stay on the media host; every page
//! references them by URL.
//!
//! ## Generated Pages
//!
//! - **Grid page** (`/index.html`): every photo as a thumbnail, in id order
//! - **Photo pages** (`/p/{id}.html`): the lightbox opened on that photo
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html        # Grid
//! └── p/
//!     ├── 0.html        # Lightbox pages, one per photo
//!     ├── 1.html
//!     └── ...
//! ```
//!
//! Each photo page is rendered from its own [`ViewerController`], opened at
//! the configured default viewport and marked loaded so the full chrome is in
//! the markup. The embedded script hides the chrome again until the image has
//! actually loaded in the browser. Pages are independent, so they are rendered
//! in parallel.

use crate::collection::{self, CollectionError};
use crate::config::GalleryConfig;
use crate::error::GalleryError;
use crate::media::CloudinaryHost;
use crate::photoset::PhotoSet;
use crate::render::{self, RenderContext};
use crate::viewer::ViewerController;
use rayon::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Gallery(#[from] GalleryError),
    #[error(transparent)]
    Collection(#[from] CollectionError),
    #[error("{} contains no photos", .0.display())]
    Empty(PathBuf),
}

/// One written photo page.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedPage {
    pub id: usize,
    pub navigation_id: usize,
    pub title: String,
    /// Path relative to the output directory.
    pub path: String,
}

/// What [`generate`] wrote.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateResult {
    pub output_dir: PathBuf,
    /// Photo pages in id order.
    pub pages: Vec<GeneratedPage>,
}

/// Load a search export and validate it into a [`PhotoSet`].
pub fn load_gallery(export_path: &Path, config: &GalleryConfig) -> Result<PhotoSet, GenerateError> {
    let export = collection::load_search_export(export_path)?;
    if export.resources.is_empty() {
        return Err(GenerateError::Empty(export_path.to_path_buf()));
    }
    let records = collection::build_records(&export.resources, config.order);
    Ok(PhotoSet::new(records)?)
}

pub fn generate(
    export_path: &Path,
    output_dir: &Path,
    config: &GalleryConfig,
) -> Result<GenerateResult, GenerateError> {
    let photos = Arc::new(load_gallery(export_path, config)?);
    let host = CloudinaryHost::new(config.media.cloud_name.clone());
    let ctx = RenderContext::new(config, &host);

    let pages_dir = output_dir.join("p");
    fs::create_dir_all(&pages_dir)?;

    let grid_html = render::render_grid(&photos, &ctx);
    fs::write(output_dir.join("index.html"), grid_html.into_string())?;
    tracing::info!("generated index.html");

    let pages = photos
        .records()
        .par_iter()
        .map(|photo| write_photo_page(&photos, photo.id, &pages_dir, &ctx))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::info!(
        pages = pages.len(),
        output = %output_dir.display(),
        "gallery generated"
    );
    Ok(GenerateResult {
        output_dir: output_dir.to_path_buf(),
        pages,
    })
}

fn write_photo_page(
    photos: &Arc<PhotoSet>,
    id: usize,
    pages_dir: &Path,
    ctx: &RenderContext,
) -> Result<GeneratedPage, GenerateError> {
    let mut viewer = ViewerController::with_settings((), ctx.config.viewer.settings());
    viewer.open(Arc::clone(photos), id, ctx.config.viewer.viewport())?;
    viewer.on_image_loaded();

    let photo = photos.resolve_current(id)?;
    let markup = render::render_photo_page(&viewer, ctx).ok_or(GalleryError::NotFound(id))?;
    let file_name = render::photo_page_name(id);
    fs::write(pages_dir.join(&file_name), markup.into_string())?;
    tracing::debug!(id, "generated p/{file_name}");

    Ok(GeneratedPage {
        id,
        navigation_id: photo.navigation_id(),
        title: collection::title_from_public_id(&photo.public_id),
        path: format!("p/{file_name}"),
    })
}

// ============================================================================
// Tests
// ============================================================================
