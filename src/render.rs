//! HTML rendering of the grid and the lightbox pages.
//!
//! Photo pages are rendered from an open [`ViewerController`], so whatever
//! the controller reports (display dimensions, [`Controls`], filmstrip
//! window, transition) is exactly what ends up in the markup. Nothing here
//! recomputes layout or adjacency on its own.
//!
//! ## Script contract
//!
//! Each photo page carries a `div.nav-zones` element read by
//! `static/lightbox.js`:
//!
//! | Attribute | Meaning |
//! |---|---|
//! | `data-prev` / `data-next` | Pages for `ArrowLeft`/`ArrowRight` (id adjacency) |
//! | `data-swipe-prev` / `data-swipe-next` | Pages for right/left swipes (navigation order) |
//! | `data-close` | Grid anchor the `Escape` key returns to |
//! | `data-travel` | Slide distance of the transition |
//! | `data-swipe-threshold` | Horizontal travel before a drag is a swipe |
//!
//! Absent attributes mean there is nowhere to go in that direction.

use crate::collection::title_from_public_id;
use crate::config::GalleryConfig;
use crate::media::MediaHost;
use crate::photoset::{NavStep, PhotoSet};
use crate::types::PhotoRecord;
use crate::viewer::{Controls, ViewerController, ViewerEvents};
use maud::{DOCTYPE, Markup, PreEscaped, html};

pub const CSS_STATIC: &str = include_str!("../static/style.css");
pub const JS: &str = include_str!("../static/lightbox.js");

/// Everything a page needs besides the photos themselves.
pub struct RenderContext<'a> {
    pub config: &'a GalleryConfig,
    pub host: &'a dyn MediaHost,
    /// Color variables followed by the static stylesheet.
    pub css: String,
}

impl<'a> RenderContext<'a> {
    pub fn new(config: &'a GalleryConfig, host: &'a dyn MediaHost) -> Self {
        let color_css = crate::config::generate_color_css(&config.colors);
        Self {
            config,
            host,
            css: format!("{}\n\n{}", color_css, CSS_STATIC),
        }
    }
}

/// File name of a photo page, relative to the `p/` directory.
pub fn photo_page_name(id: usize) -> String {
    format!("{id}.html")
}

/// Grid anchor a closed lightbox returns to, relative to a photo page.
fn grid_anchor(id: usize) -> String {
    format!("../index.html#photo-{id}")
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(title: &str, css: &str, body_class: Option<&str>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body class=[body_class] {
                (content)
            }
        }
    }
}

fn site_header(title: &str, home: &str) -> Markup {
    html! {
        header.site-header {
            a.site-title href=(home) { (title) }
        }
    }
}

/// Thumbnail height for `width`, keeping the photo's aspect ratio.
fn thumbnail_height(photo: &PhotoRecord, width: u32) -> u32 {
    (width as f64 / photo.aspect_ratio()).round().max(1.0) as u32
}

// ============================================================================
// Page Renderers
// ============================================================================

/// Renders the grid page. Thumbnails appear in id order.
pub fn render_grid(photos: &PhotoSet, ctx: &RenderContext) -> Markup {
    let thumb_width = ctx.config.media.thumbnail_width;
    let content = html! {
        (site_header(&ctx.config.site.title, "index.html"))
        main.grid-page {
            div.photo-grid {
                @for photo in photos.iter() {
                    @let title = title_from_public_id(&photo.public_id);
                    a.grid-item id={ "photo-" (photo.id) } href={ "p/" (photo_page_name(photo.id)) } {
                        img
                            src=(ctx.host.photo_url(photo, Some(thumb_width)))
                            alt=(title)
                            width=(thumb_width)
                            height=(thumbnail_height(photo, thumb_width))
                            loading="lazy";
                    }
                }
            }
        }
    };

    base_document(&ctx.config.site.title, &ctx.css, None, content)
}

/// Renders the lightbox page for the photo the viewer displays.
///
/// `None` when the viewer is closed.
pub fn render_photo_page<E: ViewerEvents>(
    viewer: &ViewerController<E>,
    ctx: &RenderContext,
) -> Option<Markup> {
    let state = viewer.state()?;
    let photos = viewer.photos()?;
    let photo = viewer.current_photo()?;
    let transition = viewer.transition()?;
    let controls = viewer.controls();
    let id = state.current_index;

    let title = title_from_public_id(&photo.public_id);
    let page_title = format!("{} - {}", ctx.config.site.title, title);
    let dims = state.display_dimensions;

    let prev_url = id
        .checked_sub(1)
        .filter(|prev| photos.contains(*prev))
        .map(photo_page_name);
    let next_url = Some(id + 1)
        .filter(|next| photos.contains(*next))
        .map(photo_page_name);
    let swipe_prev = photos
        .neighbor_by_navigation_order(id, NavStep::Previous)
        .map(|p| photo_page_name(p.id));
    let swipe_next = photos
        .neighbor_by_navigation_order(id, NavStep::Next)
        .map(|p| photo_page_name(p.id));

    let travel = viewer.settings().transition_travel;
    let frame_style = format!(
        "--travel: {travel}px; --enter-x: {}px; --exit-x: {}px; --aspect-ratio: {};",
        transition.enter_x,
        transition.exit_x,
        photo.aspect_ratio()
    );
    let image_style = photo
        .blur_placeholder
        .as_deref()
        .map(|blur| format!("background-image: url({blur}); background-size: cover;"));

    let content = html! {
        main.lightbox style=(frame_style) {
            a.lightbox-backdrop href=(grid_anchor(id)) aria-label="Back to gallery" {}
            figure.lightbox-frame {
                img #lightbox-image
                    src=(ctx.host.photo_url(photo, Some(ctx.config.media.full_width)))
                    alt=(title)
                    width=(dims.width)
                    height=(dims.height)
                    style=[image_style];
            }
            (render_chrome(id, controls, photo, ctx))
            @if controls.filmstrip {
                (render_filmstrip(viewer.filmstrip(), id, ctx))
            }
        }
        div.nav-zones
            data-prev=[prev_url]
            data-next=[next_url]
            data-swipe-prev=[swipe_prev]
            data-swipe-next=[swipe_next]
            data-close=(grid_anchor(id))
            data-travel=(travel)
            data-swipe-threshold=(ctx.config.viewer.swipe_threshold) {}
        script { (PreEscaped(JS)) }
    };

    Some(base_document(
        &page_title,
        &ctx.css,
        Some("lightbox-view loading"),
        content,
    ))
}

/// Close, prev/next and open-original controls, as allowed by `controls`.
fn render_chrome(
    id: usize,
    controls: Controls,
    photo: &PhotoRecord,
    ctx: &RenderContext,
) -> Markup {
    html! {
        div.lightbox-chrome {
            @if controls.close {
                a.lightbox-close href=(grid_anchor(id)) aria-label="Close" { "×" }
            }
            @if controls.prev {
                a.lightbox-prev href=(photo_page_name(id - 1)) rel="prev" aria-label="Previous" { "‹" }
            }
            @if controls.next {
                a.lightbox-next href=(photo_page_name(id + 1)) rel="next" aria-label="Next" { "›" }
            }
            @if controls.open_original {
                a.lightbox-original href=(ctx.host.photo_url(photo, None)) target="_blank" rel="noopener" {
                    "Open original"
                }
            }
        }
    }
}

fn render_filmstrip(strip: &[PhotoRecord], current: usize, ctx: &RenderContext) -> Markup {
    let thumb_width = ctx.config.media.thumbnail_width;
    html! {
        nav.filmstrip aria-label="Filmstrip" {
            ul {
                @for photo in strip {
                    @let is_current = photo.id == current;
                    li class=[is_current.then_some("current")] {
                        a href=(photo_page_name(photo.id)) aria-current=[is_current.then_some("true")] {
                            img
                                src=(ctx.host.photo_url(photo, Some(thumb_width)))
                                alt=(title_from_public_id(&photo.public_id))
                                loading="lazy";
                        }
                    }
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
