//! # Gallery Lightbox
//!
//! A photo gallery backed by an external media host, with a lightbox viewer
//! driven by keyboard, buttons, filmstrip clicks and swipes. The media host
//! stores and resizes the images; this crate decides what is displayed, how
//! large, and where each input leads.
//!
//! # Architecture
//!
//! ```text
//! search export ─▶ collection ─▶ PhotoSet ─▶ ViewerController ─▶ render ─▶ dist/
//!                  (records)     (resolver)   (state machine)     (maud)
//! ```
//!
//! The [`photoset::PhotoSet`] validates the collection once and answers
//! lookups in constant time. The [`viewer::ViewerController`] owns the
//! transient state of one open viewer and reports through the
//! [`viewer::ViewerEvents`] callbacks. Everything between an input event and
//! the resulting state change is synchronous.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | `PhotoRecord`, `Dimensions`, `Viewport` |
//! | [`collection`] | Search export loading and navigation order assignment |
//! | [`photoset`] | Validated collection: lookup, filmstrip window, display-order neighbors |
//! | [`viewer`] | Lightbox state machine, layout, transition, viewport signal, input |
//! | [`media`] | Image URLs from the media host |
//! | [`error`] | Viewer-level error kinds |
//! | [`config`] | `gallery.toml` loading, validation, merging, and CSS generation |
//! | [`render`] | Grid and lightbox pages with Maud |
//! | [`generate`] | Static gallery output, photo pages rendered in parallel |
//! | [`walk`] | Scripted replay of inputs through the viewer |
//! | [`output`] | CLI output formatting |
//! | [`logging`] | `tracing` subscriber setup |
//!
//! # Two Orderings
//!
//! Every photo has an `id` (its position, used by the grid, the filmstrip, the
//! arrow keys and the prev/next buttons) and a `navigation_id` (display order,
//! used by swipes). With a shuffled order the two diverge, so they have
//! separate accessors and are never mixed.

pub mod collection;
pub mod config;
pub mod error;
pub mod generate;
pub mod logging;
pub mod media;
pub mod output;
pub mod photoset;
pub mod render;
pub mod types;
pub mod viewer;
pub mod walk;

#[cfg(test)]
pub(crate) mod test_helpers;
