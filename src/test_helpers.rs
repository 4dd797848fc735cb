//! Shared test utilities for the gallery-lightbox test suite.
//!
//! Provides record builders, ready-made photo sets in sequential and shuffled
//! order, and a [`RecordingEvents`] sink that captures viewer callbacks.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_helpers::*;
//!
//! let photos = Arc::new(shuffled_set(30));
//! let mut viewer = ViewerController::new(RecordingEvents::default());
//! viewer.open(photos, 4, Viewport::new(1400, 900)).unwrap();
//! ```

use crate::collection::{NavigationOrder, SearchResource, build_records};
use crate::photoset::PhotoSet;
use crate::types::PhotoRecord;
use crate::viewer::ViewerEvents;

// =========================================================================
// Record builders
// =========================================================================

/// A single record with a predictable public id (`gallery/photo-{id}`).
pub fn photo(id: usize, navigation_id: usize, width: u32, height: u32) -> PhotoRecord {
    PhotoRecord {
        id,
        navigation_id,
        width,
        height,
        public_id: format!("gallery/photo-{id}"),
        format: "jpg".to_string(),
        blur_placeholder: None,
    }
}

/// `n` landscape records with `navigation_id == id`.
pub fn sequential_records(n: usize) -> Vec<PhotoRecord> {
    (0..n).map(|id| photo(id, id, 2000, 1000)).collect()
}

/// `n` search resources as the media host would export them.
pub fn resources(n: usize) -> Vec<SearchResource> {
    (0..n)
        .map(|i| SearchResource {
            public_id: format!("gallery/{:03}-photo", i + 1),
            format: "jpg".to_string(),
            width: 1600,
            height: 1200,
            blur_placeholder: None,
        })
        .collect()
}

// =========================================================================
// Photo sets
// =========================================================================

pub fn sequential_set(n: usize) -> PhotoSet {
    PhotoSet::new(sequential_records(n)).unwrap()
}

/// `n` records with a seeded shuffled navigation order.
pub fn shuffled_set(n: usize) -> PhotoSet {
    PhotoSet::new(build_records(
        &resources(n),
        NavigationOrder::Shuffled { seed: 42 },
    ))
    .unwrap()
}

/// Records whose navigation ids are given explicitly: `navigation[id]`.
pub fn set_with_navigation(navigation: &[usize]) -> PhotoSet {
    let records = navigation
        .iter()
        .enumerate()
        .map(|(id, &nav)| photo(id, nav, 2000, 1000))
        .collect();
    PhotoSet::new(records).unwrap()
}

// =========================================================================
// Viewer callbacks
// =========================================================================

/// Captures every callback the viewer makes, in order.
#[derive(Debug, Default)]
pub struct RecordingEvents {
    pub changes: Vec<usize>,
    pub closes: Vec<usize>,
}

impl ViewerEvents for RecordingEvents {
    fn on_identifier_change(&mut self, new_id: usize) {
        self.changes.push(new_id);
    }

    fn on_close(&mut self, last_id: usize) {
        self.closes.push(last_id);
    }
}
