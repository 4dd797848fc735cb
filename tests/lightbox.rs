//! End-to-end tests through the public API: export on disk, validated
//! collection, viewer session, generated site.

use gallery_lightbox::collection::{self, NavigationOrder};
use gallery_lightbox::config::{self, GalleryConfig};
use gallery_lightbox::error::GalleryError;
use gallery_lightbox::generate;
use gallery_lightbox::photoset::{NavStep, PhotoSet};
use gallery_lightbox::types::{Dimensions, Viewport};
use gallery_lightbox::viewer::{
    Direction, Input, Key, Outcome, SwipeDirection, SwipeTracker, ViewerController, ViewerEvents,
    ViewportSignal,
};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

#[derive(Default)]
struct Log {
    changes: Vec<usize>,
    closes: Vec<usize>,
}

impl ViewerEvents for Log {
    fn on_identifier_change(&mut self, new_id: usize) {
        self.changes.push(new_id);
    }

    fn on_close(&mut self, last_id: usize) {
        self.closes.push(last_id);
    }
}

/// Export in the media host's shape: dimensions as decimal strings.
fn write_export(dir: &Path, sizes: &[(u32, u32)]) -> PathBuf {
    let resources: Vec<String> = sizes
        .iter()
        .enumerate()
        .map(|(i, (w, h))| {
            format!(
                r#"{{"public_id":"trip/{:03}-shot","format":"jpg","width":"{w}","height":"{h}"}}"#,
                i + 1
            )
        })
        .collect();
    let path = dir.join("export.json");
    fs::write(&path, format!(r#"{{"resources":[{}]}}"#, resources.join(","))).unwrap();
    path
}

fn load(dir: &Path, sizes: &[(u32, u32)], order: NavigationOrder) -> Arc<PhotoSet> {
    let export = collection::load_search_export(&write_export(dir, sizes)).unwrap();
    Arc::new(PhotoSet::new(collection::build_records(&export.resources, order)).unwrap())
}

#[test]
fn browse_collection_from_export() {
    let tmp = TempDir::new().unwrap();
    let photos = load(
        tmp.path(),
        &[(2000, 1000), (800, 1600), (1200, 1200)],
        NavigationOrder::Sequential,
    );

    let mut viewer = ViewerController::new(Log::default());
    viewer.open(Arc::clone(&photos), 0, Viewport::new(1400, 900)).unwrap();
    assert_eq!(
        viewer.state().unwrap().display_dimensions,
        Dimensions::new(1280, 640)
    );

    viewer.dispatch(&Input::Key(Key::ArrowRight));
    let state = viewer.state().unwrap();
    assert_eq!(state.current_index, 1);
    assert_eq!(state.direction, Direction::Forward);
    assert_eq!(state.display_dimensions, Dimensions::new(400, 800));
    assert!(!state.image_loaded);

    // Same target twice: one callback.
    viewer.on_navigate(2, Direction::Forward);
    viewer.on_navigate(2, Direction::Forward);
    assert_eq!(viewer.events().changes, vec![1, 2]);

    // Last photo: next is absent once loaded.
    viewer.on_image_loaded();
    let controls = viewer.controls();
    assert!(controls.prev);
    assert!(!controls.next);

    assert_eq!(viewer.dispatch(&Input::Key(Key::Escape)), Outcome::Closed { last_id: 2 });
    assert_eq!(viewer.events().closes, vec![2]);
}

#[test]
fn swipes_follow_shuffled_order_and_arrows_follow_ids() {
    let tmp = TempDir::new().unwrap();
    let sizes = vec![(1600, 1200); 20];
    let photos = load(tmp.path(), &sizes, NavigationOrder::Shuffled { seed: 3 });

    // Pick a photo that is not at either end of the display order.
    let start = photos
        .iter()
        .find(|p| p.navigation_id() == 10)
        .map(|p| p.id())
        .unwrap();
    let expected_swipe = photos
        .neighbor_by_navigation_order(start, NavStep::Next)
        .unwrap()
        .id();

    let mut viewer = ViewerController::new(Log::default());
    viewer.open(Arc::clone(&photos), start, Viewport::new(1400, 900)).unwrap();

    let mut tracker = SwipeTracker::default();
    tracker.begin(600.0, 400.0);
    let swipe = tracker.end(400.0, 410.0).unwrap();
    assert_eq!(swipe, SwipeDirection::Left);
    viewer.dispatch(&Input::Swipe(swipe));
    assert_eq!(viewer.state().unwrap().current_index, expected_swipe);
    assert_eq!(viewer.state().unwrap().direction, Direction::Forward);

    // Right swipe returns to the start.
    viewer.dispatch(&Input::Swipe(SwipeDirection::Right));
    assert_eq!(viewer.state().unwrap().current_index, start);

    if start + 1 < photos.len() {
        viewer.dispatch(&Input::NextButton);
        assert_eq!(viewer.state().unwrap().current_index, start + 1);
    }
}

#[test]
fn viewport_subscription_scoped_to_session() {
    let tmp = TempDir::new().unwrap();
    let photos = load(tmp.path(), &[(2000, 1000)], NavigationOrder::Sequential);
    let signal = ViewportSignal::new(Viewport::new(1400, 900));
    let mut viewer = ViewerController::new(Log::default());

    for _ in 0..3 {
        viewer
            .open_with_signal(Arc::clone(&photos), 0, &signal)
            .unwrap();
        assert_eq!(signal.subscriber_count(), 1);

        signal.set(Viewport::new(900, 700));
        signal.set(Viewport::new(700, 500));
        assert!(viewer.sync_viewport());
        assert!(!viewer.sync_viewport());
        assert_eq!(
            viewer.state().unwrap().display_dimensions,
            Dimensions::new(600, 300)
        );

        viewer.close();
        assert_eq!(signal.subscriber_count(), 0);
        signal.set(Viewport::new(1400, 900));
    }
}

#[test]
fn open_unknown_id_reports_not_found() {
    let tmp = TempDir::new().unwrap();
    let photos = load(tmp.path(), &[(10, 10)], NavigationOrder::Sequential);
    let mut viewer = ViewerController::new(Log::default());
    assert_eq!(
        viewer.open(photos, 5, Viewport::new(1400, 900)),
        Err(GalleryError::NotFound(5))
    );
    assert!(!viewer.is_open());
}

#[test]
fn generate_site_with_config_file() {
    let tmp = TempDir::new().unwrap();
    let export = write_export(tmp.path(), &[(2000, 1000), (800, 1600)]);
    let config_path = tmp.path().join(config::CONFIG_FILENAME);
    fs::write(
        &config_path,
        "[site]\ntitle = \"Trip\"\n\n[media]\ncloud_name = \"trips\"\n",
    )
    .unwrap();
    let config: GalleryConfig = config::load_config_file(&config_path).unwrap();

    let out = tmp.path().join("dist");
    let result = generate::generate(&export, &out, &config).unwrap();
    assert_eq!(result.pages.len(), 2);

    let grid = fs::read_to_string(out.join("index.html")).unwrap();
    assert!(grid.contains("<title>Trip</title>"));
    assert!(grid.contains(r#"href="p/1.html""#));

    let page = fs::read_to_string(out.join("p/1.html")).unwrap();
    assert!(page.contains("<title>Trip - shot</title>"));
    assert!(page.contains("res.cloudinary.com/trips/image/upload/c_scale,w_1920/trip/002-shot.jpg"));
    assert!(page.contains(r#"data-prev="0.html""#));
    assert!(!page.contains("data-next="));
}
