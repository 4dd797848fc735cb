//! The lightbox state machine.
//!
//! ```text
//! Closed ──open(id)──▶ Open(id) ──navigate──▶ Open(id') ──close──▶ Closed
//!    ▲                    │
//!    └── id not found ────┘
//! ```
//!
//! [`ViewerController`] owns the transient [`ViewerState`] of one open viewer
//! session. All transitions happen synchronously on discrete events; the only
//! outward effects are the two [`ViewerEvents`] callbacks.

use super::input::{Input, Intent, SwipeDirection, resolve_intent};
use super::layout::{LayoutLimits, display_dimensions};
use super::transition::{DEFAULT_TRAVEL, Direction, Transition};
use super::viewport::{ViewportSignal, ViewportSubscription};
use crate::error::GalleryError;
use crate::photoset::{DEFAULT_FILMSTRIP_RADIUS, PhotoSet};
use crate::types::{Dimensions, PhotoRecord, Viewport};
use std::sync::Arc;
use tracing::{debug, warn};

/// Callbacks the viewer reports through.
pub trait ViewerEvents {
    /// Called exactly once per accepted navigation.
    fn on_identifier_change(&mut self, new_id: usize);

    /// Called when the viewer closes, with the id displayed at that moment.
    fn on_close(&mut self, last_id: usize);
}

/// Discards both callbacks, for renderers that only read state.
impl ViewerEvents for () {
    fn on_identifier_change(&mut self, _new_id: usize) {}

    fn on_close(&mut self, _last_id: usize) {}
}

/// Tunables for one viewer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerSettings {
    pub limits: LayoutLimits,
    pub filmstrip_radius: usize,
    pub transition_travel: i32,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            limits: LayoutLimits::default(),
            filmstrip_radius: DEFAULT_FILMSTRIP_RADIUS,
            transition_travel: DEFAULT_TRAVEL,
        }
    }
}

/// Transient state of an open viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewerState {
    /// Id of the displayed photo.
    pub current_index: usize,
    /// Direction of the most recent navigation.
    pub direction: Direction,
    pub display_dimensions: Dimensions,
    /// False from navigation until the new image finished loading.
    pub image_loaded: bool,
}

/// Which interactive chrome is rendered.
///
/// Nothing shows until the image has loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Controls {
    pub prev: bool,
    pub next: bool,
    pub close: bool,
    pub open_original: bool,
    pub filmstrip: bool,
}

/// Why an event did not change anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ignored {
    NotOpen,
    NotFound(usize),
    AlreadyCurrent,
    /// Boundary reached, or the input has no binding.
    NoTarget,
    /// The same swipe already moved the viewer and its image has not loaded.
    SwipeRepeat,
}

/// Result of handling one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Navigated { id: usize, direction: Direction },
    Closed { last_id: usize },
    /// The collection was swapped and the displayed photo kept.
    Refreshed { id: usize },
    Ignored(Ignored),
}

struct Session {
    photos: Arc<PhotoSet>,
    state: ViewerState,
    viewport: Viewport,
    subscription: Option<ViewportSubscription>,
    /// Swipe that produced the current photo, until its image loads.
    pending_swipe: Option<SwipeDirection>,
}

enum Phase {
    Closed,
    Open(Session),
}

pub struct ViewerController<E: ViewerEvents> {
    phase: Phase,
    settings: ViewerSettings,
    events: E,
}

impl<E: ViewerEvents> ViewerController<E> {
    pub fn new(events: E) -> Self {
        Self::with_settings(events, ViewerSettings::default())
    }

    pub fn with_settings(events: E, settings: ViewerSettings) -> Self {
        Self {
            phase: Phase::Closed,
            settings,
            events,
        }
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Open on `id` with a fixed viewport.
    ///
    /// An unknown id leaves the viewer closed. Opening an already open viewer
    /// replaces its session without a close callback.
    pub fn open(
        &mut self,
        photos: Arc<PhotoSet>,
        id: usize,
        viewport: Viewport,
    ) -> Result<(), GalleryError> {
        self.start(photos, id, viewport, None)
    }

    /// Open on `id` and follow `signal` until closed.
    pub fn open_with_signal(
        &mut self,
        photos: Arc<PhotoSet>,
        id: usize,
        signal: &ViewportSignal,
    ) -> Result<(), GalleryError> {
        self.start(photos, id, signal.current(), Some(signal.subscribe()))
    }

    fn start(
        &mut self,
        photos: Arc<PhotoSet>,
        id: usize,
        viewport: Viewport,
        subscription: Option<ViewportSubscription>,
    ) -> Result<(), GalleryError> {
        let record = match photos.resolve_current(id) {
            Ok(record) => record,
            Err(err) => {
                debug!(id, "open rejected: {err}");
                self.close();
                return Err(err);
            }
        };
        let state = ViewerState {
            current_index: id,
            direction: Direction::None,
            display_dimensions: display_dimensions(
                record.intrinsic(),
                viewport,
                self.settings.limits,
            ),
            image_loaded: false,
        };
        debug!(id, ?viewport, "viewer opened");
        self.phase = Phase::Open(Session {
            photos,
            state,
            viewport,
            subscription,
            pending_swipe: None,
        });
        Ok(())
    }

    /// Close the viewer, reporting the id displayed right now.
    ///
    /// Releases the viewport subscription. `None` if already closed.
    pub fn close(&mut self) -> Option<usize> {
        match std::mem::replace(&mut self.phase, Phase::Closed) {
            Phase::Open(session) => {
                let last_id = session.state.current_index;
                drop(session);
                debug!(last_id, "viewer closed");
                self.events.on_close(last_id);
                Some(last_id)
            }
            Phase::Closed => None,
        }
    }

    /// Swap in a freshly loaded collection.
    ///
    /// If the displayed id no longer exists the viewer closes.
    pub fn replace_photos(&mut self, photos: Arc<PhotoSet>) -> Outcome {
        let limits = self.settings.limits;
        let Phase::Open(session) = &mut self.phase else {
            return Outcome::Ignored(Ignored::NotOpen);
        };
        let id = session.state.current_index;
        let Ok(record) = photos.resolve_current(id) else {
            warn!(id, "displayed photo vanished from refreshed collection");
            return match self.close() {
                Some(last_id) => Outcome::Closed { last_id },
                None => Outcome::Ignored(Ignored::NotOpen),
            };
        };
        let same_image = session
            .photos
            .resolve_current(id)
            .is_ok_and(|old| old.public_id == record.public_id);
        session.state.display_dimensions =
            display_dimensions(record.intrinsic(), session.viewport, limits);
        if !same_image {
            session.state.image_loaded = false;
        }
        session.photos = photos;
        Outcome::Refreshed { id }
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Move to `target_id`.
    ///
    /// Dropped silently when closed, when the id does not resolve, or when it
    /// is already displayed; the last case makes repeated requests for the
    /// same photo report a single change.
    pub fn on_navigate(&mut self, target_id: usize, direction: Direction) -> Outcome {
        let limits = self.settings.limits;
        let Phase::Open(session) = &mut self.phase else {
            return Outcome::Ignored(Ignored::NotOpen);
        };
        if target_id == session.state.current_index {
            return Outcome::Ignored(Ignored::AlreadyCurrent);
        }
        let record = match session.photos.resolve_current(target_id) {
            Ok(record) => record,
            Err(_) => {
                warn!(target_id, "dropping navigation to unknown photo");
                return Outcome::Ignored(Ignored::NotFound(target_id));
            }
        };

        session.state = ViewerState {
            current_index: target_id,
            direction,
            display_dimensions: display_dimensions(record.intrinsic(), session.viewport, limits),
            image_loaded: false,
        };
        session.pending_swipe = None;
        debug!(id = target_id, ?direction, "navigated");
        self.events.on_identifier_change(target_id);
        Outcome::Navigated {
            id: target_id,
            direction,
        }
    }

    /// Route a keyboard, button, filmstrip or swipe input.
    ///
    /// Gesture handlers can fire several times for one physical swipe, so a
    /// swipe that repeats the one which produced the displayed photo is
    /// ignored until [`on_image_loaded`](Self::on_image_loaded) acknowledges
    /// that photo.
    pub fn dispatch(&mut self, input: &Input) -> Outcome {
        let Phase::Open(session) = &self.phase else {
            return Outcome::Ignored(Ignored::NotOpen);
        };
        if matches!(input, Input::Swipe(swipe) if session.pending_swipe == Some(*swipe)) {
            debug!(?input, "ignoring repeated swipe");
            return Outcome::Ignored(Ignored::SwipeRepeat);
        }
        let outcome = match resolve_intent(&session.photos, session.state.current_index, input) {
            Intent::Navigate { target, direction } => self.on_navigate(target, direction),
            Intent::Close => match self.close() {
                Some(last_id) => Outcome::Closed { last_id },
                None => Outcome::Ignored(Ignored::NotOpen),
            },
            Intent::Nothing => Outcome::Ignored(Ignored::NoTarget),
        };
        if let (Outcome::Navigated { .. }, Input::Swipe(swipe), Phase::Open(session)) =
            (&outcome, input, &mut self.phase)
        {
            session.pending_swipe = Some(*swipe);
        }
        outcome
    }

    // =========================================================================
    // Loading and viewport
    // =========================================================================

    /// The displayed image finished loading.
    pub fn on_image_loaded(&mut self) {
        if let Phase::Open(session) = &mut self.phase {
            session.state.image_loaded = true;
            session.pending_swipe = None;
        }
    }

    /// A load event tagged with the photo it belongs to. Events for anything
    /// other than the displayed photo are stale and ignored.
    pub fn on_image_loaded_for(&mut self, id: usize) {
        let is_current =
            matches!(&self.phase, Phase::Open(session) if session.state.current_index == id);
        if is_current {
            self.on_image_loaded();
        } else {
            debug!(id, "ignoring stale load event");
        }
    }

    /// The displayed image failed to load. Chrome stays hidden; no retry.
    pub fn on_image_failed(&mut self, reason: impl Into<String>) -> Option<GalleryError> {
        let Phase::Open(session) = &mut self.phase else {
            return None;
        };
        session.state.image_loaded = false;
        let err = GalleryError::LoadFailure {
            id: session.state.current_index,
            reason: reason.into(),
        };
        warn!("{err}");
        Some(err)
    }

    /// Apply a pending viewport change, if any. Returns whether dimensions
    /// were recomputed.
    pub fn sync_viewport(&mut self) -> bool {
        let limits = self.settings.limits;
        let Phase::Open(session) = &mut self.phase else {
            return false;
        };
        let Some(viewport) = session.subscription.as_mut().and_then(|s| s.take_change()) else {
            return false;
        };
        let Ok(record) = session.photos.resolve_current(session.state.current_index) else {
            return false;
        };
        session.viewport = viewport;
        session.state.display_dimensions = display_dimensions(record.intrinsic(), viewport, limits);
        debug!(?viewport, dimensions = ?session.state.display_dimensions, "viewport resized");
        true
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn is_open(&self) -> bool {
        matches!(self.phase, Phase::Open(_))
    }

    pub fn state(&self) -> Option<&ViewerState> {
        match &self.phase {
            Phase::Open(session) => Some(&session.state),
            Phase::Closed => None,
        }
    }

    pub fn photos(&self) -> Option<&PhotoSet> {
        match &self.phase {
            Phase::Open(session) => Some(&session.photos),
            Phase::Closed => None,
        }
    }

    pub fn viewport(&self) -> Option<Viewport> {
        match &self.phase {
            Phase::Open(session) => Some(session.viewport),
            Phase::Closed => None,
        }
    }

    pub fn settings(&self) -> &ViewerSettings {
        &self.settings
    }

    pub fn current_photo(&self) -> Option<&PhotoRecord> {
        let Phase::Open(session) = &self.phase else {
            return None;
        };
        session
            .photos
            .resolve_current(session.state.current_index)
            .ok()
    }

    /// Thumbnails around the displayed photo.
    pub fn filmstrip(&self) -> &[PhotoRecord] {
        match &self.phase {
            Phase::Open(session) => session
                .photos
                .windowed_filmstrip(session.state.current_index, self.settings.filmstrip_radius),
            Phase::Closed => &[],
        }
    }

    pub fn transition(&self) -> Option<Transition> {
        self.state().map(|state| {
            Transition::for_direction(state.direction, self.settings.transition_travel)
        })
    }

    pub fn controls(&self) -> Controls {
        let Phase::Open(session) = &self.phase else {
            return Controls::default();
        };
        let state = &session.state;
        if !state.image_loaded {
            return Controls::default();
        }
        let last = session.photos.last_id().unwrap_or(0);
        Controls {
            prev: state.current_index > 0,
            next: state.current_index < last,
            close: true,
            open_original: true,
            filmstrip: true,
        }
    }

    pub fn events(&self) -> &E {
        &self.events
    }

    pub fn events_mut(&mut self) -> &mut E {
        &mut self.events
    }

    pub fn into_events(self) -> E {
        self.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use crate::viewer::input::Key;

    fn desktop() -> Viewport {
        Viewport::new(1400, 900)
    }

    fn open_viewer(photos: PhotoSet, id: usize) -> ViewerController<RecordingEvents> {
        let mut viewer = ViewerController::new(RecordingEvents::default());
        viewer.open(Arc::new(photos), id, desktop()).unwrap();
        viewer
    }

    // =========================================================================
    // Opening
    // =========================================================================

    #[test]
    fn starts_closed() {
        let viewer = ViewerController::new(RecordingEvents::default());
        assert!(!viewer.is_open());
        assert!(viewer.state().is_none());
        assert!(viewer.filmstrip().is_empty());
        assert_eq!(viewer.controls(), Controls::default());
    }

    #[test]
    fn open_computes_initial_state() {
        let viewer = open_viewer(sequential_set(5), 2);
        let state = viewer.state().unwrap();
        assert_eq!(state.current_index, 2);
        assert_eq!(state.direction, Direction::None);
        assert_eq!(state.display_dimensions, Dimensions::new(1280, 640));
        assert!(!state.image_loaded);
        assert!(viewer.events().changes.is_empty());
    }

    #[test]
    fn open_with_unknown_id_stays_closed() {
        let mut viewer = ViewerController::new(RecordingEvents::default());
        let err = viewer
            .open(Arc::new(sequential_set(3)), 3, desktop())
            .unwrap_err();
        assert_eq!(err, GalleryError::NotFound(3));
        assert!(!viewer.is_open());
        assert!(viewer.events().closes.is_empty());
    }

    #[test]
    fn failed_reopen_closes_open_viewer() {
        let mut viewer = open_viewer(sequential_set(3), 1);
        assert!(viewer.open(Arc::new(sequential_set(3)), 9, desktop()).is_err());
        assert!(!viewer.is_open());
        assert_eq!(viewer.events().closes, vec![1]);
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    #[test]
    fn navigate_updates_state_and_reports_once() {
        let mut viewer = open_viewer(sequential_set(5), 1);
        viewer.on_image_loaded();
        let outcome = viewer.on_navigate(3, Direction::Forward);
        assert_eq!(
            outcome,
            Outcome::Navigated {
                id: 3,
                direction: Direction::Forward
            }
        );
        let state = viewer.state().unwrap();
        assert_eq!(state.current_index, 3);
        assert_eq!(state.direction, Direction::Forward);
        assert!(!state.image_loaded);
        assert_eq!(viewer.events().changes, vec![3]);
    }

    #[test]
    fn repeated_identical_navigation_reports_once() {
        let mut viewer = open_viewer(sequential_set(5), 1);
        viewer.on_navigate(2, Direction::Forward);
        assert_eq!(
            viewer.on_navigate(2, Direction::Forward),
            Outcome::Ignored(Ignored::AlreadyCurrent)
        );
        assert_eq!(viewer.events().changes, vec![2]);
    }

    #[test]
    fn navigation_to_unknown_id_is_dropped() {
        let mut viewer = open_viewer(sequential_set(5), 1);
        viewer.on_image_loaded();
        assert_eq!(
            viewer.on_navigate(42, Direction::Forward),
            Outcome::Ignored(Ignored::NotFound(42))
        );
        let state = viewer.state().unwrap();
        assert_eq!(state.current_index, 1);
        assert!(state.image_loaded);
        assert!(viewer.events().changes.is_empty());
    }

    #[test]
    fn navigation_while_closed_is_dropped() {
        let mut viewer = ViewerController::new(RecordingEvents::default());
        assert_eq!(
            viewer.on_navigate(0, Direction::Forward),
            Outcome::Ignored(Ignored::NotOpen)
        );
    }

    #[test]
    fn last_navigation_wins() {
        let mut viewer = open_viewer(sequential_set(10), 0);
        viewer.on_navigate(4, Direction::Forward);
        viewer.on_navigate(7, Direction::Forward);
        viewer.on_navigate(5, Direction::Backward);
        assert_eq!(viewer.state().unwrap().current_index, 5);
        assert_eq!(viewer.state().unwrap().direction, Direction::Backward);
        assert_eq!(viewer.events().changes, vec![4, 7, 5]);
    }

    #[test]
    fn navigation_recomputes_dimensions_for_new_photo() {
        let records = vec![photo(0, 0, 2000, 1000), photo(1, 1, 800, 1600)];
        let mut viewer = open_viewer(crate::photoset::PhotoSet::new(records).unwrap(), 0);
        viewer.on_navigate(1, Direction::Forward);
        assert_eq!(
            viewer.state().unwrap().display_dimensions,
            Dimensions::new(400, 800)
        );
    }

    // =========================================================================
    // Loading and chrome
    // =========================================================================

    #[test]
    fn chrome_hidden_until_loaded() {
        let mut viewer = open_viewer(sequential_set(5), 2);
        assert_eq!(viewer.controls(), Controls::default());
        viewer.on_image_loaded();
        let controls = viewer.controls();
        assert!(controls.prev && controls.next && controls.close);
        assert!(controls.open_original && controls.filmstrip);
    }

    #[test]
    fn navigation_hides_chrome_again() {
        let mut viewer = open_viewer(sequential_set(5), 2);
        viewer.on_image_loaded();
        viewer.on_navigate(3, Direction::Forward);
        assert_eq!(viewer.controls(), Controls::default());
    }

    #[test]
    fn prev_absent_on_first_photo() {
        let mut viewer = open_viewer(sequential_set(5), 0);
        viewer.on_image_loaded();
        assert!(!viewer.controls().prev);
        assert!(viewer.controls().next);
    }

    #[test]
    fn next_absent_on_last_photo() {
        let mut viewer = open_viewer(sequential_set(5), 4);
        viewer.on_image_loaded();
        assert!(viewer.controls().prev);
        assert!(!viewer.controls().next);
    }

    #[test]
    fn single_photo_has_neither_button() {
        let mut viewer = open_viewer(sequential_set(1), 0);
        viewer.on_image_loaded();
        let controls = viewer.controls();
        assert!(!controls.prev && !controls.next);
        assert!(controls.close);
    }

    #[test]
    fn stale_load_event_is_ignored() {
        let mut viewer = open_viewer(sequential_set(5), 1);
        viewer.on_navigate(2, Direction::Forward);
        viewer.on_image_loaded_for(1);
        assert!(!viewer.state().unwrap().image_loaded);
        viewer.on_image_loaded_for(2);
        assert!(viewer.state().unwrap().image_loaded);
    }

    #[test]
    fn load_failure_keeps_chrome_hidden() {
        let mut viewer = open_viewer(sequential_set(5), 1);
        let err = viewer.on_image_failed("404").unwrap();
        assert_eq!(
            err,
            GalleryError::LoadFailure {
                id: 1,
                reason: "404".into()
            }
        );
        assert!(!viewer.state().unwrap().image_loaded);
        assert_eq!(viewer.controls(), Controls::default());
    }

    // =========================================================================
    // Closing
    // =========================================================================

    #[test]
    fn close_reports_current_id() {
        let mut viewer = open_viewer(sequential_set(5), 1);
        viewer.on_navigate(3, Direction::Forward);
        assert_eq!(viewer.close(), Some(3));
        assert!(!viewer.is_open());
        assert_eq!(viewer.events().closes, vec![3]);
    }

    #[test]
    fn close_mid_flight_reports_latest_navigation() {
        let mut viewer = open_viewer(sequential_set(5), 1);
        viewer.on_navigate(4, Direction::Forward);
        // image 4 never loaded
        viewer.close();
        assert_eq!(viewer.events().closes, vec![4]);
    }

    #[test]
    fn closing_twice_reports_once() {
        let mut viewer = open_viewer(sequential_set(5), 1);
        viewer.close();
        assert_eq!(viewer.close(), None);
        assert_eq!(viewer.events().closes, vec![1]);
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    #[test]
    fn dispatch_swipe_follows_navigation_order() {
        let mut viewer = open_viewer(set_with_navigation(&[1, 2, 0]), 2);
        let outcome = viewer.dispatch(&Input::Swipe(SwipeDirection::Left));
        assert_eq!(
            outcome,
            Outcome::Navigated {
                id: 0,
                direction: Direction::Forward
            }
        );
    }

    #[test]
    fn dispatch_repeated_swipe_events_for_one_gesture() {
        let mut viewer = open_viewer(sequential_set(5), 1);
        let swipe = Input::Swipe(SwipeDirection::Left);
        assert!(matches!(viewer.dispatch(&swipe), Outcome::Navigated { id: 2, .. }));
        // Second handler firing for the same physical swipe
        assert_eq!(viewer.dispatch(&swipe), Outcome::Ignored(Ignored::SwipeRepeat));
        assert_eq!(viewer.state().unwrap().current_index, 2);
        assert_eq!(viewer.events().changes, vec![2]);

        viewer.on_image_loaded();
        assert!(matches!(viewer.dispatch(&swipe), Outcome::Navigated { id: 3, .. }));
        assert_eq!(viewer.events().changes, vec![2, 3]);
    }

    #[test]
    fn opposite_swipe_is_not_a_repeat() {
        let mut viewer = open_viewer(sequential_set(5), 1);
        viewer.dispatch(&Input::Swipe(SwipeDirection::Left));
        viewer.dispatch(&Input::Swipe(SwipeDirection::Right));
        assert_eq!(viewer.state().unwrap().current_index, 1);
        assert_eq!(viewer.events().changes, vec![2, 1]);
    }

    #[test]
    fn repeated_keys_are_not_suppressed() {
        let mut viewer = open_viewer(sequential_set(5), 1);
        viewer.dispatch(&Input::Key(Key::ArrowRight));
        viewer.dispatch(&Input::Key(Key::ArrowRight));
        assert_eq!(viewer.events().changes, vec![2, 3]);
    }

    #[test]
    fn filmstrip_selection_clears_pending_swipe() {
        let mut viewer = open_viewer(sequential_set(5), 1);
        viewer.dispatch(&Input::Swipe(SwipeDirection::Left));
        viewer.dispatch(&Input::FilmstripSelect(0));
        assert!(matches!(
            viewer.dispatch(&Input::Swipe(SwipeDirection::Left)),
            Outcome::Navigated { id: 1, .. }
        ));
    }

    #[test]
    fn dispatch_escape_closes() {
        let mut viewer = open_viewer(sequential_set(5), 3);
        assert_eq!(
            viewer.dispatch(&Input::Key(Key::Escape)),
            Outcome::Closed { last_id: 3 }
        );
        assert_eq!(viewer.events().closes, vec![3]);
    }

    #[test]
    fn dispatch_at_boundary_is_ignored() {
        let mut viewer = open_viewer(sequential_set(5), 0);
        assert_eq!(
            viewer.dispatch(&Input::PrevButton),
            Outcome::Ignored(Ignored::NoTarget)
        );
        assert!(viewer.events().changes.is_empty());
    }

    #[test]
    fn dispatch_while_closed() {
        let mut viewer = ViewerController::new(RecordingEvents::default());
        assert_eq!(
            viewer.dispatch(&Input::NextButton),
            Outcome::Ignored(Ignored::NotOpen)
        );
    }

    // =========================================================================
    // Viewport
    // =========================================================================

    #[test]
    fn resize_recomputes_dimensions() {
        let signal = ViewportSignal::new(desktop());
        let mut viewer = ViewerController::new(RecordingEvents::default());
        viewer
            .open_with_signal(Arc::new(sequential_set(3)), 0, &signal)
            .unwrap();
        assert!(!viewer.sync_viewport());

        signal.set(Viewport::new(900, 900));
        signal.set(Viewport::new(800, 900));
        assert!(viewer.sync_viewport());
        assert_eq!(
            viewer.state().unwrap().display_dimensions,
            Dimensions::new(700, 350)
        );
        assert!(!viewer.sync_viewport());
    }

    #[test]
    fn close_releases_viewport_subscription() {
        let signal = ViewportSignal::new(desktop());
        let mut viewer = ViewerController::new(RecordingEvents::default());
        for _ in 0..3 {
            viewer
                .open_with_signal(Arc::new(sequential_set(3)), 0, &signal)
                .unwrap();
            assert_eq!(signal.subscriber_count(), 1);
            viewer.close();
            assert_eq!(signal.subscriber_count(), 0);
        }
    }

    #[test]
    fn reopen_replaces_subscription() {
        let signal = ViewportSignal::new(desktop());
        let mut viewer = ViewerController::new(RecordingEvents::default());
        viewer
            .open_with_signal(Arc::new(sequential_set(3)), 0, &signal)
            .unwrap();
        viewer
            .open_with_signal(Arc::new(sequential_set(3)), 1, &signal)
            .unwrap();
        assert_eq!(signal.subscriber_count(), 1);
    }

    // =========================================================================
    // Collection refresh
    // =========================================================================

    #[test]
    fn refresh_keeps_current_photo() {
        let mut viewer = open_viewer(sequential_set(5), 2);
        viewer.on_image_loaded();
        let outcome = viewer.replace_photos(Arc::new(sequential_set(8)));
        assert_eq!(outcome, Outcome::Refreshed { id: 2 });
        assert_eq!(viewer.state().unwrap().current_index, 2);
        assert!(viewer.state().unwrap().image_loaded);
        assert_eq!(viewer.photos().unwrap().len(), 8);
    }

    #[test]
    fn refresh_without_current_photo_closes() {
        let mut viewer = open_viewer(sequential_set(5), 4);
        let outcome = viewer.replace_photos(Arc::new(sequential_set(2)));
        assert_eq!(outcome, Outcome::Closed { last_id: 4 });
        assert_eq!(viewer.events().closes, vec![4]);
    }

    // =========================================================================
    // Filmstrip and transition
    // =========================================================================

    #[test]
    fn filmstrip_window_follows_current_photo() {
        let mut viewer = open_viewer(sequential_set(100), 50);
        assert_eq!(viewer.filmstrip().len(), 31);
        viewer.on_navigate(99, Direction::Forward);
        assert_eq!(viewer.filmstrip().len(), 16);
    }

    #[test]
    fn transition_tracks_direction() {
        let mut viewer = open_viewer(sequential_set(5), 2);
        assert!(viewer.transition().unwrap().is_fade());
        viewer.on_navigate(1, Direction::Backward);
        assert_eq!(viewer.transition().unwrap().enter_x, -1000);
    }
}
