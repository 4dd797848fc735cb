//! Scripted replay of viewer inputs.
//!
//! Drives a [`ViewerController`] with a sequence of named actions and records
//! what each one did. Used by the `walk` command to inspect navigation over a
//! real collection without a browser.

use crate::error::GalleryError;
use crate::photoset::PhotoSet;
use crate::types::{Dimensions, Viewport};
use crate::viewer::{
    Controls, Input, Key, Outcome, SwipeDirection, ViewerController, ViewerEvents, ViewerSettings,
};
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown action '{0}' (expected left, right, escape, swipe-left, swipe-right, prev, next, close, loaded or a photo id)")]
pub struct UnknownAction(pub String);

/// One scripted step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Input(Input),
    /// The displayed image finished loading.
    Loaded,
}

impl FromStr for Action {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = match s {
            "left" => Input::Key(Key::ArrowLeft),
            "right" => Input::Key(Key::ArrowRight),
            "escape" => Input::Key(Key::Escape),
            "swipe-left" => Input::Swipe(SwipeDirection::Left),
            "swipe-right" => Input::Swipe(SwipeDirection::Right),
            "prev" => Input::PrevButton,
            "next" => Input::NextButton,
            "close" => Input::CloseButton,
            "loaded" => return Ok(Action::Loaded),
            other => match other.parse::<usize>() {
                Ok(id) => Input::FilmstripSelect(id),
                Err(_) => return Err(UnknownAction(other.to_string())),
            },
        };
        Ok(Action::Input(input))
    }
}

/// Callbacks seen during a walk, in order.
#[derive(Debug, Default)]
struct Callbacks {
    pending: Vec<Callback>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Callback {
    IdentifierChange(usize),
    Close(usize),
}

impl ViewerEvents for Callbacks {
    fn on_identifier_change(&mut self, new_id: usize) {
        self.pending.push(Callback::IdentifierChange(new_id));
    }

    fn on_close(&mut self, last_id: usize) {
        self.pending.push(Callback::Close(last_id));
    }
}

/// Viewer state after one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkStep {
    /// Action as given on the command line.
    pub label: String,
    /// `None` for the initial open.
    pub outcome: Option<Outcome>,
    pub current: Option<usize>,
    pub display: Option<Dimensions>,
    pub controls: Controls,
    pub callbacks: Vec<Callback>,
}

/// Open on `start`, then apply `actions` in order.
///
/// Fails only if `start` does not resolve. Actions after a close are still
/// applied and reported as ignored.
pub fn walk(
    photos: Arc<PhotoSet>,
    start: usize,
    actions: &[(String, Action)],
    settings: ViewerSettings,
    viewport: Viewport,
) -> Result<Vec<WalkStep>, GalleryError> {
    let mut viewer = ViewerController::with_settings(Callbacks::default(), settings);
    viewer.open(photos, start, viewport)?;

    let mut steps = vec![snapshot(&mut viewer, format!("open {start}"), None)];
    for (label, action) in actions {
        let outcome = match action {
            Action::Input(input) => Some(viewer.dispatch(input)),
            Action::Loaded => {
                viewer.on_image_loaded();
                None
            }
        };
        steps.push(snapshot(&mut viewer, label.clone(), outcome));
    }
    Ok(steps)
}

fn snapshot(
    viewer: &mut ViewerController<Callbacks>,
    label: String,
    outcome: Option<Outcome>,
) -> WalkStep {
    let state = viewer.state().copied();
    WalkStep {
        label,
        outcome,
        current: state.map(|s| s.current_index),
        display: state.map(|s| s.display_dimensions),
        controls: viewer.controls(),
        callbacks: std::mem::take(&mut viewer.events_mut().pending),
    }
}
