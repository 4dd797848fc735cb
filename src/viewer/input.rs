//! Input adapters: keyboard, buttons, filmstrip clicks and swipe gestures.
//!
//! Each input is translated into an [`Intent`] against the current photo.
//! Two adjacency rules coexist:
//!
//! | Input | Target | Direction |
//! |---|---|---|
//! | `ArrowRight`, next button | `id + 1` | forward |
//! | `ArrowLeft`, prev button | `id - 1` | backward |
//! | left swipe | next in navigation order | forward |
//! | right swipe | previous in navigation order | backward |
//! | filmstrip thumbnail | that id | from id comparison |
//! | `Escape`, close button | — | close |
//!
//! Keys and buttons use raw id adjacency; swipes follow the display order,
//! which may be shuffled.

use super::transition::Direction;
use crate::photoset::{NavStep, PhotoSet};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Escape,
    Other(String),
}

impl Key {
    /// Parse a DOM `KeyboardEvent.key` value.
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            "Escape" | "Esc" => Key::Escape,
            other => Key::Other(other.to_string()),
        }
    }
}

/// Horizontal direction the pointer travelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SwipeDirection {
    Left,
    Right,
}

/// Everything the lightbox reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Key(Key),
    Swipe(SwipeDirection),
    PrevButton,
    NextButton,
    CloseButton,
    FilmstripSelect(usize),
}

/// What an input asks the viewer to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Navigate { target: usize, direction: Direction },
    Close,
    /// Nothing to do: boundary reached or input not bound.
    Nothing,
}

/// Translate `input` into an intent while `current` is displayed.
pub fn resolve_intent(photos: &PhotoSet, current: usize, input: &Input) -> Intent {
    match input {
        Input::Key(Key::ArrowRight) | Input::NextButton => step_by_id(photos, current, 1),
        Input::Key(Key::ArrowLeft) | Input::PrevButton => step_by_id(photos, current, -1),
        Input::Key(Key::Escape) | Input::CloseButton => Intent::Close,
        Input::Key(Key::Other(_)) => Intent::Nothing,
        Input::Swipe(SwipeDirection::Left) => step_by_navigation(photos, current, NavStep::Next),
        Input::Swipe(SwipeDirection::Right) => {
            step_by_navigation(photos, current, NavStep::Previous)
        }
        Input::FilmstripSelect(target) => Intent::Navigate {
            target: *target,
            direction: Direction::between(current, *target),
        },
    }
}

fn step_by_id(photos: &PhotoSet, current: usize, delta: isize) -> Intent {
    let target = current.checked_add_signed(delta);
    match target {
        Some(target) if photos.contains(target) => Intent::Navigate {
            target,
            direction: if delta > 0 {
                Direction::Forward
            } else {
                Direction::Backward
            },
        },
        _ => Intent::Nothing,
    }
}

fn step_by_navigation(photos: &PhotoSet, current: usize, step: NavStep) -> Intent {
    match photos.neighbor_by_navigation_order(current, step) {
        Some(next) => Intent::Navigate {
            target: next.id,
            direction: match step {
                NavStep::Next => Direction::Forward,
                NavStep::Previous => Direction::Backward,
            },
        },
        None => Intent::Nothing,
    }
}

/// Default horizontal travel, in pixels, before a drag counts as a swipe.
pub const DEFAULT_SWIPE_THRESHOLD: f64 = 50.0;

/// Turns a pointer or touch press/release pair into a swipe.
///
/// A release only counts once per press, so a physical swipe can never
/// produce two gestures.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    threshold: f64,
    origin: Option<(f64, f64)>,
}

impl SwipeTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            origin: None,
        }
    }

    pub fn begin(&mut self, x: f64, y: f64) {
        self.origin = Some((x, y));
    }

    pub fn cancel(&mut self) {
        self.origin = None;
    }

    /// Finish the gesture at `(x, y)`.
    ///
    /// Horizontal travel must reach the threshold and exceed vertical travel.
    pub fn end(&mut self, x: f64, y: f64) -> Option<SwipeDirection> {
        let (x0, y0) = self.origin.take()?;
        let dx = x - x0;
        let dy = y - y0;
        if dx.abs() < self.threshold || dx.abs() <= dy.abs() {
            return None;
        }
        Some(if dx < 0.0 {
            SwipeDirection::Left
        } else {
            SwipeDirection::Right
        })
    }
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD)
    }
}
