//! Direction-aware slide transition between successive images.
//!
//! The direction is recorded from the input that caused the navigation, not
//! reconstructed by comparing ids: a swipe in a shuffled display order can
//! move "forward" to a lower id.

use serde::Serialize;

/// Which way the most recent navigation moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Direction {
    Backward,
    #[default]
    None,
    Forward,
}

impl Direction {
    /// `-1`, `0` or `+1`.
    pub fn signum(self) -> i8 {
        match self {
            Direction::Backward => -1,
            Direction::None => 0,
            Direction::Forward => 1,
        }
    }

    /// Direction of travel from `from` to `to` in id order.
    pub fn between(from: usize, to: usize) -> Self {
        match to.cmp(&from) {
            std::cmp::Ordering::Greater => Direction::Forward,
            std::cmp::Ordering::Less => Direction::Backward,
            std::cmp::Ordering::Equal => Direction::None,
        }
    }
}

/// Horizontal offsets, in pixels, of the entering and exiting image.
///
/// The entering image slides from `enter_x` to 0; the exiting one slides
/// from 0 to `exit_x`. Both fade at the same time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Transition {
    pub enter_x: i32,
    pub exit_x: i32,
}

/// Default slide distance.
pub const DEFAULT_TRAVEL: i32 = 1000;

impl Transition {
    pub fn for_direction(direction: Direction, travel: i32) -> Self {
        let sign = direction.signum() as i32;
        Self {
            enter_x: travel.saturating_mul(sign),
            exit_x: travel.saturating_mul(-sign),
        }
    }

    /// No horizontal movement: a plain cross-fade.
    pub fn is_fade(self) -> bool {
        self.enter_x == 0 && self.exit_x == 0
    }
}
