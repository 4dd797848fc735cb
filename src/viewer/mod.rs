//! Lightbox viewer: state machine, layout and input handling.
//!
//! | Module | Role |
//! |---|---|
//! | [`controller`] | Open/navigate/close state machine and callbacks |
//! | [`layout`] | Pure display-dimension math |
//! | [`transition`] | Direction-aware slide offsets |
//! | [`viewport`] | Window-size signal with scoped subscriptions |
//! | [`input`] | Keyboard, button, filmstrip and swipe adapters |

pub mod controller;
pub mod input;
pub mod layout;
pub mod transition;
pub mod viewport;

pub use controller::{
    Controls, Ignored, Outcome, ViewerController, ViewerEvents, ViewerSettings, ViewerState,
};
pub use input::{Input, Intent, Key, SwipeDirection, SwipeTracker, resolve_intent};
pub use layout::{LayoutLimits, compute_display_dimensions, display_dimensions};
pub use transition::{Direction, Transition};
pub use viewport::{ViewportSignal, ViewportSubscription};
