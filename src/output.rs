//! CLI output formatting for all commands.
//!
//! # Information-First Display
//!
//! Every photo leads with its id and title; media-host details and the
//! navigation position follow as indented context lines.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Photos (3, sequential order)
//! 000 misty dawn
//!     Source: gallery/001-misty-dawn.jpg (2000x1000)
//!     Navigation: 000
//! ```
//!
//! ## Generate
//!
//! ```text
//! Grid → index.html
//! 000 misty dawn → p/0.html
//! 001 harbour → p/1.html
//!
//! Generated 2 photo pages in dist
//! ```
//!
//! ## Walk
//!
//! ```text
//! open 4 → 4 at 1280x640
//! right → 5 (forward) at 1280x640
//!     on_identifier_change(5)
//! loaded → 5 [prev next close original filmstrip]
//! close → closed at 5
//!     on_close(5)
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure: no I/O, no side effects.

use crate::collection::{NavigationOrder, title_from_public_id};
use crate::generate::GenerateResult;
use crate::photoset::PhotoSet;
use crate::viewer::{Controls, Direction, Ignored, Outcome};
use crate::walk::{Callback, WalkStep};

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format an id as 3-digit zero-padded.
fn format_index(id: usize) -> String {
    format!("{:0>3}", id)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn order_label(order: NavigationOrder) -> String {
    match order {
        NavigationOrder::Sequential => "sequential order".to_string(),
        NavigationOrder::Shuffled { seed } => format!("shuffled order, seed {seed}"),
    }
}

// ============================================================================
// check
// ============================================================================

/// Format the photo inventory of a validated collection.
pub fn format_check_output(photos: &PhotoSet, order: NavigationOrder) -> Vec<String> {
    let mut lines = vec![format!("Photos ({}, {})", photos.len(), order_label(order))];
    for photo in photos.iter() {
        lines.push(format!(
            "{} {}",
            format_index(photo.id()),
            title_from_public_id(&photo.public_id)
        ));
        lines.push(format!(
            "{}Source: {}.{} ({}x{})",
            indent(1),
            photo.public_id,
            photo.format,
            photo.width,
            photo.height
        ));
        lines.push(format!(
            "{}Navigation: {}",
            indent(1),
            format_index(photo.navigation_id())
        ));
    }
    lines
}

pub fn print_check_output(photos: &PhotoSet, order: NavigationOrder) {
    for line in format_check_output(photos, order) {
        println!("{}", line);
    }
}

// ============================================================================
// generate
// ============================================================================

pub fn format_generate_output(result: &GenerateResult) -> Vec<String> {
    let mut lines = vec!["Grid → index.html".to_string()];
    for page in &result.pages {
        lines.push(format!(
            "{} {} → {}",
            format_index(page.id),
            page.title,
            page.path
        ));
    }
    lines.push(String::new());
    let noun = if result.pages.len() == 1 { "page" } else { "pages" };
    lines.push(format!(
        "Generated {} photo {} in {}",
        result.pages.len(),
        noun,
        result.output_dir.display()
    ));
    lines
}

pub fn print_generate_output(result: &GenerateResult) {
    for line in format_generate_output(result) {
        println!("{}", line);
    }
}

// ============================================================================
// walk
// ============================================================================

fn controls_label(controls: Controls) -> String {
    let names: Vec<&str> = [
        (controls.prev, "prev"),
        (controls.next, "next"),
        (controls.close, "close"),
        (controls.open_original, "original"),
        (controls.filmstrip, "filmstrip"),
    ]
    .into_iter()
    .filter_map(|(shown, name)| shown.then_some(name))
    .collect();
    format!("[{}]", names.join(" "))
}

fn direction_label(direction: Direction) -> &'static str {
    match direction {
        Direction::Forward => "forward",
        Direction::Backward => "backward",
        Direction::None => "no direction",
    }
}

fn ignored_label(reason: Ignored) -> String {
    match reason {
        Ignored::NotOpen => "ignored (not open)".to_string(),
        Ignored::NotFound(id) => format!("ignored ({id} not found)"),
        Ignored::AlreadyCurrent => "ignored (already displayed)".to_string(),
        Ignored::NoTarget => "ignored (nothing there)".to_string(),
        Ignored::SwipeRepeat => "ignored (repeat of pending swipe)".to_string(),
    }
}

/// Format one replayed step: the action, its effect, then callbacks.
pub fn format_walk_step(step: &WalkStep) -> Vec<String> {
    let size = step
        .display
        .map(|d| format!(" at {}x{}", d.width, d.height))
        .unwrap_or_default();
    let effect = match (step.outcome, step.current) {
        (Some(Outcome::Navigated { id, direction }), _) => {
            format!("{id} ({}){size}", direction_label(direction))
        }
        (Some(Outcome::Closed { last_id }), _) => format!("closed at {last_id}"),
        (Some(Outcome::Refreshed { id }), _) => format!("{id} refreshed{size}"),
        (Some(Outcome::Ignored(reason)), _) => ignored_label(reason),
        (None, Some(id)) if step.controls != Controls::default() => {
            format!("{id} {}", controls_label(step.controls))
        }
        (None, Some(id)) => format!("{id}{size}"),
        (None, None) => "closed".to_string(),
    };

    let mut lines = vec![format!("{} → {}", step.label, effect)];
    for callback in &step.callbacks {
        lines.push(match callback {
            Callback::IdentifierChange(id) => format!("{}on_identifier_change({id})", indent(1)),
            Callback::Close(id) => format!("{}on_close({id})", indent(1)),
        });
    }
    lines
}

pub fn print_walk_output(steps: &[WalkStep]) {
    for step in steps {
        for line in format_walk_step(step) {
            println!("{}", line);
        }
    }
}
