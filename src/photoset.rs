//! PhotoSet resolver.
//!
//! Owns one immutable collection of [`PhotoRecord`]s and answers the three
//! questions the viewer asks: which record is current, which records belong
//! in the filmstrip, and which record comes before or after the current one
//! in display order.
//!
//! The input contract (dense ids, navigation ids forming a permutation) is
//! checked once in [`PhotoSet::new`]. Lookups after that are O(1) and never
//! re-validate.

use crate::error::GalleryError;
use crate::types::PhotoRecord;

/// Filmstrip half-width used when the config does not override it.
pub const DEFAULT_FILMSTRIP_RADIUS: usize = 15;

/// One step along the navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavStep {
    Previous,
    Next,
}

impl NavStep {
    fn apply(self, navigation_id: usize) -> Option<usize> {
        match self {
            NavStep::Previous => navigation_id.checked_sub(1),
            NavStep::Next => navigation_id.checked_add(1),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PhotoSet {
    records: Vec<PhotoRecord>,
    /// `by_navigation[navigation_id]` is the position of that record.
    by_navigation: Vec<usize>,
}

impl PhotoSet {
    /// Validate a collection and index it by navigation order.
    pub fn new(records: Vec<PhotoRecord>) -> Result<Self, GalleryError> {
        let len = records.len();
        let mut by_navigation: Vec<Option<usize>> = vec![None; len];

        for (position, record) in records.iter().enumerate() {
            if record.id != position {
                return Err(violation(format!(
                    "photo at position {position} has id {}",
                    record.id
                )));
            }
            let slot = by_navigation.get_mut(record.navigation_id).ok_or_else(|| {
                violation(format!(
                    "photo {} has navigation id {} outside 0..{len}",
                    record.id, record.navigation_id
                ))
            })?;
            if let Some(other) = slot.replace(position) {
                return Err(violation(format!(
                    "photos {other} and {} share navigation id {}",
                    record.id, record.navigation_id
                )));
            }
        }

        // N records with N distinct in-range navigation ids fill every slot.
        let by_navigation = by_navigation.into_iter().flatten().collect();
        tracing::debug!(photos = len, "photo set indexed");
        Ok(Self {
            records,
            by_navigation,
        })
    }

    /// The record whose id is `requested_id`.
    pub fn resolve_current(&self, requested_id: usize) -> Result<&PhotoRecord, GalleryError> {
        self.records
            .get(requested_id)
            .ok_or(GalleryError::NotFound(requested_id))
    }

    /// Records with ids in `[current_id - radius, current_id + radius]`, in id
    /// order. Clipped at both ends of the collection, never wrapped.
    pub fn windowed_filmstrip(&self, current_id: usize, radius: usize) -> &[PhotoRecord] {
        let start = current_id.saturating_sub(radius).min(self.records.len());
        let end = current_id
            .saturating_add(radius)
            .saturating_add(1)
            .min(self.records.len());
        &self.records[start..end]
    }

    /// The record one step away from `current_id` in navigation order.
    ///
    /// `None` when the current record sits at that end of the navigation order
    /// or does not exist.
    pub fn neighbor_by_navigation_order(
        &self,
        current_id: usize,
        step: NavStep,
    ) -> Option<&PhotoRecord> {
        let current = self.records.get(current_id)?;
        let target = step.apply(current.navigation_id)?;
        let position = *self.by_navigation.get(target)?;
        self.records.get(position)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Highest valid id, `None` for an empty set.
    pub fn last_id(&self) -> Option<usize> {
        self.records.len().checked_sub(1)
    }

    pub fn contains(&self, id: usize) -> bool {
        id < self.records.len()
    }

    pub fn records(&self) -> &[PhotoRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &PhotoRecord> {
        self.records.iter()
    }

    /// Records in navigation (display) order.
    pub fn in_navigation_order(&self) -> impl Iterator<Item = &PhotoRecord> {
        self.by_navigation.iter().map(|&pos| &self.records[pos])
    }
}

fn violation(message: String) -> GalleryError {
    tracing::error!("{message}");
    GalleryError::InvariantViolation(message)
}
