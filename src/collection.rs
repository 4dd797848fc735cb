//! Building photo collections from the media host's search results.
//!
//! The media host's search API returns one resource per uploaded image. A
//! collection is built from a JSON export of that response: each resource
//! becomes a [`PhotoRecord`] whose `id` is its position, and whose
//! `navigation_id` comes from the configured [`NavigationOrder`].
//!
//! ## Shuffled Order
//!
//! A shuffled order must be stable across page loads that share a seed, so it
//! is derived from content hashes rather than a random number generator:
//! resources are ranked by SHA-256 of `"{seed}:{public_id}"`, ties broken by
//! id, and a record's navigation id is its rank.

use crate::types::{PhotoRecord, dimension};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CollectionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Search API response, reduced to the fields the gallery reads.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchResult {
    pub resources: Vec<SearchResource>,
}

/// A single uploaded image as reported by the media host.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchResource {
    pub public_id: String,
    pub format: String,
    #[serde(deserialize_with = "dimension")]
    pub width: u32,
    #[serde(deserialize_with = "dimension")]
    pub height: u32,
    #[serde(default)]
    pub blur_placeholder: Option<String>,
}

/// How `navigation_id` is assigned at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum NavigationOrder {
    /// Display order equals id order.
    #[default]
    Sequential,
    /// Deterministic permutation keyed by `seed`.
    Shuffled { seed: u64 },
}

/// Read a search export from disk.
pub fn load_search_export(path: &Path) -> Result<SearchResult, CollectionError> {
    let content = fs::read_to_string(path)?;
    let result: SearchResult = serde_json::from_str(&content)?;
    tracing::info!(
        path = %path.display(),
        resources = result.resources.len(),
        "loaded search export"
    );
    Ok(result)
}

/// Turn search resources into records with dense ids and a navigation order.
pub fn build_records(resources: &[SearchResource], order: NavigationOrder) -> Vec<PhotoRecord> {
    let navigation_ids = match order {
        NavigationOrder::Sequential => (0..resources.len()).collect(),
        NavigationOrder::Shuffled { seed } => shuffled_ranks(resources, seed),
    };

    resources
        .iter()
        .zip(navigation_ids)
        .enumerate()
        .map(|(id, (resource, navigation_id))| PhotoRecord {
            id,
            navigation_id,
            width: resource.width,
            height: resource.height,
            public_id: resource.public_id.clone(),
            format: resource.format.clone(),
            blur_placeholder: resource.blur_placeholder.clone(),
        })
        .collect()
}

/// `ranks[id]` is the display position of resource `id`.
fn shuffled_ranks(resources: &[SearchResource], seed: u64) -> Vec<usize> {
    let mut keyed: Vec<(String, usize)> = resources
        .iter()
        .enumerate()
        .map(|(id, r)| (shuffle_key(seed, &r.public_id), id))
        .collect();
    keyed.sort();

    let mut ranks = vec![0; resources.len()];
    for (rank, (_, id)) in keyed.into_iter().enumerate() {
        ranks[id] = rank;
    }
    ranks
}

fn shuffle_key(seed: u64, public_id: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(format!("{seed}:{public_id}").as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Human-readable title from the last segment of a public id.
///
/// `gallery/001-misty-dawn` → `misty dawn`. A purely numeric name stays as is.
pub fn title_from_public_id(public_id: &str) -> String {
    let name = public_id.rsplit('/').next().unwrap_or(public_id);
    let name = match name.split_once('-') {
        Some((prefix, rest)) if !rest.is_empty() && prefix.parse::<u32>().is_ok() => rest,
        _ => name,
    };
    name.replace(['-', '_'], " ")
}
