// ABOUTME: Process-lifetime memo of extracted listings keyed by step number or category name.
// ABOUTME: Cleared wholesale on refresh; no eviction and no expiry.

use std::collections::HashMap;
use std::fmt;
use std::sync::Mutex;

use boj_scrape::Problem;
use serde::{Deserialize, Serialize};

/// Identifies one listing page.
///
/// The variant participates in equality, so a step and a category whose
/// labels coincide never share a cache entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListingKey {
    Step(u32),
    Category(String),
}

impl fmt::Display for ListingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingKey::Step(n) => write!(f, "step {}", n),
            ListingKey::Category(name) => write!(f, "category {}", name),
        }
    }
}

/// Listing cache shared between the tree and the command surface.
#[derive(Debug, Default)]
pub struct ListingCache {
    entries: Mutex<HashMap<ListingKey, Vec<Problem>>>,
}

impl ListingCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<ListingKey, Vec<Problem>>> {
        self.entries.lock().unwrap_or_else(|p| p.into_inner())
    }

    /// Cached problems for `key`, if present.
    pub fn get(&self, key: &ListingKey) -> Option<Vec<Problem>> {
        self.lock().get(key).cloned()
    }

    /// Store the problems of a listing, replacing any previous entry.
    pub fn put(&self, key: ListingKey, problems: Vec<Problem>) {
        self.lock().insert(key, problems);
    }

    /// Drop every entry.
    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
