// ABOUTME: Page-layout schemas describing where the judge site keeps listing rows and problem fragments.
// ABOUTME: Schemas are plain data so a site redesign only touches the schema JSON and its tests.

//! Schema definitions for judge-site extraction.
//!
//! A [`ListingSchema`] describes one listing table layout (step pages and the
//! problemset search page differ in table id and column order). A
//! [`DetailSchema`] names the anchors of a single problem page. Both are
//! grouped in a [`SiteSchema`].

use serde::{Deserialize, Serialize};

/// Selectors for one listing table layout.
///
/// `rows` is evaluated against the whole document; `id`, `title` and
/// `difficulty` are evaluated relative to each selected row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ListingSchema {
    /// Human-readable schema name, used in diagnostics
    pub name: String,
    /// Selector for the table rows
    pub rows: String,
    /// Cell selector carrying the problem id
    pub id: String,
    /// Cell selector carrying the problem title
    pub title: String,
    /// Cell selector carrying the difficulty, if the layout has one
    #[serde(default)]
    pub difficulty: Option<String>,
    /// Maximum number of problems kept from one page
    #[serde(default)]
    pub limit: Option<usize>,
}

impl ListingSchema {
    /// All selectors used by this schema, for warming the selector cache.
    pub fn selectors(&self) -> Vec<&str> {
        let mut out = vec![self.rows.as_str(), self.id.as_str(), self.title.as_str()];
        if let Some(ref difficulty) = self.difficulty {
            out.push(difficulty);
        }
        out
    }
}

/// Anchors on a single problem page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DetailSchema {
    pub title: String,
    pub description: String,
    pub input: String,
    pub output: String,
    pub sample_input: String,
    pub sample_output: String,
}

impl DetailSchema {
    /// All selectors used by this schema, for warming the selector cache.
    pub fn selectors(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.description.as_str(),
            self.input.as_str(),
            self.output.as_str(),
            self.sample_input.as_str(),
            self.sample_output.as_str(),
        ]
    }
}

/// The complete set of layouts for one judge site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SiteSchema {
    /// Layout of `/step/{n}` pages
    pub step_listing: ListingSchema,
    /// Layout of `/problemset?algo={id}` pages
    pub category_listing: ListingSchema,
    /// Layout of `/problem/{id}` pages
    pub detail: DetailSchema,
}

impl SiteSchema {
    /// All selectors across every layout.
    pub fn selectors(&self) -> Vec<&str> {
        let mut out = self.step_listing.selectors();
        out.extend(self.category_listing.selectors());
        out.extend(self.detail.selectors());
        out
    }
}
