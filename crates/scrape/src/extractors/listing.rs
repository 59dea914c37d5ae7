// ABOUTME: Listing extraction: turns a step or problemset page into an ordered list of Problems.
// ABOUTME: Rows missing an id or title are skipped so one malformed row never drops the whole page.

use scraper::Html;
use tracing::debug;

use crate::extractors::schema::ListingSchema;
use crate::extractors::select::{select_all, text_within};
use crate::result::Problem;

/// Extracts the problems of a listing page using `schema`.
///
/// A row contributes a [`Problem`] only if both its id and title cells
/// resolve to non-empty trimmed text. Source order is preserved, and the
/// result is truncated to `schema.limit` when one is set.
pub fn extract_listing(markup: &str, schema: &ListingSchema) -> Vec<Problem> {
    let doc = Html::parse_document(markup);
    let rows = select_all(&doc, &schema.rows);
    if rows.is_empty() {
        debug!(schema = %schema.name, "listing has no rows");
    }

    let mut problems = Vec::new();
    let mut skipped = 0usize;
    for row in rows {
        let id = text_within(row, &schema.id);
        let title = text_within(row, &schema.title);
        if id.is_empty() || title.is_empty() {
            skipped += 1;
            continue;
        }
        let difficulty = schema
            .difficulty
            .as_deref()
            .map(|css| text_within(row, css))
            .filter(|d| !d.is_empty());
        problems.push(Problem {
            id,
            title,
            difficulty,
        });
    }

    if skipped > 0 {
        debug!(schema = %schema.name, skipped, "skipped malformed listing rows");
    }

    if let Some(limit) = schema.limit {
        problems.truncate(limit);
    }
    problems
}
