// ABOUTME: Loader for the built-in judge-site schema from embedded JSON data.
// ABOUTME: Provides load_builtin_schema() to initialize the default SiteSchema.

//! Built-in schema loader.

use crate::extractors::compiled::precompile_selectors;
use crate::extractors::schema::SiteSchema;

/// Embedded JSON describing the acmicpc.net page layouts.
const BUILTIN_SCHEMA_JSON: &str = include_str!("../../data/acmicpc.json");

/// Loads the built-in site schema from embedded JSON and warms the selector cache.
///
/// # Panics
///
/// Panics if the embedded JSON is malformed or cannot be deserialized.
pub fn load_builtin_schema() -> SiteSchema {
    let schema: SiteSchema =
        serde_json::from_str(BUILTIN_SCHEMA_JSON).expect("failed to parse builtin schema");
    precompile_selectors(schema.selectors());
    schema
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::compiled::get_or_compile;

    #[test]
    fn load_builtin_schema_succeeds() {
        let schema = load_builtin_schema();
        assert_eq!(schema.step_listing.name, "step");
        assert_eq!(schema.category_listing.name, "problemset");
    }

    #[test]
    fn builtin_category_listing_is_capped_at_50() {
        let schema = load_builtin_schema();
        assert_eq!(schema.category_listing.limit, Some(50));
        assert_eq!(schema.step_listing.limit, None);
    }

    #[test]
    fn builtin_selectors_all_compile() {
        let schema = load_builtin_schema();
        for css in schema.selectors() {
            assert!(get_or_compile(css).is_some(), "selector failed: {}", css);
        }
    }

    #[test]
    fn builtin_detail_uses_problem_anchors() {
        let schema = load_builtin_schema();
        assert_eq!(schema.detail.title, "#problem_title");
        assert_eq!(schema.detail.description, "#problem_description");
        assert_eq!(schema.detail.input, "#problem_input");
        assert_eq!(schema.detail.output, "#problem_output");
    }
}
