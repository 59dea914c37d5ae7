// ABOUTME: Extraction strategies for the judge site's listing and problem pages.
// ABOUTME: Each page layout is a data schema; extraction code never hard-codes selectors.

//! Extraction module.
//!
//! Submodules:
//! - `schema`: page-layout schemas (listing tables, problem anchors).
//! - `loader`: the built-in acmicpc.net schema.
//! - `listing`: listing page -> `Vec<Problem>`.
//! - `detail`: problem page -> `ProblemDetail`.
//! - `select`: selector helpers shared by the extractors.
//! - `compiled`: process-wide compiled selector memo.

pub mod compiled;
pub mod detail;
pub mod listing;
pub mod loader;
pub mod schema;
pub mod select;
