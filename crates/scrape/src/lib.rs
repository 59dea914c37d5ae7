// ABOUTME: Library entry point for the judge-site scraper.
// ABOUTME: Re-exports the public API: Client, ClientBuilder, Problem, ProblemDetail, schemas, and errors.

//! boj-scrape - fetches and extracts problem data from the Baekjoon Online Judge.
//!
//! The crate knows two listing layouts (step pages and the problemset search
//! page) and the single-problem page. Layouts are described by data-only
//! schemas so the rest of the system never sees a CSS selector.
//!
//! # Example
//!
//! ```no_run
//! use boj_scrape::{Client, ScrapeError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), ScrapeError> {
//!     let client = Client::builder().build();
//!     for problem in client.step_problems(1).await? {
//!         println!("{}", problem.label());
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod extractors;
pub mod formats;
pub mod options;
pub mod resource;
pub mod result;

pub use crate::client::Client;
pub use crate::error::{ErrorCode, ScrapeError};
pub use crate::extractors::detail::extract_problem_detail;
pub use crate::extractors::listing::extract_listing;
pub use crate::extractors::loader::load_builtin_schema;
pub use crate::extractors::schema::{DetailSchema, ListingSchema, SiteSchema};
pub use crate::options::{ClientBuilder, Options, BROWSER_USER_AGENT, DEFAULT_BASE_URL};
pub use crate::result::{Problem, ProblemDetail};
