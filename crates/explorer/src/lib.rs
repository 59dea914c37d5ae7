// ABOUTME: Library entry point for the Baekjoon problem explorer core.
// ABOUTME: Re-exports the tree model, cache, catalog, renderer, viewer, and host boundary.

//! boj-explorer - a lazily-expanded catalog of Baekjoon problems and a
//! single reusable problem document, for embedding in an editor-like host.
//!
//! The host implements [`DocumentHost`], registers [`REFRESH_COMMAND`] and
//! [`OPEN_PROBLEM_COMMAND`] against [`Explorer::refresh`] and
//! [`Explorer::open_problem`], and drives its tree view from
//! [`Explorer::tree`].

pub mod cache;
pub mod catalog;
pub mod explorer;
pub mod host;
pub mod logging;
pub mod render;
pub mod tree;
pub mod viewer;

/// Command id for refreshing the problem tree.
pub const REFRESH_COMMAND: &str = "baekjoon.refresh";
/// Command id for opening a problem; its single argument is the problem id.
pub const OPEN_PROBLEM_COMMAND: &str = "baekjoon.openProblem";
/// View id of the problem tree.
pub const TREE_VIEW_ID: &str = "baekjoonExplorer";

pub use crate::cache::{ListingCache, ListingKey};
pub use crate::catalog::CategoryCatalog;
pub use crate::explorer::{Explorer, REFRESH_MESSAGE};
pub use crate::host::{DocumentHost, DocumentLanguage};
pub use crate::logging::init_logging;
pub use crate::render::{render_problem, FragmentFormat, RenderOptions};
pub use crate::tree::{
    Collapsibility, Group, Icon, NodeKind, OpenCommand, ProblemTree, TreeEvent, TreeNode,
    STEP_TITLES,
};
pub use crate::viewer::{OpenOutcome, ProblemViewer, OPEN_ERROR_MESSAGE};

pub use boj_scrape::{Client, ClientBuilder, Problem, ProblemDetail, ScrapeError};
