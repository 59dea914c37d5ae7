// ABOUTME: Inbound command surface the host registers: refresh and open-problem.
// ABOUTME: Wires the problem tree, the viewer and the document host together.

use boj_scrape::Client;
use tracing::info;

use crate::host::DocumentHost;
use crate::render::RenderOptions;
use crate::tree::ProblemTree;
use crate::viewer::{OpenOutcome, ProblemViewer};

/// Notification shown after a refresh.
pub const REFRESH_MESSAGE: &str = "백준 문제 목록을 새로고침했습니다.";

/// The explorer as seen by a host: one tree, one viewer, one host.
pub struct Explorer<H: DocumentHost> {
    host: H,
    tree: ProblemTree,
    viewer: ProblemViewer<H::Handle>,
}

impl<H> Explorer<H>
where
    H: DocumentHost,
    H::Handle: PartialEq,
{
    pub fn new(host: H, client: Client) -> Self {
        Self::with_render_options(host, client, RenderOptions::default())
    }

    pub fn with_render_options(host: H, client: Client, render: RenderOptions) -> Self {
        info!("baekjoon explorer activated");
        Self {
            host,
            tree: ProblemTree::new(client),
            viewer: ProblemViewer::new(render),
        }
    }

    /// Tree data source for the host's tree view.
    pub fn tree(&self) -> &ProblemTree {
        &self.tree
    }

    pub fn viewer(&self) -> &ProblemViewer<H::Handle> {
        &self.viewer
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// `baekjoon.refresh`: drop cached listings, signal the tree, tell the user.
    pub async fn refresh(&self) {
        self.tree.refresh();
        self.host.show_info(REFRESH_MESSAGE).await;
    }

    /// `baekjoon.openProblem`: show `problem_id` in the problem document.
    pub async fn open_problem(&self, problem_id: &str) -> OpenOutcome {
        self.viewer
            .open(&self.host, self.tree.client(), problem_id)
            .await
    }

    /// Forward a host notification that `handle` was closed.
    pub fn document_closed(&self, handle: &H::Handle) {
        self.viewer.document_closed(handle);
    }
}
