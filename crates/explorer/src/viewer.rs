// ABOUTME: Open-a-problem flow that keeps a single reusable problem document.
// ABOUTME: Fetches, renders, then creates or replaces the bound host document.

use std::sync::Mutex;

use boj_scrape::Client;
use tracing::{info, instrument, warn};

use crate::host::{DocumentHost, DocumentLanguage};
use crate::render::{render_problem, RenderOptions};

/// Notification shown when a problem cannot be opened.
pub const OPEN_ERROR_MESSAGE: &str = "문제를 여는 중 오류가 발생했습니다.";

/// Result of [`ProblemViewer::open`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    /// A new document was created and bound.
    Created,
    /// The bound document's content was replaced.
    Replaced,
    /// The problem could not be shown; the error notification was raised.
    Failed,
}

/// Holds the active problem document, if any.
pub struct ProblemViewer<T> {
    active: Mutex<Option<T>>,
    render: RenderOptions,
}

impl<T: Clone + PartialEq> ProblemViewer<T> {
    pub fn new(render: RenderOptions) -> Self {
        Self {
            active: Mutex::new(None),
            render,
        }
    }

    pub fn render_options(&self) -> &RenderOptions {
        &self.render
    }

    /// The currently bound document handle.
    pub fn active(&self) -> Option<T> {
        self.active.lock().unwrap_or_else(|p| p.into_inner()).clone()
    }

    fn bind(&self, handle: T) {
        *self.active.lock().unwrap_or_else(|p| p.into_inner()) = Some(handle);
    }

    /// Drop the binding if `handle` is the bound document.
    pub fn document_closed(&self, handle: &T) {
        let mut active = self.active.lock().unwrap_or_else(|p| p.into_inner());
        if active.as_ref() == Some(handle) {
            *active = None;
        }
    }

    /// Fetch, render and show `problem_id`.
    #[instrument(skip(self, host, client))]
    pub async fn open<H>(&self, host: &H, client: &Client, problem_id: &str) -> OpenOutcome
    where
        H: DocumentHost<Handle = T>,
    {
        let detail = match client.problem(problem_id).await {
            Ok(detail) => detail,
            Err(err) => {
                warn!(error = %err, "failed to load problem");
                host.show_error(OPEN_ERROR_MESSAGE).await;
                return OpenOutcome::Failed;
            }
        };
        let content = render_problem(&detail, &self.render);

        let reusable = self.active().filter(|handle| !host.is_closed(handle));
        let shown = match reusable {
            Some(handle) => Self::replace(host, &handle, &content)
                .await
                .map(|_| OpenOutcome::Replaced),
            None => match host
                .create_document(&content, DocumentLanguage::Markdown)
                .await
            {
                Ok(handle) => {
                    info!(title = %detail.title, "opened problem document");
                    self.bind(handle);
                    Ok(OpenOutcome::Created)
                }
                Err(err) => Err(err),
            },
        };

        match shown {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(error = %err, "host failed to show problem");
                host.show_error(OPEN_ERROR_MESSAGE).await;
                OpenOutcome::Failed
            }
        }
    }

    async fn replace<H>(host: &H, handle: &T, content: &str) -> anyhow::Result<()>
    where
        H: DocumentHost<Handle = T>,
    {
        host.replace_content(handle, content).await?;
        host.reveal(handle).await
    }
}

impl<T: Clone + PartialEq> Default for ProblemViewer<T> {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}
