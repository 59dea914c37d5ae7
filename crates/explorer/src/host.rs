// ABOUTME: Boundary trait for the UI shell that shows documents and notifications.
// ABOUTME: Implemented by the embedding host; tests use a recording fake.

use async_trait::async_trait;

/// Language tag for a newly created document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentLanguage {
    Markdown,
}

impl DocumentLanguage {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentLanguage::Markdown => "markdown",
        }
    }
}

/// Operations the explorer needs from its host.
#[async_trait]
pub trait DocumentHost: Send + Sync {
    /// Opaque reference to a document the host created.
    type Handle: Clone + Send + Sync;

    /// Create a document with `content`, show it beside the current editor,
    /// and return its handle.
    async fn create_document(
        &self,
        content: &str,
        language: DocumentLanguage,
    ) -> anyhow::Result<Self::Handle>;

    /// Replace the full text of `handle` with `content`.
    async fn replace_content(&self, handle: &Self::Handle, content: &str) -> anyhow::Result<()>;

    /// Bring `handle` to the front.
    async fn reveal(&self, handle: &Self::Handle) -> anyhow::Result<()>;

    /// Whether the user has closed `handle`.
    fn is_closed(&self, handle: &Self::Handle) -> bool;

    async fn show_info(&self, message: &str);

    async fn show_error(&self, message: &str);
}
