// ABOUTME: Turns an extracted ProblemDetail into the Markdown problem document.
// ABOUTME: Pure and deterministic; fragment handling is selected by RenderOptions.

use std::fmt::Write;

use boj_scrape::formats::{html_to_markdown, html_to_text, sanitize_html};
use boj_scrape::ProblemDetail;
use serde::{Deserialize, Serialize};

/// How statement fragments are placed into the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FragmentFormat {
    /// Embed the site's HTML, cleaned first when `RenderOptions::sanitize` is set.
    #[default]
    Html,
    Markdown,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    pub format: FragmentFormat,
    /// Strip scripts, styles and unknown tags before formatting. On by default;
    /// turn it off to embed fragments exactly as the site serves them.
    pub sanitize: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            format: FragmentFormat::Html,
            sanitize: true,
        }
    }
}

impl RenderOptions {
    fn fragment(&self, html: &str) -> String {
        let html = if self.sanitize {
            sanitize_html(html)
        } else {
            html.to_string()
        };
        match self.format {
            FragmentFormat::Html => html,
            FragmentFormat::Markdown => html_to_markdown(&html),
            FragmentFormat::Text => html_to_text(&html),
        }
    }
}

/// Render `detail` as the problem document.
///
/// One input/output section pair is written per sample index up to the
/// longer of the two sample lists; a missing side renders as an empty block.
pub fn render_problem(detail: &ProblemDetail, opts: &RenderOptions) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = write!(out, "# {}\n\n", detail.title);
    let _ = write!(out, "## 문제\n{}\n\n", opts.fragment(&detail.description_html));
    let _ = write!(out, "## 입력\n{}\n\n", opts.fragment(&detail.input_html));
    let _ = write!(out, "## 출력\n{}\n\n", opts.fragment(&detail.output_html));

    for i in 0..detail.sample_count() {
        let (input, output) = detail.sample_pair(i);
        let k = i + 1;
        let _ = write!(out, "## 예제 입력 {}\n```\n{}\n```\n\n", k, input);
        let _ = write!(out, "## 예제 출력 {}\n```\n{}\n```\n\n", k, output);
    }

    out
}
