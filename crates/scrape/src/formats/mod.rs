// ABOUTME: Formatting helpers for problem statement fragments (sanitize, Markdown, plain text).
// ABOUTME: Used by document renderers that do not want the site's raw HTML.

//! Statement fragment formatting.
//!
//! Statement, input and output sections arrive as HTML fragments. They can be
//! embedded as-is, sanitized, or converted to Markdown or plain text.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::Html;

/// Elements a problem statement may keep after sanitizing.
const STATEMENT_TAGS: &[&str] = &[
    "p", "br", "hr", "strong", "b", "em", "i", "u", "sup", "sub", "h1", "h2", "h3", "h4", "h5",
    "h6", "ul", "ol", "li", "blockquote", "pre", "code", "img", "a", "span", "div", "table",
    "thead", "tbody", "tr", "th", "td",
];

/// Attributes kept per element.
const STATEMENT_ATTRIBUTES: &[(&str, &[&str])] = &[
    ("a", &["href"]),
    ("img", &["src", "alt", "width", "height"]),
    ("div", &["class"]),
    ("span", &["class"]),
    ("td", &["colspan", "rowspan"]),
    ("th", &["colspan", "rowspan"]),
];

static LINE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<br\s*/?\s*>").unwrap());
static BLANK_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n(?:[^\S\n]*\n)+").unwrap());
static INLINE_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\S\n]+").unwrap());

/// Sanitize a statement fragment.
///
/// Scripts, styles, event handlers and non-web URL schemes are removed;
/// math markup (sup/sub), tables and images survive.
pub fn sanitize_html(html: &str) -> String {
    let mut policy = ammonia::Builder::new();
    policy.tags(STATEMENT_TAGS.iter().copied().collect());
    for (tag, attrs) in STATEMENT_ATTRIBUTES {
        policy.add_tag_attributes(*tag, attrs.iter().copied());
    }
    policy
        .url_schemes(["http", "https", "mailto"].into_iter().collect())
        .clean(html)
        .to_string()
}

fn line_breaks_to_newlines(html: &str) -> String {
    LINE_BREAK.replace_all(html, "\n").into_owned()
}

/// Replace every run of blank lines with `keep` newlines.
fn squeeze_blank_lines(text: &str, keep: &str) -> String {
    BLANK_RUN.replace_all(text, keep).into_owned()
}

/// Convert a fragment to Markdown.
///
/// Script-like elements are dropped, paragraphs are separated by exactly one
/// blank line, and the result is trimmed. If conversion fails the fragment
/// is returned with line breaks applied.
pub fn html_to_markdown(html: &str) -> String {
    let html = line_breaks_to_newlines(html);
    let converter = htmd::HtmlToMarkdown::builder()
        .skip_tags(vec!["script", "style", "noscript"])
        .build();
    let markdown = converter.convert(&html).unwrap_or(html);
    squeeze_blank_lines(&markdown, "\n\n").trim().to_string()
}

/// Convert a fragment to plain text, one trimmed line per source line.
pub fn html_to_text(html: &str) -> String {
    let fragment = Html::parse_fragment(&line_breaks_to_newlines(html));
    let text = fragment.root_element().text().collect::<Vec<_>>().join(" ");
    let text = INLINE_SPACE.replace_all(&text, " ");

    squeeze_blank_lines(&text, "\n")
        .lines()
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}
