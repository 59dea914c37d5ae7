// ABOUTME: Selector-based helpers for pulling text and inner HTML out of parsed pages.
// ABOUTME: Invalid selectors behave as "no match" so a bad schema never aborts extraction.

//! Selector-based extraction utilities.
//!
//! Key behaviors:
//! - Text helpers concatenate the text of every match, then trim.
//! - HTML helpers return the inner HTML of the first match.
//! - A selector that fails to compile yields no matches.

use scraper::{ElementRef, Html};

use crate::extractors::compiled::get_or_compile;

/// Concatenated, trimmed text of every element under `scope` matching `css`.
pub fn text_within(scope: ElementRef<'_>, css: &str) -> String {
    let Some(selector) = get_or_compile(css) else {
        return String::new();
    };
    scope
        .select(&selector)
        .flat_map(|el| el.text())
        .collect::<String>()
        .trim()
        .to_string()
}

/// Concatenated, trimmed text of every element in the document matching `css`.
pub fn document_text(doc: &Html, css: &str) -> String {
    let Some(selector) = get_or_compile(css) else {
        return String::new();
    };
    doc.select(&selector)
        .flat_map(|el| el.text())
        .collect::<String>()
        .trim()
        .to_string()
}

/// Inner HTML of the first element matching `css`, if any.
pub fn first_inner_html(doc: &Html, css: &str) -> Option<String> {
    let selector = get_or_compile(css)?;
    doc.select(&selector).next().map(|el| el.inner_html())
}

/// Trimmed text of each element matching `css`, in document order.
pub fn each_text(doc: &Html, css: &str) -> Vec<String> {
    let Some(selector) = get_or_compile(css) else {
        return Vec::new();
    };
    doc.select(&selector)
        .map(|el| el.text().collect::<String>().trim().to_string())
        .collect()
}

/// Elements matching `css`, in document order.
pub fn select_all<'a>(doc: &'a Html, css: &str) -> Vec<ElementRef<'a>> {
    let Some(selector) = get_or_compile(css) else {
        return Vec::new();
    };
    doc.select(&selector).collect()
}
