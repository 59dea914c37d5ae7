// ABOUTME: Process-wide memo of compiled CSS selectors keyed by their source text.
// ABOUTME: Schema selectors are parsed once and shared by every listing row and page.

//! Selector memoisation.
//!
//! A listing page evaluates the same cell selectors against every row, and
//! every page of a kind shares one schema. Compiling each selector once keeps
//! extraction to pure matching work.

use std::collections::HashMap;
use std::sync::RwLock;

use once_cell::sync::Lazy;
use scraper::Selector;
use tracing::debug;

/// Compiled selectors by source text; a failed parse is remembered as `None`.
#[derive(Default)]
struct SelectorTable {
    by_source: RwLock<HashMap<String, Option<Selector>>>,
}

impl SelectorTable {
    fn lookup(&self, css: &str) -> Option<Option<Selector>> {
        let table = self.by_source.read().unwrap_or_else(|p| p.into_inner());
        table.get(css).cloned()
    }

    fn compile(&self, css: &str) -> Option<Selector> {
        let mut table = self.by_source.write().unwrap_or_else(|p| p.into_inner());
        table
            .entry(css.to_string())
            .or_insert_with(|| {
                let parsed = Selector::parse(css).ok();
                if parsed.is_none() {
                    debug!(selector = %css, "selector does not parse");
                }
                parsed
            })
            .clone()
    }
}

static SELECTORS: Lazy<SelectorTable> = Lazy::new(SelectorTable::default);

/// Compiled form of `css`, or `None` if it is not a valid selector.
pub fn get_or_compile(css: &str) -> Option<Selector> {
    match SELECTORS.lookup(css) {
        Some(known) => known,
        None => SELECTORS.compile(css),
    }
}

/// Compile every selector in `selectors` ahead of first use.
pub fn precompile_selectors<I, S>(selectors: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for css in selectors {
        SELECTORS.compile(css.as_ref());
    }
}
