// ABOUTME: Records produced by extraction: Problem rows from listings and ProblemDetail pages.
// ABOUTME: Includes label formatting and positional sample pairing helpers.

use serde::{Deserialize, Serialize};

/// One row of a listing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub id: String,
    pub title: String,
    pub difficulty: Option<String>,
}

impl Problem {
    /// Display label used for leaf nodes, e.g. `A+B (1000번)`.
    pub fn label(&self) -> String {
        format!("{} ({}번)", self.title, self.id)
    }
}

/// The extracted content of a single problem page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ProblemDetail {
    pub title: String,
    pub description_html: String,
    pub input_html: String,
    pub output_html: String,
    pub sample_inputs: Vec<String>,
    pub sample_outputs: Vec<String>,
}

impl ProblemDetail {
    /// Number of sample sections: the longer of the two sample sequences.
    pub fn sample_count(&self) -> usize {
        self.sample_inputs.len().max(self.sample_outputs.len())
    }

    /// The `index`-th sample pair, with a missing side read as empty.
    pub fn sample_pair(&self, index: usize) -> (&str, &str) {
        let input = self.sample_inputs.get(index).map_or("", String::as_str);
        let output = self.sample_outputs.get(index).map_or("", String::as_str);
        (input, output)
    }

    /// Returns true if the page yielded nothing at all.
    pub fn is_blank(&self) -> bool {
        self.title.is_empty()
            && self.description_html.is_empty()
            && self.input_html.is_empty()
            && self.output_html.is_empty()
            && self.sample_inputs.is_empty()
            && self.sample_outputs.is_empty()
    }
}
