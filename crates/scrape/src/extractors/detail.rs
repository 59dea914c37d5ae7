// ABOUTME: Problem page extraction: title, statement fragments, and sample blocks.
// ABOUTME: Missing anchors degrade to empty values instead of failing the whole page.

use scraper::Html;
use tracing::debug;

use crate::extractors::schema::DetailSchema;
use crate::extractors::select::{document_text, each_text, first_inner_html};
use crate::result::ProblemDetail;

/// Extracts a [`ProblemDetail`] from a problem page using `schema`.
///
/// The title is trimmed text; description, input and output are the inner
/// HTML of their anchors; samples are the trimmed text of every block
/// carrying the sample marker, in document order.
pub fn extract_problem_detail(markup: &str, schema: &DetailSchema) -> ProblemDetail {
    let doc = Html::parse_document(markup);

    let title = document_text(&doc, &schema.title);
    if title.is_empty() {
        debug!(anchor = %schema.title, "problem title missing");
    }

    let fragment = |css: &str| {
        first_inner_html(&doc, css).unwrap_or_else(|| {
            debug!(anchor = %css, "problem fragment missing");
            String::new()
        })
    };

    let description_html = fragment(&schema.description);
    let input_html = fragment(&schema.input);
    let output_html = fragment(&schema.output);

    let sample_inputs = each_text(&doc, &schema.sample_input);
    let sample_outputs = each_text(&doc, &schema.sample_output);
    if sample_inputs.len() != sample_outputs.len() {
        debug!(
            inputs = sample_inputs.len(),
            outputs = sample_outputs.len(),
            "sample blocks are unbalanced"
        );
    }

    ProblemDetail {
        title,
        description_html,
        input_html,
        output_html,
        sample_inputs,
        sample_outputs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::loader::load_builtin_schema;
    use pretty_assertions::assert_eq;

    const PROBLEM_PAGE: &str = r#"
        <html><body>
        <span id="problem_title">A+B</span>
        <section id="description"><div id="problem_description" class="problem-text">
<p>두 정수 A와 B를 입력받은 다음, A+B를 출력하는 프로그램을 작성하시오.</p>
</div></section>
        <div id="problem_input" class="problem-text"><p>첫째 줄에 A와 B가 주어진다. (0 &lt; A, B &lt; 10)</p></div>
        <div id="problem_output" class="problem-text"><p>첫째 줄에 A+B를 출력한다.</p></div>
        <section id="sampleinput1"><pre class="sampledata" id="sample-input-1">1 2
</pre></section>
        <section id="sampleoutput1"><pre class="sampledata" id="sample-output-1">3
</pre></section>
        <section id="sampleinput2"><pre class="sampledata" id="sample-input-2">5 4</pre></section>
        <section id="sampleoutput2"><pre class="sampledata" id="sample-output-2">9</pre></section>
        </body></html>
    "#;

    #[test]
    fn test_extracts_full_problem_page() {
        let schema = load_builtin_schema();

        let detail = extract_problem_detail(PROBLEM_PAGE, &schema.detail);

        assert_eq!(detail.title, "A+B");
        assert_eq!(
            detail.description_html.trim(),
            "<p>두 정수 A와 B를 입력받은 다음, A+B를 출력하는 프로그램을 작성하시오.</p>"
        );
        assert_eq!(
            detail.input_html,
            "<p>첫째 줄에 A와 B가 주어진다. (0 &lt; A, B &lt; 10)</p>"
        );
        assert_eq!(detail.output_html, "<p>첫째 줄에 A+B를 출력한다.</p>");
        assert_eq!(detail.sample_inputs, vec!["1 2", "5 4"]);
        assert_eq!(detail.sample_outputs, vec!["3", "9"]);
    }

    #[test]
    fn test_class_marker_samples() {
        let schema = load_builtin_schema();
        let page = r#"<html><body>
            <span id="problem_title">A-B</span>
            <pre class="sample-input">3 2</pre>
            <pre class="sample-output">1</pre>
            <pre class="sample-input">7 3</pre>
        </body></html>"#;

        let detail = extract_problem_detail(page, &schema.detail);

        assert_eq!(detail.sample_inputs, vec!["3 2", "7 3"]);
        assert_eq!(detail.sample_outputs, vec!["1"]);
        assert_eq!(detail.sample_count(), 2);
    }

    #[test]
    fn test_missing_fragments_degrade_to_empty() {
        let schema = load_builtin_schema();
        let page = r#"<html><body><span id="problem_title"> 제목만 </span></body></html>"#;

        let detail = extract_problem_detail(page, &schema.detail);

        assert_eq!(detail.title, "제목만");
        assert_eq!(detail.description_html, "");
        assert_eq!(detail.input_html, "");
        assert_eq!(detail.output_html, "");
        assert!(detail.sample_inputs.is_empty());
        assert!(detail.sample_outputs.is_empty());
    }

    #[test]
    fn test_unrelated_page_is_blank() {
        let schema = load_builtin_schema();
        let detail = extract_problem_detail("<html><body>404</body></html>", &schema.detail);
        assert!(detail.is_blank());
    }
}
