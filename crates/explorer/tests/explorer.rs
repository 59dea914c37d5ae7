// ABOUTME: End-to-end tests of the explorer commands against a mock judge site.
// ABOUTME: A recording DocumentHost captures document and notification calls.

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use boj_explorer::{
    Client, DocumentHost, DocumentLanguage, Explorer, ListingKey, OpenOutcome, TreeEvent,
    OPEN_ERROR_MESSAGE, REFRESH_MESSAGE,
};
use httpmock::prelude::*;
use pretty_assertions::assert_eq;

#[derive(Debug, Clone, PartialEq, Eq)]
enum HostCall {
    Create { doc: u32, content: String, language: &'static str },
    Replace { doc: u32, content: String },
    Reveal { doc: u32 },
    Info(String),
    Error(String),
}

#[derive(Default)]
struct RecordingHost {
    calls: Mutex<Vec<HostCall>>,
    closed: Mutex<HashSet<u32>>,
    next_doc: Mutex<u32>,
    fail_create: bool,
}

impl RecordingHost {
    fn calls(&self) -> Vec<HostCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: HostCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn close(&self, doc: u32) {
        self.closed.lock().unwrap().insert(doc);
    }

    fn creates(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, HostCall::Create { .. }))
            .count()
    }
}

#[async_trait]
impl DocumentHost for RecordingHost {
    type Handle = u32;

    async fn create_document(
        &self,
        content: &str,
        language: DocumentLanguage,
    ) -> anyhow::Result<u32> {
        if self.fail_create {
            anyhow::bail!("editor unavailable");
        }
        let doc = {
            let mut next = self.next_doc.lock().unwrap();
            *next += 1;
            *next
        };
        self.record(HostCall::Create {
            doc,
            content: content.to_string(),
            language: language.as_str(),
        });
        Ok(doc)
    }

    async fn replace_content(&self, handle: &u32, content: &str) -> anyhow::Result<()> {
        self.record(HostCall::Replace {
            doc: *handle,
            content: content.to_string(),
        });
        Ok(())
    }

    async fn reveal(&self, handle: &u32) -> anyhow::Result<()> {
        self.record(HostCall::Reveal { doc: *handle });
        Ok(())
    }

    fn is_closed(&self, handle: &u32) -> bool {
        self.closed.lock().unwrap().contains(handle)
    }

    async fn show_info(&self, message: &str) {
        self.record(HostCall::Info(message.to_string()));
    }

    async fn show_error(&self, message: &str) {
        self.record(HostCall::Error(message.to_string()));
    }
}

fn problem_page(id: &str, title: &str) -> String {
    format!(
        r#"<html><body>
        <span id="problem_title">{title}</span>
        <div id="problem_description"><p>문제 {id}</p></div>
        <div id="problem_input"><p>입력</p></div>
        <div id="problem_output"><p>출력</p></div>
        <pre class="sampledata" id="sample-input-1">1 2</pre>
        <pre class="sampledata" id="sample-output-1">3</pre>
        </body></html>"#
    )
}

fn mock_problem<'a>(server: &'a MockServer, id: &str, title: &str) -> httpmock::Mock<'a> {
    let body = problem_page(id, title);
    let path = format!("/problem/{}", id);
    server.mock(move |when, then| {
        when.method(GET).path(&path);
        then.status(200)
            .header("content-type", "text/html; charset=utf-8")
            .body(&body);
    })
}

fn explorer_for(server: &MockServer, host: RecordingHost) -> Explorer<RecordingHost> {
    Explorer::new(host, Client::builder().base_url(server.base_url()).build())
}

#[tokio::test]
async fn first_open_creates_then_second_open_replaces() {
    let server = MockServer::start();
    let m1000 = mock_problem(&server, "1000", "A+B");
    let m1001 = mock_problem(&server, "1001", "A-B");

    let explorer = explorer_for(&server, RecordingHost::default());

    assert_eq!(explorer.open_problem("1000").await, OpenOutcome::Created);
    assert_eq!(explorer.open_problem("1001").await, OpenOutcome::Replaced);
    m1000.assert();
    m1001.assert();

    let calls = explorer.host().calls();
    assert_eq!(calls.len(), 3);
    match &calls[0] {
        HostCall::Create { doc, content, language } => {
            assert_eq!(*doc, 1);
            assert_eq!(*language, "markdown");
            assert!(content.starts_with("# A+B\n\n## 문제\n<p>문제 1000</p>\n\n"));
        }
        other => panic!("expected create, got {:?}", other),
    }
    match &calls[1] {
        HostCall::Replace { doc, content } => {
            assert_eq!(*doc, 1);
            assert!(content.starts_with("# A-B\n\n"));
            assert!(content.ends_with("## 예제 입력 1\n```\n1 2\n```\n\n## 예제 출력 1\n```\n3\n```\n\n"));
        }
        other => panic!("expected replace, got {:?}", other),
    }
    assert_eq!(calls[2], HostCall::Reveal { doc: 1 });
    assert_eq!(explorer.viewer().active(), Some(1));
}

#[tokio::test]
async fn closed_document_gets_recreated() {
    let server = MockServer::start();
    let _m = mock_problem(&server, "1000", "A+B");

    let explorer = explorer_for(&server, RecordingHost::default());

    assert_eq!(explorer.open_problem("1000").await, OpenOutcome::Created);
    explorer.host().close(1);
    assert_eq!(explorer.open_problem("1000").await, OpenOutcome::Created);

    assert_eq!(explorer.host().creates(), 2);
    assert_eq!(explorer.viewer().active(), Some(2));
}

#[tokio::test]
async fn document_closed_notification_drops_binding() {
    let server = MockServer::start();
    let _m = mock_problem(&server, "1000", "A+B");

    let explorer = explorer_for(&server, RecordingHost::default());
    explorer.open_problem("1000").await;

    explorer.document_closed(&7);
    assert_eq!(explorer.viewer().active(), Some(1), "other handles are ignored");

    explorer.document_closed(&1);
    assert_eq!(explorer.viewer().active(), None);

    assert_eq!(explorer.open_problem("1000").await, OpenOutcome::Created);
    assert_eq!(explorer.host().creates(), 2);
}

#[tokio::test]
async fn invalid_id_shows_error_without_request() {
    let server = MockServer::start();
    let any = server.mock(|when, then| {
        when.method(GET);
        then.status(200);
    });

    let explorer = explorer_for(&server, RecordingHost::default());
    assert_eq!(explorer.open_problem("../etc").await, OpenOutcome::Failed);

    assert_eq!(any.calls(), 0);
    assert_eq!(
        explorer.host().calls(),
        vec![HostCall::Error(OPEN_ERROR_MESSAGE.to_string())]
    );
    assert_eq!(explorer.viewer().active(), None);
}

#[tokio::test]
async fn failed_fetch_keeps_existing_document() {
    let server = MockServer::start();
    let _ok = mock_problem(&server, "1000", "A+B");
    let _missing = server.mock(|when, then| {
        when.method(GET).path("/problem/99999");
        then.status(404);
    });

    let explorer = explorer_for(&server, RecordingHost::default());
    explorer.open_problem("1000").await;
    assert_eq!(explorer.open_problem("99999").await, OpenOutcome::Failed);

    let calls = explorer.host().calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[1], HostCall::Error(OPEN_ERROR_MESSAGE.to_string()));
    assert_eq!(explorer.viewer().active(), Some(1));
}

#[tokio::test]
async fn host_failure_surfaces_error_notification() {
    let server = MockServer::start();
    let _m = mock_problem(&server, "1000", "A+B");

    let host = RecordingHost {
        fail_create: true,
        ..RecordingHost::default()
    };
    let explorer = explorer_for(&server, host);

    assert_eq!(explorer.open_problem("1000").await, OpenOutcome::Failed);
    assert_eq!(
        explorer.host().calls(),
        vec![HostCall::Error(OPEN_ERROR_MESSAGE.to_string())]
    );
    assert_eq!(explorer.viewer().active(), None);
}

#[tokio::test]
async fn refresh_clears_cache_signals_tree_and_notifies() {
    let server = MockServer::start();
    let listing = server.mock(|when, then| {
        when.method(GET).path("/step/1");
        then.status(200).body(
            r#"<table class="table"><tbody>
            <tr><td>1</td><td>2557</td><td><a>Hello World</a></td><td>1</td></tr>
            </tbody></table>"#,
        );
    });

    let explorer = explorer_for(&server, RecordingHost::default());
    let mut events = explorer.tree().subscribe();

    explorer.tree().problems(&ListingKey::Step(1)).await;
    explorer.tree().problems(&ListingKey::Step(1)).await;
    assert_eq!(listing.calls(), 1);

    explorer.refresh().await;
    assert_eq!(events.recv().await.unwrap(), TreeEvent::Refreshed);
    assert_eq!(
        explorer.host().calls(),
        vec![HostCall::Info(REFRESH_MESSAGE.to_string())]
    );

    explorer.tree().problems(&ListingKey::Step(1)).await;
    assert_eq!(listing.calls(), 2);
}

#[tokio::test]
async fn step_and_category_with_same_label_are_separate_entries() {
    let server = MockServer::start();
    let step = server.mock(|when, then| {
        when.method(GET).path("/step/5");
        then.status(200).body(
            r#"<table class="table"><tbody>
            <tr><td>1</td><td>27866</td><td><a>문자와 문자열</a></td><td>1</td></tr>
            </tbody></table>"#,
        );
    });
    let category = server.mock(|when, then| {
        when.method(GET).path("/problemset").query_param("algo", "158");
        then.status(200).body(
            r#"<table id="problemset"><tbody>
            <tr><td>1152</td><td><a>단어의 개수</a></td><td></td><td>3</td></tr>
            </tbody></table>"#,
        );
    });

    let explorer = explorer_for(&server, RecordingHost::default());
    let by_step = explorer.tree().problems(&ListingKey::Step(5)).await;
    let by_category = explorer
        .tree()
        .problems(&ListingKey::Category("문자열".into()))
        .await;

    step.assert();
    category.assert();
    assert_eq!(by_step[0].id, "27866");
    assert_eq!(by_category[0].id, "1152");
    assert_eq!(explorer.tree().cache().len(), 2);
}
