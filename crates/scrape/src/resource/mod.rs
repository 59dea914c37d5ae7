// ABOUTME: HTTP page retrieval for the judge site: URL checks, size cap, status checks, and decoding.
// ABOUTME: Every failure maps onto ScrapeError so callers see a single error taxonomy.

use std::collections::HashMap;

use bytes::Bytes;
use encoding_rs::Encoding;
use tracing::debug;
use url::Url;

use crate::error::ScrapeError;

/// Largest page body accepted (10 MiB).
pub const MAX_CONTENT_LENGTH: usize = 10 * 1024 * 1024;

const OP: &str = "Fetch";

/// A page body as received, before decoding.
#[derive(Debug, Clone)]
pub struct Page {
    pub status: u16,
    pub final_url: String,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl Page {
    /// The body decoded to UTF-8.
    ///
    /// The `charset` parameter of the Content-Type wins; otherwise the
    /// encoding is guessed from the bytes. The judge site serves UTF-8, but
    /// mirrors and saved pages are not always labelled.
    pub fn text(&self) -> String {
        let labelled = self
            .content_type
            .as_deref()
            .and_then(charset_param)
            .and_then(|label| Encoding::for_label(label.as_bytes()));
        let encoding = labelled.unwrap_or_else(|| sniff_encoding(&self.body));
        encoding.decode(&self.body).0.into_owned()
    }
}

fn sniff_encoding(body: &[u8]) -> &'static Encoding {
    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(body, true);
    detector.guess(None, true)
}

/// The `charset` parameter of a Content-Type value, lowercased and unquoted.
fn charset_param(content_type: &str) -> Option<String> {
    content_type.split(';').skip(1).find_map(|param| {
        let (name, value) = param.split_once('=')?;
        if !name.trim().eq_ignore_ascii_case("charset") {
            return None;
        }
        let value = value.trim().trim_matches(|c| c == '"' || c == '\'');
        (!value.is_empty()).then(|| value.to_ascii_lowercase())
    })
}

fn checked_url(url: &str) -> Result<Url, ScrapeError> {
    if url.is_empty() {
        return Err(ScrapeError::invalid_url(url, OP, None));
    }
    let parsed = Url::parse(url).map_err(|e| {
        ScrapeError::invalid_url(url, OP, Some(anyhow::anyhow!("invalid URL: {}", e)))
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(ScrapeError::invalid_url(
            url,
            OP,
            Some(anyhow::anyhow!("unsupported scheme {:?}", other)),
        )),
    }
}

fn too_large(url: &str, len: usize) -> ScrapeError {
    ScrapeError::fetch(
        url,
        OP,
        Some(anyhow::anyhow!(
            "body of {} bytes exceeds {} byte limit",
            len,
            MAX_CONTENT_LENGTH
        )),
    )
}

/// Map a transport error onto the scrape taxonomy.
fn transport_error(url: &str, err: reqwest::Error) -> ScrapeError {
    if err.is_timeout() {
        ScrapeError::timeout(url, OP, Some(anyhow::Error::new(err)))
    } else {
        ScrapeError::fetch(url, OP, Some(anyhow::anyhow!("request failed: {}", err)))
    }
}

/// GET `url` with `headers`, returning the raw page.
///
/// Non-2xx statuses are errors: the judge site answers missing problems and
/// unknown steps with error pages that must not be mistaken for content.
pub async fn fetch(
    client: &reqwest::Client,
    url: &str,
    headers: &HashMap<String, String>,
) -> Result<Page, ScrapeError> {
    let target = checked_url(url)?;

    let request = headers
        .iter()
        .fold(client.get(target), |req, (k, v)| req.header(k, v));
    let response = request.send().await.map_err(|e| transport_error(url, e))?;

    if let Some(declared) = response.content_length() {
        let declared = usize::try_from(declared).unwrap_or(usize::MAX);
        if declared > MAX_CONTENT_LENGTH {
            return Err(too_large(url, declared));
        }
    }

    let status = response.status();
    if !status.is_success() {
        return Err(ScrapeError::fetch(
            url,
            OP,
            Some(anyhow::anyhow!("HTTP status {}", status.as_u16())),
        ));
    }

    let final_url = response.url().to_string();
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let body = response.bytes().await.map_err(|e| transport_error(url, e))?;
    if body.len() > MAX_CONTENT_LENGTH {
        return Err(too_large(url, body.len()));
    }

    debug!(url, status = status.as_u16(), bytes = body.len(), "fetched page");

    Ok(Page {
        status: status.as_u16(),
        final_url,
        content_type,
        body,
    })
}
