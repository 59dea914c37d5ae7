// ABOUTME: Configuration options for the judge-site client including Options and ClientBuilder.
// ABOUTME: ClientBuilder provides a fluent API for constructing Client instances with custom settings.

use std::collections::HashMap;
use std::time::Duration;

use crate::client::Client;
use crate::extractors::schema::SiteSchema;

/// Root of the judge site.
pub const DEFAULT_BASE_URL: &str = "https://www.acmicpc.net";

/// Browser User-Agent sent with every request; the judge site filters bare clients.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Configuration options for the judge-site client.
#[derive(Debug, Clone)]
pub struct Options {
    pub base_url: String,
    pub user_agent: String,
    /// Request timeout; `None` keeps the transport default.
    pub timeout: Option<Duration>,
    pub http_client: Option<reqwest::Client>,
    pub headers: HashMap<String, String>,
    pub schema: Option<SiteSchema>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: BROWSER_USER_AGENT.to_string(),
            timeout: None,
            http_client: None,
            headers: HashMap::new(),
            schema: None,
        }
    }
}

/// Builder for constructing Client instances with custom configuration.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    opts: Options,
}

impl ClientBuilder {
    /// Create a new ClientBuilder with default options.
    pub fn new() -> Self {
        Self {
            opts: Options::default(),
        }
    }

    /// Point the client at a different site root (mirrors, test servers).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.opts.base_url = base_url.into();
        self
    }

    /// Set the User-Agent header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.opts.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.opts.timeout = Some(timeout);
        self
    }

    /// Use a custom HTTP client. Its own User-Agent and timeout then apply.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.opts.http_client = Some(client);
        self
    }

    /// Add a custom header to all requests.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.opts.headers.insert(key.into(), value.into());
        self
    }

    /// Replace the built-in page-layout schema.
    pub fn schema(mut self, schema: SiteSchema) -> Self {
        self.opts.schema = Some(schema);
        self
    }

    /// Build the Client with the configured options.
    pub fn build(self) -> Client {
        Client::new(self.opts)
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
