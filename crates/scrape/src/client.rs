// ABOUTME: The judge-site Client that issues listing and problem requests and extracts records.
// ABOUTME: Provides raw fetch_* methods returning markup and combined methods returning Problems and ProblemDetail.

use tracing::{debug, instrument};
use url::Url;

use crate::error::ScrapeError;
use crate::extractors::detail::extract_problem_detail;
use crate::extractors::listing::extract_listing;
use crate::extractors::loader::load_builtin_schema;
use crate::extractors::schema::SiteSchema;
use crate::options::{ClientBuilder, Options};
use crate::resource::fetch;
use crate::result::{Problem, ProblemDetail};

/// Returns true if `id` looks like a judge problem id.
fn is_valid_problem_id(id: &str) -> bool {
    !id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Client for the judge site's listing and problem pages.
#[derive(Debug, Clone)]
pub struct Client {
    opts: Options,
    http_client: reqwest::Client,
    schema: SiteSchema,
}

impl Client {
    /// Create a new ClientBuilder for configuring the client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a new Client with the given options.
    pub fn new(opts: Options) -> Self {
        let http_client = opts.http_client.clone().unwrap_or_else(|| {
            let mut builder = reqwest::Client::builder()
                .user_agent(&opts.user_agent)
                .cookie_store(true)
                .gzip(true)
                .brotli(true)
                .deflate(true);
            if let Some(timeout) = opts.timeout {
                builder = builder.timeout(timeout);
            }
            builder.build().expect("failed to build HTTP client")
        });

        let schema = opts.schema.clone().unwrap_or_else(load_builtin_schema);

        Self {
            opts,
            http_client,
            schema,
        }
    }

    /// The options this client was built with.
    pub fn options(&self) -> &Options {
        &self.opts
    }

    /// The page-layout schema used for extraction.
    pub fn schema(&self) -> &SiteSchema {
        &self.schema
    }

    /// Resolve `path` against the configured base URL.
    fn endpoint(&self, path: &str, op: &str) -> Result<Url, ScrapeError> {
        let base = Url::parse(&self.opts.base_url).map_err(|e| {
            ScrapeError::invalid_url(
                &self.opts.base_url,
                op,
                Some(anyhow::anyhow!("invalid base URL: {}", e)),
            )
        })?;
        base.join(path).map_err(|e| {
            ScrapeError::invalid_url(
                &self.opts.base_url,
                op,
                Some(anyhow::anyhow!("cannot join {}: {}", path, e)),
            )
        })
    }

    async fn get_text(&self, url: &Url) -> Result<String, ScrapeError> {
        let page = fetch(&self.http_client, url.as_str(), &self.opts.headers).await?;
        Ok(page.text())
    }

    /// Fetch the raw markup of a step listing page.
    #[instrument(skip(self))]
    pub async fn fetch_step_listing(&self, step: u32) -> Result<String, ScrapeError> {
        let url = self.endpoint(&format!("/step/{}", step), "FetchStepListing")?;
        self.get_text(&url).await
    }

    /// Fetch the raw markup of a category (problemset) listing page.
    ///
    /// Results are requested sorted by accepted count, first page only.
    #[instrument(skip(self))]
    pub async fn fetch_category_listing(&self, category_id: u32) -> Result<String, ScrapeError> {
        let mut url = self.endpoint("/problemset", "FetchCategoryListing")?;
        url.query_pairs_mut()
            .append_pair("sort", "ac_desc")
            .append_pair("algo", &category_id.to_string())
            .append_pair("page", "1");
        self.get_text(&url).await
    }

    /// Fetch the raw markup of a single problem page.
    #[instrument(skip(self))]
    pub async fn fetch_problem(&self, problem_id: &str) -> Result<String, ScrapeError> {
        if !is_valid_problem_id(problem_id) {
            return Err(ScrapeError::invalid_url(
                problem_id,
                "FetchProblem",
                Some(anyhow::anyhow!("invalid problem id {:?}", problem_id)),
            ));
        }
        let url = self.endpoint(&format!("/problem/{}", problem_id), "FetchProblem")?;
        self.get_text(&url).await
    }

    /// Fetch and extract the problems of a step.
    pub async fn step_problems(&self, step: u32) -> Result<Vec<Problem>, ScrapeError> {
        let markup = self.fetch_step_listing(step).await?;
        let problems = extract_listing(&markup, &self.schema.step_listing);
        debug!(step, count = problems.len(), "extracted step listing");
        Ok(problems)
    }

    /// Fetch and extract the problems of a category.
    pub async fn category_problems(&self, category_id: u32) -> Result<Vec<Problem>, ScrapeError> {
        let markup = self.fetch_category_listing(category_id).await?;
        let problems = extract_listing(&markup, &self.schema.category_listing);
        debug!(category_id, count = problems.len(), "extracted category listing");
        Ok(problems)
    }

    /// Fetch and extract a single problem.
    ///
    /// A page on which none of the detail anchors are present is reported as
    /// an extraction error; individually missing anchors are tolerated.
    pub async fn problem(&self, problem_id: &str) -> Result<ProblemDetail, ScrapeError> {
        let markup = self.fetch_problem(problem_id).await?;
        let detail = extract_problem_detail(&markup, &self.schema.detail);
        if detail.is_blank() {
            return Err(ScrapeError::extract(
                problem_id,
                "ExtractProblem",
                Some(anyhow::anyhow!("no problem content found on page")),
            ));
        }
        Ok(detail)
    }
}
