// ABOUTME: Configuration options for the job scraper including Options and ScraperBuilder.
// ABOUTME: ScraperBuilder provides a fluent API for constructing JobScraper instances.

use std::time::Duration;

use crate::scraper::JobScraper;

/// Configuration options for the scraper.
#[derive(Debug, Clone)]
pub struct Options {
    pub timeout: Duration,
    pub user_agent: String,
    pub allow_private_networks: bool,
    pub http_client: Option<reqwest::Client>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: "jobscrape/0.1".to_string(),
            allow_private_networks: false,
            http_client: None,
        }
    }
}

/// Builder for constructing JobScraper instances with custom configuration.
#[derive(Debug, Clone)]
pub struct ScraperBuilder {
    opts: Options,
}

impl ScraperBuilder {
    /// Create a new ScraperBuilder with default options.
    pub fn new() -> Self {
        Self {
            opts: Options::default(),
        }
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.opts.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.opts.user_agent = user_agent.into();
        self
    }

    /// Allow or disallow requests to private networks.
    pub fn allow_private_networks(mut self, allow: bool) -> Self {
        self.opts.allow_private_networks = allow;
        self
    }

    /// Use a custom HTTP client.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.opts.http_client = Some(client);
        self
    }

    /// Build the JobScraper with the configured options.
    pub fn build(self) -> JobScraper {
        JobScraper::new(self.opts)
    }
}

impl Default for ScraperBuilder {
    fn default() -> Self {
        Self::new()
    }
}
