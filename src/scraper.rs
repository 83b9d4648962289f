// ABOUTME: The JobScraper orchestrator: fetch, parse, fan out field extractors, assemble the record.
// ABOUTME: Provides the all-or-nothing scrape() contract where any failure yields None.

use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use scraper::Html;
use tracing::{debug, error};

use crate::error::ScrapeError;
use crate::extract::fields;
use crate::options::{Options, ScraperBuilder};
use crate::record::JobRecord;
use crate::resource::{fetch, FetchOptions};

/// The job-posting scraper.
///
/// One `scrape` call runs the whole pipeline for one URL: fetch the page,
/// parse it once, run every field extraction rule against the shared
/// document, and assemble the 13-field record.
pub struct JobScraper {
    opts: Options,
    http_client: reqwest::Client,
}

impl JobScraper {
    /// Create a new ScraperBuilder for configuring the scraper.
    pub fn builder() -> ScraperBuilder {
        ScraperBuilder::new()
    }

    /// Create a new JobScraper with the given options.
    pub fn new(opts: Options) -> Self {
        let http_client = opts.http_client.clone().unwrap_or_else(|| {
            reqwest::Client::builder()
                .user_agent(&opts.user_agent)
                .timeout(opts.timeout)
                .gzip(true)
                .brotli(true)
                .deflate(true)
                .build()
                .expect("failed to build HTTP client")
        });

        Self { opts, http_client }
    }

    /// Scrape one job posting, returning `None` on any failure.
    ///
    /// This is the all-or-nothing boundary: a fetch failure or an
    /// extraction failure that escapes its own rule is logged with the
    /// source URL and discards the whole record. There is no partial
    /// result and no retry.
    pub async fn scrape(&self, url: &str) -> Option<JobRecord> {
        match self.try_scrape(url).await {
            Ok(record) => Some(record),
            Err(e) => {
                error!(url, error = %e, "scrape failed");
                None
            }
        }
    }

    /// Scrape one job posting, surfacing the typed failure.
    pub async fn try_scrape(&self, url: &str) -> Result<JobRecord, ScrapeError> {
        if url.is_empty() {
            return Err(ScrapeError::invalid_url(url, "Scrape", None));
        }
        if url::Url::parse(url).is_err() {
            return Err(ScrapeError::invalid_url(
                url,
                "Scrape",
                Some(anyhow::anyhow!("malformed URL")),
            ));
        }

        let fetch_opts = FetchOptions {
            allow_private_networks: self.opts.allow_private_networks,
            ..Default::default()
        };

        let raw_html = fetch(&self.http_client, url, &fetch_opts).await?;
        debug!(url, bytes = raw_html.len(), "page fetched");

        // Parsed once, read-only for the whole extraction phase.
        let doc = Html::parse_document(&raw_html);

        // A panic escaping a single rule discards the whole record. This
        // is coarser than the per-rule fallbacks: those already absorb
        // their own misses into empty fields.
        AssertUnwindSafe(Self::extract_all(&doc, url))
            .catch_unwind()
            .await
            .map_err(|_| {
                ScrapeError::extract(url, "Scrape", Some(anyhow::anyhow!("extractor panicked")))
            })
    }

    /// Run every field extraction rule against the shared document.
    ///
    /// The rules are independent and commutative: each one reads the
    /// immutable document and produces its own disjoint field subset, so
    /// assembly needs no coordination. The join blocks until all ten have
    /// completed. The document type is neither Send nor Sync, so the
    /// fan-out stays on the calling task.
    async fn extract_all(doc: &Html, url: &str) -> JobRecord {
        let mut record = JobRecord::new();

        let (
            job_description,
            job_title,
            location,
            company_name,
            company_link,
            job_posted,
            job_type,
            job_mode,
            (recruiter_name, recruiter_title, recruiter_link),
        ) = tokio::join!(
            async { fields::description(doc) },
            async { fields::job_title(doc) },
            async { fields::location(doc) },
            async { fields::company_name(doc) },
            async { fields::company_link(doc) },
            async { fields::job_posted(doc) },
            async { fields::job_type(doc) },
            async { fields::job_mode(doc) },
            async { fields::recruiter_info(doc) },
        );

        record.job_description = job_description;
        record.job_link = url.to_string();
        record.job_title = job_title;
        record.location = location;
        record.company_name = company_name;
        record.company_link = company_link;
        record.job_posted = job_posted;
        record.job_type = job_type;
        record.job_mode = job_mode;
        record.recruiter_name = recruiter_name;
        record.recruiter_title = recruiter_title;
        record.recruiter_link = recruiter_link;

        record
    }
}
