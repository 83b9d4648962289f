// ABOUTME: Main library entry point for the jobscrape job-posting extractor.
// ABOUTME: Re-exports the public API: JobScraper, ScraperBuilder, JobRecord, ScrapeError, WriteMode.

//! jobscrape - extract structured fields from a single job-posting page.
//!
//! This crate fetches one job-listing page, runs a fixed set of field
//! extraction rules against the parsed document, and appends the result
//! as one row to a CSV file.
//!
//! # Example
//!
//! ```no_run
//! use jobscrape::{persist, JobScraper, WriteMode};
//!
//! #[tokio::main]
//! async fn main() {
//!     let scraper = JobScraper::builder().build();
//!     if let Some(record) = scraper.scrape("https://example.com/jobs/123").await {
//!         persist(&record, "job_data.csv", WriteMode::Append).expect("persist failed");
//!     }
//! }
//! ```

pub mod error;
pub mod extract;
pub mod formats;
pub mod options;
pub mod record;
pub mod resource;
pub mod scraper;
pub mod sink;

pub use crate::error::{ErrorCode, ScrapeError};
pub use crate::options::{Options, ScraperBuilder};
pub use crate::record::{JobRecord, FIELD_NAMES};
pub use crate::scraper::JobScraper;
pub use crate::sink::{persist, WriteMode};
