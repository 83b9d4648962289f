// ABOUTME: CLI binary for the jobscrape job-posting extractor.
// ABOUTME: Scrapes one URL, appends the record to a CSV file, and prints the extracted fields.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use jobscrape::{persist, JobScraper, WriteMode};

/// Default target when no URL is given on the command line.
const DEFAULT_URL: &str = "https://www.linkedin.com/jobs/view/3544765357/";

#[derive(Parser, Debug)]
#[command(name = "jobscrape")]
#[command(about = "Extract job-posting fields from a listing page into a CSV row")]
struct Args {
    /// Job posting URL to scrape
    #[arg(env = "JOBSCRAPE_URL", default_value = DEFAULT_URL)]
    url: String,

    /// Output CSV path
    #[arg(short = 'o', long = "out", default_value = "job_data.csv")]
    out: PathBuf,

    /// Rewrite the output file instead of appending
    #[arg(long = "overwrite")]
    overwrite: bool,

    /// Print the record as JSON instead of key: value lines
    #[arg(long = "json")]
    json_output: bool,

    /// Allow fetching from private/local networks
    #[arg(long = "allow-private-networks")]
    allow_private_networks: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let scraper = JobScraper::builder()
        .allow_private_networks(args.allow_private_networks)
        .build();

    let Some(record) = scraper.scrape(&args.url).await else {
        // The failure has already been logged with the source URL.
        return ExitCode::from(1);
    };

    let mode = if args.overwrite {
        WriteMode::Overwrite
    } else {
        WriteMode::Append
    };

    if persist(&record, &args.out, mode).is_err() {
        return ExitCode::from(1);
    }

    if args.json_output {
        match serde_json::to_string_pretty(&record) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error serializing record: {}", e);
                return ExitCode::from(1);
            }
        }
    } else {
        for (name, value) in record.field_pairs() {
            println!("{}: {}", name, value);
        }
    }

    ExitCode::SUCCESS
}
