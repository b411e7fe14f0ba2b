//! serplinks - search results page link extractor

use std::io;
use std::process::ExitCode;
use std::time::Duration;

use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use serplinks::dom::{outline, parse_html};
use serplinks::fetch::{self, FetchConfig, HttpFetcher};
use serplinks::{AriaHidden, Document, ExtractConfig};

#[derive(Parser)]
#[command(name = "serplinks")]
#[command(version, about = "Search the web and print the result links as JSON", long_about = None)]
#[command(after_help = "EXAMPLES:
    serplinks 'test driven development'          Search and print links as JSON
    serplinks --format text rust                 One line per link
    serplinks --input page.html                  Extract from a saved results page
    serplinks --input page.html --dump-tree      Show the parsed tree")]
struct Cli {
    /// The query to be performed
    #[arg(value_name = "QUERY", required_unless_present = "input")]
    query: Option<String>,

    /// Read the results page from a file instead of fetching it
    #[arg(short, long, value_name = "FILE")]
    input: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Keep headings marked aria-hidden (accessibility duplicates)
    #[arg(long)]
    include_aria_hidden: bool,

    /// Print the parsed tree instead of links
    #[arg(long)]
    dump_tree: bool,

    /// Search endpoint the escaped query is appended to
    #[arg(long, value_name = "URL", default_value = fetch::DEFAULT_BASE_URL)]
    base_url: String,

    /// User agent sent with the request
    #[arg(long, value_name = "UA", default_value = fetch::DEFAULT_USER_AGENT)]
    user_agent: String,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS", default_value_t = 30)]
    timeout: u64,

    /// More log output on stderr (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Pretty-printed JSON array of {url, title}
    Json,
    /// One `Link:url=...,title=...` line per link
    Text,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> serplinks::Result<()> {
    let aria_hidden = if cli.include_aria_hidden {
        AriaHidden::Include
    } else {
        AriaHidden::Exclude
    };
    let config = ExtractConfig::new().with_aria_hidden(aria_hidden);
    let doc = load_document(cli, &config)?;

    if cli.dump_tree {
        print!("{}", outline(&parse_html(doc.html()).dom));
        return Ok(());
    }
    tracing::info!(links = doc.len(), "extracted links");

    match cli.format {
        Format::Json => {
            let json = serde_json::to_string_pretty(doc.links()).map_err(io::Error::from)?;
            println!("{json}");
        }
        Format::Text => {
            for link in doc.links() {
                println!("{link}");
            }
        }
    }
    Ok(())
}

fn load_document(cli: &Cli, config: &ExtractConfig) -> serplinks::Result<Document> {
    if let Some(path) = &cli.input {
        tracing::info!(%path, "reading results page from file");
        let bytes =
            std::fs::read(path).map_err(|e| io::Error::new(e.kind(), format!("{path}: {e}")))?;
        return Document::from_bytes(&bytes, config);
    }

    // clap guarantees a query when no input file is given
    let query = cli.query.as_deref().unwrap_or_default();
    let fetch_config = FetchConfig::default()
        .with_base_url(&cli.base_url)
        .with_user_agent(&cli.user_agent)
        .with_timeout(Duration::from_secs(cli.timeout));
    let fetcher = HttpFetcher::new(&fetch_config)?;
    tracing::info!(query, base_url = %fetch_config.base_url, "searching");
    fetch::search(query, &fetch_config.base_url, &fetcher, config)
}
