use std::io;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use scraper::Html;
use tracing_subscriber::EnvFilter;

use transfer_status::{extract_table, fetch_html, locate_heading, render_matrix, AppError};

const DEFAULT_URL: &str = "https://www3.mpifr-bonn.mpg.de/cgi-bin/showtransfers.cgi";
const DEFAULT_HEADING: &str = "List of Active Data Transfers";

#[derive(Parser)]
#[command(name = "transfer-status")]
#[command(version)]
#[command(about = "Print the table following a heading on a status page", long_about = None)]
struct Cli {
    /// Status page to fetch
    #[arg(value_name = "URL", default_value = DEFAULT_URL)]
    url: String,

    /// Heading to search for (case-insensitive substring)
    #[arg(long, default_value = DEFAULT_HEADING)]
    heading: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 20)]
    timeout_secs: u64,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        // Exit 2 lets scripts tell "page structure changed" from a
        // network failure.
        Err(AppError::NotFound(message)) => {
            println!("Error: {message}");
            ExitCode::from(2)
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> transfer_status::Result<()> {
    let html = fetch_html(&cli.url, Duration::from_secs(cli.timeout_secs))?;
    let document = Html::parse_document(&html);

    let heading = locate_heading(&document, &cli.heading)?;
    let (headers, rows) = extract_table(heading)?;
    tracing::info!(columns = headers.len(), rows = rows.len(), "table extracted");

    let stdout = io::stdout();
    render_matrix(&headers, &rows, &mut stdout.lock()).map_err(anyhow::Error::new)?;
    Ok(())
}
