use clap::Parser;
use std::io::Write;
use std::process::ExitCode;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use clothing_search::app_state::AppState;
use clothing_search::config::AppConfig;
use clothing_search::services::query_gate;
use clothing_search::services::search_client::SearchClient;
use clothing_search::services::session::Applied;
use clothing_search::views::terminal::{self, RenderOptions};

const QUIT: &str = ":quit";

#[derive(Parser)]
#[command(name = "clothing-search")]
#[command(about = "Search the clothing catalogue", long_about = None)]
#[command(version)]
struct Cli {
    /// Run a single search and exit. Without a query, start an interactive prompt.
    query: Vec<String>,

    /// Search service base address (overrides SEARCH_API_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match AppConfig::load(cli.base_url.clone()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            eprintln!("Set SEARCH_API_BASE_URL or pass --base-url.");
            return ExitCode::from(2);
        }
    };

    init_tracing(config.log_json);

    metrics::describe_counter!("search_requests_total", "Total search requests sent");
    metrics::describe_counter!("search_failures_total", "Search requests that failed, by kind");
    metrics::describe_counter!("search_results_total", "Items returned across all searches");
    metrics::describe_counter!(
        "search_stale_outcomes_total",
        "Search outcomes discarded because a newer search had started"
    );
    metrics::describe_histogram!("search_request_seconds", "Search round-trip time");

    let client = match SearchClient::new(&config.api_base_url, config.request_timeout()) {
        Ok(client) => client,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(2);
        }
    };

    tracing::info!(endpoint = %client.endpoint(), "Search client ready");

    let state = AppState::new(client);
    let options = RenderOptions {
        color: !cli.no_color,
    };

    if cli.query.is_empty() {
        interactive(&state, options).await
    } else {
        one_shot(&state, &cli.query.join(" "), options).await
    }
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn one_shot(state: &AppState, raw: &str, options: RenderOptions) -> ExitCode {
    let applied = match state.search(raw).await {
        Ok(applied) => applied,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let session = state.session.lock().await;
    let mut stdout = std::io::stdout().lock();
    if let Err(err) = terminal::render(&mut stdout, session.display(), options) {
        tracing::error!(error = %err, "Failed to write results");
        return ExitCode::FAILURE;
    }

    match applied {
        Applied::Resolved => ExitCode::SUCCESS,
        Applied::Errored | Applied::Stale => ExitCode::FAILURE,
    }
}

async fn interactive(state: &AppState, options: RenderOptions) -> ExitCode {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    render_current(state, options).await;
    loop {
        print!("search> ");
        if let Err(err) = std::io::stdout().flush() {
            tracing::warn!(error = %err, "Failed to flush prompt");
        }

        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(err) => {
                tracing::error!(error = %err, "Failed to read input");
                return ExitCode::FAILURE;
            }
        };

        if line.trim() == QUIT {
            break;
        }

        if line.is_empty() {
            state.clear_input().await;
        } else {
            if query_gate::accept(&line).is_ok() {
                println!("{}", terminal::LOADING);
            }
            if let Err(err) = state.search(&line).await {
                println!("{err}");
                continue;
            }
        }

        render_current(state, options).await;
    }

    ExitCode::SUCCESS
}

async fn render_current(state: &AppState, options: RenderOptions) {
    let session = state.session.lock().await;
    let mut stdout = std::io::stdout().lock();
    if let Err(err) = terminal::render(&mut stdout, session.display(), options) {
        tracing::error!(error = %err, "Failed to write output");
    }
}
