//! CLI entry point for the bikeshare statistics tool.
//!
//! Provides subcommands for computing trip statistics for one city and
//! filter, browsing the filtered rows, and an interactive prompt loop.

use std::ffi::OsStr;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use bikeshare_stats::{
    analyzers::StatsReport,
    browse::{DEFAULT_PAGE_SIZE, Direction, RowPager},
    config::Settings,
    filters::{City, DayFilter, FilterSpec, MonthFilter},
    loader::{CsvSource, load},
    output::{append_summary, print_json, print_pretty, render_page, render_report},
    session::run_interactive,
};
use clap::{Args, Parser, Subcommand};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "bikeshare_stats")]
#[command(about = "Descriptive statistics over US bikeshare trip data", long_about = None)]
struct Cli {
    /// Directory containing chicago.csv, new_york_city.csv and washington.csv
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct FilterArgs {
    /// City to analyze (chicago, new_york_city or washington)
    #[arg(short, long)]
    city: City,

    /// Month from january to june, or "all"
    #[arg(short, long, default_value = "all")]
    month: MonthFilter,

    /// Day of the week, or "all"
    #[arg(short, long, default_value = "all")]
    day: DayFilter,
}

impl FilterArgs {
    fn spec(&self) -> FilterSpec {
        FilterSpec {
            city: self.city,
            month: self.month,
            day: self.day,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Compute time, station, duration and user statistics
    Stats {
        #[command(flatten)]
        filter: FilterArgs,

        /// Print the report as JSON instead of text
        #[arg(long, default_value_t = false)]
        json: bool,

        /// CSV file to append a summary row to
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print raw trips matching the filter, a page at a time
    Rows {
        #[command(flatten)]
        filter: FilterArgs,

        /// Start from the "first" or "bottom" rows
        #[arg(long, default_value = "first")]
        from: Direction,

        /// Number of pages to print
        #[arg(short = 'n', long, default_value_t = 1)]
        pages: usize,

        /// Rows per page
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        page_size: usize,
    },
    /// Ask for filters interactively, as many times as you like
    Interactive,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::from_env().with_data_dir(cli.data_dir);
    let _log_guard = init_logging(&settings.log_file_path)?;

    info!(data_dir = %settings.data_dir.display(), "Using trip data directory");
    let source = CsvSource::new(&settings.data_dir);

    match cli.command {
        Commands::Stats {
            filter,
            json,
            output,
        } => {
            let trips = load(&source, &filter.spec())?;
            let report = StatsReport::compute(&trips);
            print_pretty(&report);

            let mut stdout = io::stdout().lock();
            if json {
                print_json(&mut stdout, &report)?;
            } else {
                render_report(&mut stdout, &report)?;
            }
            stdout.flush()?;

            if let Some(path) = output {
                append_summary(&path, &report)?;
            }
        }
        Commands::Rows {
            filter,
            from,
            pages,
            page_size,
        } => {
            let trips = load(&source, &filter.spec())?;
            if trips.is_empty() {
                warn!("No trips match the filter");
            }

            let mut stdout = io::stdout().lock();
            for page in RowPager::new(trips.trips(), from, page_size).take(pages) {
                render_page(&mut stdout, &page)?;
            }
            stdout.flush()?;
        }
        Commands::Interactive => {
            let mut stdin = io::stdin().lock();
            let mut stdout = io::stdout().lock();
            run_interactive(&source, &mut stdin, &mut stdout)?;
        }
    }

    Ok(())
}

/// Logging setup: colored stderr + JSON rolling log file.
///
/// Span close events on stderr report how long each statistic took.
fn init_logging(log_file_path: &Path) -> Result<WorkerGuard> {
    let log_dir = log_file_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("logs"));
    let log_file_name = log_file_path
        .file_name()
        .unwrap_or(OsStr::new("bikeshare_stats.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    Ok(file_guard)
}
