//! appshelf binary entry: CLI parsing, file logging and the TUI runtime.

use std::path::PathBuf;

use clap::Parser;
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use appshelf::app::{RunOptions, run};
use appshelf::state::Route;

#[derive(Parser, Debug)]
#[command(
    name = "appshelf",
    version,
    about = "Browse, search and install apps from a local catalog"
)]
struct Cli {
    /// Page to open first: home, apps, details/<id> or myinstall.
    #[arg(long, default_value = "home")]
    page: String,
    /// Log filter for the log file (e.g. info, debug, appshelf=trace). Overrides RUST_LOG.
    #[arg(long)]
    log_level: Option<String>,
    /// Use this file instead of the default installed list.
    #[arg(long, value_name = "PATH")]
    installed_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> appshelf::app::Result<()> {
    let cli = Cli::parse();

    let log_dir = appshelf::theme::logs_dir();
    let file_appender = rolling::never(&log_dir, "appshelf.log");
    let (writer, _guard) = non_blocking(file_appender);
    let filter = match cli.log_level.as_deref() {
        Some(level) => EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info")),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    let settings_path = appshelf::theme::settings_path();
    if let Err(e) = appshelf::theme::ensure_settings_present(&settings_path) {
        tracing::warn!(
            path = %settings_path.display(),
            error = %e,
            "could not write default settings"
        );
    }

    let initial_route = Route::parse(&cli.page);
    let res = run(RunOptions {
        initial_route,
        installed_file: cli.installed_file,
    })
    .await;
    if let Err(e) = &res {
        tracing::error!(error = %e, "appshelf exited with an error");
    }
    res
}
