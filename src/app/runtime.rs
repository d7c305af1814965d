use std::path::PathBuf;
use std::time::Instant;

use crossterm::event::Event as CEvent;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::{
    select,
    sync::mpsc,
    task::JoinHandle,
    time::{Duration, sleep},
};

use crate::logic::{expire_searching, expire_toast, navigate};
use crate::state::{AppState, Route};
use crate::store::{InstallStore, InstalledSet};
use crate::ui::ui;

use super::Result;
use super::persist::{maybe_flush_installed, maybe_flush_sort};
use super::terminal::{TerminalGuard, setup_terminal};

/// Interval of the housekeeping tick (spinner frames, toast and search expiry).
const TICK_MS: u64 = 200;

/// Startup options collected from the command line.
#[derive(Clone, Debug, Default)]
pub struct RunOptions {
    /// Page shown first.
    pub initial_route: Route,
    /// Override for the installed set file.
    pub installed_file: Option<PathBuf>,
}

/// What: Run the store TUI until the user quits.
///
/// Inputs:
/// - `opts`: Initial page and optional installed-file override.
///
/// Output:
/// - `Ok(())` on a clean exit; terminal setup or draw errors otherwise.
///
/// Details:
/// - The installed set becomes available after the configured initial delay; until then
///   pages show loading placeholders and install actions are ignored.
/// - State is flushed after every handled event and once more on exit.
pub async fn run(opts: RunOptions) -> Result<()> {
    let prefs = crate::theme::settings();
    let settings_path = crate::theme::settings_path();

    let mut app = AppState::default();
    if let Some(path) = opts.installed_file {
        app.installed_path = path;
    }
    app.apply_settings(&prefs);
    navigate(&mut app, opts.initial_route);
    crate::logic::apply_filters_and_sort_preserve_selection(&mut app);
    tracing::info!(
        route = %app.route,
        installed_path = %app.installed_path.display(),
        products = app.catalog.len(),
        "starting"
    );

    setup_terminal()?;
    let _guard = TerminalGuard;
    let mut terminal = Terminal::new(CrosstermBackend::new(std::io::stdout()))?;

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<CEvent>();
    let (loaded_tx, mut loaded_rx) = mpsc::unbounded_channel::<InstalledSet>();
    let (tick_tx, mut tick_rx) = mpsc::unbounded_channel::<()>();

    spawn_initial_load(
        InstallStore::new(app.installed_path.clone()),
        prefs.initial_load_delay(),
        loaded_tx,
    );

    std::thread::spawn(move || {
        loop {
            if let Ok(true) = crossterm::event::poll(Duration::from_millis(50))
                && let Ok(ev) = crossterm::event::read()
                && event_tx.send(ev).is_err()
            {
                break;
            }
        }
    });

    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(TICK_MS));
        loop {
            interval.tick().await;
            if tick_tx.send(()).is_err() {
                break;
            }
        }
    });

    loop {
        terminal.draw(|f| ui(f, &mut app))?;

        select! {
            Some(ev) = event_rx.recv() => {
                if crate::events::handle_event(ev, &mut app) {
                    break;
                }
                maybe_flush_installed(&mut app);
                maybe_flush_sort(&mut app, &settings_path);
            }
            Some(set) = loaded_rx.recv() => { apply_loaded(&mut app, set); }
            Some(_) = tick_rx.recv() => { on_tick(&mut app, Instant::now()); }
            else => { break; }
        }
    }

    maybe_flush_installed(&mut app);
    maybe_flush_sort(&mut app, &settings_path);
    tracing::info!(installed = app.installed.len(), "exiting");
    Ok(())
}

/// What: Load the installed set after `delay` and deliver it over `tx`.
///
/// Details:
/// - File IO runs on the blocking pool; a failed blocking task delivers an empty set.
pub(crate) fn spawn_initial_load(
    store: InstallStore,
    delay: Duration,
    tx: mpsc::UnboundedSender<InstalledSet>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        sleep(delay).await;
        let set = match tokio::task::spawn_blocking(move || store.load()).await {
            Ok(set) => set,
            Err(e) => {
                tracing::warn!(error = %e, "installed set load task failed");
                InstalledSet::new()
            }
        };
        let _ = tx.send(set);
    })
}

/// What: Replace the placeholder installed set with the loaded one and end loading.
pub(crate) fn apply_loaded(app: &mut AppState, set: InstalledSet) {
    tracing::debug!(count = set.len(), "installed set ready");
    app.installed = set;
    app.loading = false;
    app.installed_dirty = false;
    if app.route == Route::MyInstallations && !app.installed_products().is_empty() {
        app.installs_state.select(Some(0));
    }
}

/// Periodic housekeeping: advance the spinner and expire the toast and search windows.
pub(crate) fn on_tick(app: &mut AppState, now: Instant) {
    app.spinner_tick = app.spinner_tick.wrapping_add(1);
    expire_toast(app, now);
    expire_searching(app, now);
}
