//! Folio Entry Point
//!
//! Launches the terminal portfolio.
//!
//! Settings come from `$XDG_CONFIG_HOME/folio/config.toml` and the
//! environment (`EMAILJS_*`, `FOLIO_*`). Logs go to `$FOLIO_LOG`, or
//! `folio.log` in the temp directory, filtered by `RUST_LOG`.

use std::fs::File;
use std::io;
use std::panic;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::Context;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio_core::{load_config, EmailJsDispatcher};
use folio_tui::App;

fn log_path() -> PathBuf {
    std::env::var_os("FOLIO_LOG")
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("folio.log"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Set up logging; the alternate screen owns stdout, so write to a file
    let path = log_path();
    let log_file = File::create(&path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(log_file)),
        )
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Check if we have a TTY before attempting initialization
    use std::io::IsTerminal;

    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        eprintln!("❌ Error: folio requires a terminal (TTY)");
        eprintln!();
        eprintln!("This usually means:");
        eprintln!("  • SSH without -t flag");
        eprintln!("  • Piped stdin/stdout");
        std::process::exit(1);
    }

    let config = load_config().context("failed to load configuration")?;
    tracing::info!(source = %config.source(), "configuration loaded");
    let dispatcher = EmailJsDispatcher::new(config.email.clone())?;

    // Set up panic hook to restore terminal
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal before printing panic
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the app
    let size = crossterm::terminal::size()?;
    let mut app = App::new(&config.ui, Arc::new(dispatcher), size);
    let result = app.run(&mut terminal).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    // Propagate any errors
    result
}
