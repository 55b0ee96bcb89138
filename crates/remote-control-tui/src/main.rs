//! Remote Control TUI - answer remote desktop control requests from a terminal
//!
//! Seeds a conference from the command line, optionally raises a request,
//! and lets the local user allow or deny it.

use std::fs::File;
use std::io;
use std::panic;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use remote_control_core::Translator;
use remote_control_tui::app::{App, Event, TuiConfig};
use remote_control_tui::cli::Cli;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Application entry point with panic handling for terminal restoration
fn main() -> Result<()> {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => TuiConfig::try_load_from(path),
        None => TuiConfig::try_load(),
    };
    let (config, config_error) = match loaded {
        Ok(config) => (config, None),
        Err(e) => (TuiConfig::default(), Some(e)),
    };

    // Set up panic hook to restore terminal on crash
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    init_logging(&config)?;

    // Reported only now that a subscriber exists
    if let Some(e) = config_error {
        tracing::warn!("Using default configuration: {}", e);
    }

    let result = run_app(&cli, &config);

    if let Err(e) = &result {
        tracing::error!("Application error: {}", e);
    }

    result
}

/// Log to the configured file; the terminal belongs to the UI
fn init_logging(config: &TuiConfig) -> Result<()> {
    let filter = EnvFilter::from_default_env()
        .add_directive("remote_control_tui=info".parse()?)
        .add_directive("remote_control_core=info".parse()?);

    match &config.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {:?}", path))?;
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(false)
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .with(filter)
                .init();
        }
        None => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(io::sink))
                .with(filter)
                .init();
        }
    }

    Ok(())
}

/// Main application runner
fn run_app(cli: &Cli, config: &TuiConfig) -> Result<()> {
    let mut translator = Translator::new();
    if let Some(path) = &config.translations {
        translator
            .load_bundle(path)
            .with_context(|| format!("Failed to load translations from {:?}", path))?;
    }

    let mut app = App::new(cli.conference(&config.local_display_name), config, translator);
    if let Some(participant_id) = cli.request() {
        app.sender()
            .send(Event::RemoteControlRequest { participant_id })
            .context("Event channel closed")?;
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result.map_err(|e| anyhow::anyhow!("{}", e))
}
