// ABOUTME: Main entry point for brandmagnet with TUI and CLI support
//
// Binary: brandmagnet
// Usage: brandmagnet [--config PATH] [--format text|json] [COMMAND]
// - No command: launches TUI
// - steps: print the qualification questionnaire
// - testimonials: print the testimonial catalogue

#![allow(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{
        self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture, Event,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::Backend, prelude::*, Terminal};
use std::{
    io::{self, IsTerminal},
    time::{Duration, Instant},
};

use brandmagnet::app::{App, EventHandler};
use brandmagnet::cli;
use brandmagnet::components::LayoutComponent;
use brandmagnet::config::SiteConfig;

/// Terminal cleanup utility to ensure proper restoration
fn cleanup_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableFocusChange
    );
}

/// Unified terminal cleanup that works with a terminal instance
fn cleanup_terminal_with_instance<B: Backend + std::io::Write>(
    terminal: &mut Terminal<B>,
) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableFocusChange
    )?;
    terminal.show_cursor()?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging()?;
    setup_panic_handler();

    let args = cli::Cli::parse();

    let config = match args.config {
        Some(ref path) => SiteConfig::load_from(path)?,
        None => SiteConfig::load()?,
    };

    let result = match args.command {
        Some(cli::Commands::Steps) => cli::steps::execute(args.format),
        Some(cli::Commands::Testimonials) => cli::testimonials::execute(args.format),

        // TUI mode (explicit or default)
        Some(cli::Commands::Tui) | None => {
            let mut app = App::new(&config)?;
            let mut layout = LayoutComponent::new();
            let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);

            // Flush any pending terminal events so stray keypresses don't land in the first answer
            while event::poll(Duration::from_millis(10)).unwrap_or(false) {
                let _ = event::read();
            }

            run_tui(&mut app, &mut layout, tick_rate).await
        }
    };

    // Ensure terminal is cleaned up on any error
    if result.is_err() {
        cleanup_terminal();
    }

    result
}

async fn run_tui(app: &mut App, layout: &mut LayoutComponent, tick_rate: Duration) -> Result<()> {
    // Check if we have a proper TTY
    if !IsTerminal::is_terminal(&io::stdout()) {
        return Err(anyhow::anyhow!(
            "No TTY detected. This application requires a terminal.\n\
             Try running directly in a terminal instead of redirecting output."
        ));
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    // Focus reports let hover end when the pointer leaves the window
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, EnableFocusChange)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    app.start();
    let result = run_tui_loop(app, layout, &mut terminal, tick_rate).await;
    // The autoplay timer is released on every exit path, including loop errors
    app.shutdown();

    if let Err(e) = cleanup_terminal_with_instance(&mut terminal) {
        tracing::error!("Failed to cleanup terminal: {}", e);
        cleanup_terminal();
    }

    result
}

async fn run_tui_loop(
    app: &mut App,
    layout: &mut LayoutComponent,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    tick_rate: Duration,
) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| {
            layout.render(frame, &mut app.state);
        })?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key_event) => {
                    // Key release events arrive on some platforms; act on presses only
                    if key_event.kind == crossterm::event::KeyEventKind::Press {
                        if let Some(app_event) = EventHandler::handle_key_event(key_event, &app.state) {
                            EventHandler::process_event(app_event, &mut app.state);
                        }
                    }
                }
                Event::Mouse(mouse_event) => {
                    if let Some(app_event) = EventHandler::handle_mouse_event(mouse_event, &app.state) {
                        EventHandler::process_event(app_event, &mut app.state);
                    }
                }
                other @ (Event::Resize(_, _) | Event::FocusLost) => {
                    if let Some(app_event) = EventHandler::handle_terminal_event(&other, &app.state) {
                        EventHandler::process_event(app_event, &mut app.state);
                    }
                }
                Event::FocusGained | Event::Paste(_) => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.tick();
            last_tick = Instant::now();
        }

        if app.state.should_quit {
            tracing::info!("Quit requested");
            return Ok(());
        }

        // Yield so runtime tasks (autoplay timer, submission) progress between polls
        tokio::task::yield_now().await;
    }
}

fn setup_logging() -> Result<()> {
    use std::fs::OpenOptions;
    use std::path::PathBuf;
    use tracing_subscriber::prelude::*;

    let log_dir = dirs::home_dir()
        .map(|home| home.join(".brandmagnet").join("logs"))
        .unwrap_or_else(|| PathBuf::from(".brandmagnet/logs"));

    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    // JSONL log file with timestamp
    let log_file = log_dir.join(format!(
        "brandmagnet-{}.jsonl",
        chrono::Local::now().format("%Y%m%d-%H%M%S")
    ));

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_target(true)
                .with_writer(file)
                .with_ansi(false),
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "brandmagnet=info".into()),
        )
        .init();

    Ok(())
}

fn setup_panic_handler() {
    use tracing::error;

    std::panic::set_hook(Box::new(|panic_info| {
        // Ensure terminal is restored before logging the panic
        cleanup_terminal();

        error!("Application panicked: {}", panic_info);
        eprintln!("Application panicked: {}", panic_info);
        eprintln!("Please check the logs for more details.");
    }));
}
