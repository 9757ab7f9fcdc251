mod app;
mod controller;
mod domain;
mod input;
mod logging;
mod notifications;
mod persistence;
mod scheduler;
mod ticker;
mod ui;

use anyhow::{Context, Result};
use app::AppState;
use clap::{Parser, Subcommand};
use controller::TimerController;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use persistence::{config_file, load_config, save_config, TimerConfig};
use ratatui::{backend::CrosstermBackend, Terminal};
use scheduler::ThreadScheduler;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "tomato")]
#[command(about = "A small terminal Pomodoro countdown with a tray bar", long_about = None)]
struct Cli {
    /// Config file path (defaults to $TOMATO_CONFIG, then the user config dir)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Countdown length in seconds, overriding the config file
    #[arg(short, long, global = true)]
    duration: Option<u64>,

    /// Wait for Play instead of counting immediately
    #[arg(long, global = true)]
    no_autostart: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    /// Config file contents with command-line overrides applied
    fn resolve_config(&self, path: &Path) -> Result<TimerConfig> {
        let mut config = load_config(path)?;
        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    fn apply_overrides(&self, config: &mut TimerConfig) {
        if let Some(duration) = self.duration {
            config.duration_secs = duration;
        }
        if self.no_autostart {
            config.autostart = false;
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let path = config_file(cli.config.clone())?;

    match &cli.command {
        Some(Commands::Init { force }) => {
            if path.exists() && !*force {
                anyhow::bail!(
                    "Config already exists: {} (use --force to overwrite)",
                    path.display()
                );
            }
            let mut config = TimerConfig::default();
            cli.apply_overrides(&mut config);
            save_config(&path, &config)?;
            println!("Wrote config: {}", path.display());
            Ok(())
        }
        None => {
            let config = cli.resolve_config(&path)?;
            // The timer still runs without a log file
            let _guard = match logging::init_logging(cli.verbose) {
                Ok(guard) => Some(guard),
                Err(e) => {
                    eprintln!("Warning: logging disabled: {:#}", e);
                    None
                }
            };
            info!(path = %path.display(), ?config, "starting");
            run_tui(config)
        }
    }
}

fn run_tui(config: TimerConfig) -> Result<()> {
    let timer = TimerController::new(
        config.duration_secs,
        config.timing(),
        Box::new(ThreadScheduler::new()),
    );
    let mut app = AppState::new(timer, config.notify);
    if config.autostart {
        app.start();
    }

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Cancels any pending tick and joins the timer thread
    drop(app);

    if let Err(err) = &result {
        error!(error = %err, "exited with error");
    }
    info!("shutdown complete");
    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    let frame = ticker::frame_duration();

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        // Handle input with a timeout so ticks and the alert keep moving
        if event::poll(frame)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key) {
                    return Ok(());
                }
            }
        }

        // Ticks posted by the timer thread are applied here, on the UI thread
        app.on_frame();

        if app.should_quit {
            return Ok(());
        }
    }
}
