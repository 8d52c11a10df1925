//! Terminal UI for kerbside showing today's, tomorrow's, and later waste collections.

mod app;
mod calendar;
mod catalog;
mod input;
mod ui;

use std::{
    env,
    fs::{self, OpenOptions},
    io,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
    time::Duration as StdDuration,
};

use anyhow::{Context, Result, anyhow};
use chrono::{Local, NaiveDate};
use clap::Parser;
use crossterm::{
    event::{self, Event as CEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use kerbside_core::config::Config;
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::app::{App, View};
use crate::input::Action;

const LOG_ENV: &str = "KERBSIDE_LOG";

#[derive(Debug, Parser)]
#[command(name = "kerbside", version, about = "Kerbside recycling and rubbish collection calendar")]
struct Cli {
    /// Configuration file (defaults to the platform config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Show the calendar as of this date instead of following the clock
    #[arg(long, value_name = "YYYY-MM-DD")]
    date: Option<NaiveDate>,

    /// View shown at startup
    #[arg(long, value_enum, default_value_t = View::Upcoming)]
    view: View,

    /// Log file (defaults to the platform cache directory)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.log_file.as_deref())?;

    let config = match &cli.config {
        Some(path) => Config::load(path),
        None => Config::load_default(),
    }
    .context("Failed to load configuration")?;

    let rules = config.rules();
    info!(
        reference = %rules.reference_date(),
        cache_capacity = ?config.schedule.cache_capacity,
        "starting kerbside"
    );

    // Service + app state
    let service = Arc::new(config.service());
    let today = cli.date.unwrap_or_else(|| Local::now().date_naive());
    let app = App::new(service, cli.view, today, cli.date.is_some(), &config.display);

    // Terminal init
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run event loop
    let res = run(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<()> {
    loop {
        // Keep "today" current across midnight
        app.tick(Local::now().date_naive());

        terminal.draw(|frame| ui::draw(frame, &app))?;

        // Poll for input (small timeout to keep CPU low)
        if event::poll(StdDuration::from_millis(250))?
            && let CEvent::Key(key) = event::read()?
            && input::handle_key_event(key, &mut app) == Action::Quit
        {
            break;
        }
    }

    info!("exiting");
    Ok(())
}

fn init_logging(path: Option<&Path>) -> Result<()> {
    let path = path.map_or_else(default_log_path, Path::to_path_buf);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_err| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow!(err))
}

fn default_log_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(env::temp_dir)
        .join("kerbside")
        .join("kerbside.log")
}
