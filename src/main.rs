use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use connect_four::config::AppConfig;
use connect_four::game::GameState;
use connect_four::ui::{headless, App};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Two-player Connect Four")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Override board height (rows)
    #[arg(long)]
    height: Option<usize>,

    /// Override board width (columns)
    #[arg(long)]
    width: Option<usize>,

    /// Replay these 0-based columns without a TUI, e.g. --moves 3,3,4
    #[arg(long, value_delimiter = ',')]
    moves: Option<Vec<usize>>,

    /// Print headless results as JSON lines
    #[arg(long, requires = "moves")]
    json: bool,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref(), cli.moves.is_some())?;

    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(height) = cli.height {
        app_config.game.height = height;
    }
    if let Some(width) = cli.width {
        app_config.game.width = width;
    }

    let game_state = GameState::new_game(app_config.game).context("starting game")?;

    match cli.moves {
        Some(moves) => run_headless(game_state, &moves, cli.json),
        None => run_tui(App::new(game_state, app_config.ui)).context("running terminal UI"),
    }
}

/// Logs go to `log_file` when given. Without one, only headless mode logs
/// (to stderr); the TUI owns the terminal.
fn init_tracing(log_file: Option<&Path>, headless: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None if headless => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .init();
        }
        None => {}
    }
    Ok(())
}

fn run_headless(mut game_state: GameState, moves: &[usize], json: bool) -> Result<()> {
    let records = headless::replay(&mut game_state, moves).context("replaying moves")?;

    for record in &records {
        if json {
            println!("{}", serde_json::to_string(record)?);
        } else {
            println!("{}", record.describe());
        }
    }
    if !json {
        print!("{}", game_state.board());
    }
    Ok(())
}

fn run_tui(mut app: App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
