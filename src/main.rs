use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use puzzle_league::config::AppConfig;
use puzzle_league::session::GameSession;
use puzzle_league::solver::SolveOutcome;
use puzzle_league::ui::App;

/// Play the tile-matching puzzle, or just print the solver's verdict.
#[derive(Parser)]
#[command(name = "puzzle-league", about = "Tile-matching puzzle with a minimal-solution solver")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Print the starting board and solver verdict to stdout, no TUI
    #[arg(long)]
    headless: bool,

    /// Override the solver's node budget
    #[arg(long)]
    max_nodes: Option<usize>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(max_nodes) = cli.max_nodes {
        config.solver.max_nodes = max_nodes;
    }
    config.validate()?;

    let session = GameSession::new(&config);

    if cli.headless {
        headless_report(&session);
        return Ok(());
    }

    run_tui(session)
}

/// Print the starting board and the solver's verdict.
fn headless_report(session: &GameSession) {
    print!("{}", session.board());
    match session.solution() {
        Some(SolveOutcome::Solved(path)) => {
            println!("Minimal clearing sequence: {} moves", path.len());
            for mv in path {
                println!("  {mv}");
            }
        }
        Some(SolveOutcome::NoSolution) => {
            println!("No clearing sequence exists.");
        }
        Some(SolveOutcome::BudgetExhausted { explored }) => {
            println!("Search stopped after {explored} expansions without a verdict.");
        }
        None => {
            println!("Solver disabled.");
        }
    }
}

fn run_tui(session: GameSession) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(session);
    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res.context("running terminal UI")
}
