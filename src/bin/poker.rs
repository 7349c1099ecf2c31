use clap::Parser;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use log::LevelFilter;
use poker_showdown::config::ShowdownConfig;
use poker_showdown::hand::Hand;
use poker_showdown::logging;
use poker_showdown::showdown::Round;
use poker_showdown::tui::{app::AppState, controller};
use ratatui::prelude::*;
use std::io::{self, IsTerminal, Stdout};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "poker-showdown", version)]
#[command(about = "Compare five-card poker hands, or deal rounds in a terminal UI")]
struct Cli {
    /// Two hands to compare, e.g. "2H 3D 5S 9C KD" "2C 3H 4S 8C AH"
    hands: Vec<String>,

    /// Fixed dealing seed for reproducible rounds
    #[arg(long)]
    seed: Option<u64>,

    /// Deal one round and print it instead of starting the TUI
    #[arg(long)]
    plain: bool,

    /// Show rank codes next to each category
    #[arg(long)]
    codes: bool,

    /// Log file used while the TUI owns the terminal
    #[arg(long, default_value = "poker-showdown.log")]
    log_file: PathBuf,

    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(
        stdout,
        crossterm::terminal::EnterAlternateScreen,
        crossterm::event::EnableMouseCapture
    )?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        crossterm::event::DisableMouseCapture,
        crossterm::terminal::LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    Ok(())
}

fn print_round(round: &Round, show_codes: bool) {
    for line in round.summary(show_codes) {
        println!("{line}");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = ShowdownConfig::new(cli.seed, cli.codes);

    match cli.hands.as_slice() {
        [] => {}
        [black, white] => {
            logging::init_term(cli.log_level)?;
            let black: Hand = black.parse()?;
            let white: Hand = white.parse()?;
            print_round(&Round::new(black, white), config.show_codes);
            return Ok(());
        }
        other => {
            return Err(format!("expected two hands to compare, got {}", other.len()).into());
        }
    }

    if cli.plain || !io::stdout().is_terminal() {
        logging::init_term(cli.log_level)?;
        let mut dealer = config.dealer();
        let round = dealer.deal_round()?;
        println!("Seed: {}", dealer.seed());
        print_round(&round, config.show_codes);
        return Ok(());
    }

    logging::init_file(&cli.log_file, cli.log_level)?;
    log::info!("poker-showdown {} starting TUI", poker_showdown::VERSION);
    let mut terminal = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let mut app = AppState::new(config);

    let res = controller::run(&mut terminal, &mut app, tick_rate);

    // Always attempt to restore terminal
    restore_terminal(terminal)?;
    res?;
    Ok(())
}
