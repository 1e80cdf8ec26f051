use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use connect_four_ai::agent::{Agent, RandomAgent};
use connect_four_ai::config::AppConfig;
use connect_four_ai::game::{Cell, GameState, Outcome, COLS, ROWS};
use connect_four_ai::search::{MoveDecision, MoveSelector};

/// Play Connect Four against an alpha-beta minimax bot.
#[derive(Parser)]
#[command(name = "connect-four", about = "Connect Four against a minimax bot")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override search depth (higher depth, longer move times)
    #[arg(long)]
    depth: Option<u32>,

    /// Print per-move value tables and timings
    #[arg(long)]
    debug: bool,

    /// Let a random agent play the human side
    #[arg(long)]
    autoplay: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(depth) = cli.depth {
        app_config.search.depth = depth;
    }
    if cli.debug {
        app_config.search.diagnostics = true;
    }
    app_config.validate()?;

    println!("---------------------------------------------------");
    println!();
    println!("Welcome to Connect Four!");
    println!("You play as 'X'. The bot searches {} plies deep.", app_config.search.depth);
    println!();

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        play_game(&app_config, cli.autoplay, &mut input)?;

        print!("Play again? (y/n): ");
        io::stdout().flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 || !line.trim().eq_ignore_ascii_case("y") {
            return Ok(());
        }
    }
}

/// One full game: the bot plays O, the human (or the autoplay stand-in)
/// plays X. Who starts is decided at random, as in the table game.
fn play_game(config: &AppConfig, autoplay: bool, input: &mut impl BufRead) -> Result<()> {
    let bot = MoveSelector::new(config.search.clone());
    let mut opponent = RandomAgent::new();

    let mut state = GameState::new();
    let mut bot_turn = rand::random::<bool>();
    if bot_turn {
        // the human side is always X; hand the opening move to O
        state.switch_active();
    }

    println!("---------------------------------------------------");
    println!();
    if bot_turn {
        println!("Bot starts!");
    } else {
        println!("You start!");
    }
    println!();
    render(&state);

    loop {
        let outcome = if bot_turn {
            bot_move(&bot, &mut state, config.search.diagnostics)?
        } else if autoplay {
            let col = opponent
                .select_move(&state)
                .expect("ongoing game has legal moves");
            println!("Random opponent plays column {}", col + 1);
            state.apply_move(col)?
        } else {
            human_move(&mut state, input)?
        };

        println!();
        render(&state);

        if outcome.is_terminal() {
            // `outcome` is in the mover's view; report it in the human's
            announce(if bot_turn { outcome.invert() } else { outcome });
            return Ok(());
        }

        state.switch_active();
        bot_turn = !bot_turn;
    }
}

/// Ask the bot for a move and apply it.
fn bot_move(bot: &MoveSelector, state: &mut GameState, diagnostics: bool) -> Result<Outcome> {
    println!("Thinking...");
    let decision = bot.decide(state).expect("ongoing game has legal moves");
    println!("I have made the move {}", decision.column + 1);
    if diagnostics {
        print_diagnostics(&decision);
    }
    Ok(state.apply_move(decision.column)?)
}

fn print_diagnostics(decision: &MoveDecision) {
    if decision.immediate_win {
        println!("which is a winning move");
        return;
    }
    println!("which has the value: {}", decision.value);
    let table: Vec<String> = decision
        .values
        .iter()
        .map(|value| match value {
            Some(v) => format!("{v}"),
            None => "-".to_string(),
        })
        .collect();
    println!("Values: [{}]", table.join(", "));
}

/// Prompt until the human enters a legal column, then apply it.
fn human_move(state: &mut GameState, input: &mut impl BufRead) -> Result<Outcome> {
    loop {
        print!("Make your move (1-7): ");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            anyhow::bail!("input closed mid-game");
        }

        let column = match line.trim().parse::<usize>() {
            Ok(n) if (1..=COLS).contains(&n) => n - 1,
            Ok(_) => {
                println!("Please enter a number between 1 and 7!");
                continue;
            }
            Err(_) => {
                println!("Please enter a number!");
                continue;
            }
        };

        match state.apply_move(column) {
            Ok(outcome) => return Ok(outcome),
            Err(err) => {
                println!("{err}");
                continue;
            }
        }
    }
}

fn announce(outcome: Outcome) {
    println!("---------------------------------------------------");
    println!();
    println!("GAME OVER");
    println!();
    match outcome {
        Outcome::Win => println!("You won!"),
        Outcome::Loss => println!("You lost :("),
        Outcome::Draw => println!("It's a draw!"),
        Outcome::Ongoing => unreachable!("announce called on an ongoing game"),
    }
    println!();
}

fn render(state: &GameState) {
    for row in 0..ROWS {
        let line: String = (0..COLS)
            .map(|col| match state.board().get(row, col) {
                Cell::Empty => " . ",
                Cell::X => " X ",
                Cell::O => " O ",
            })
            .collect();
        println!("{line}");
    }
    println!(" 1  2  3  4  5  6  7 ");
    println!();
}
