use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use memory_pairs::{
    GameConfig, GameController, GamePhase, GameView, HttpImageSource, ImageFetchError,
    ImageRef, ImageSource, SelectOutcome, StaticImageSource,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const COLUMNS: usize = 5;

#[derive(Debug, Parser)]
#[command(name = "memory-pairs", about = "Find every matching pair of cards")]
struct Args {
    /// JSON config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Distinct images per deck (the deck holds twice as many cards)
    #[arg(long)]
    pairs: Option<usize>,

    /// Milliseconds a resolved pair stays face-up
    #[arg(long)]
    delay_ms: Option<u64>,

    /// RNG seed for reproducible deals
    #[arg(long)]
    seed: Option<u64>,

    /// Character listing URL to take card images from
    #[arg(long)]
    endpoint: Option<String>,

    /// Skip the listing request and use placeholder avatar URLs
    #[arg(long)]
    offline: bool,
}

fn load_config(args: &Args) -> Result<GameConfig, Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => GameConfig::from_json_file(path)?,
        None => GameConfig::default(),
    };
    if let Some(pairs) = args.pairs {
        config = config.with_pair_count(pairs);
    }
    if let Some(ms) = args.delay_ms {
        config.reveal_delay_ms = ms;
    }
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if let Some(endpoint) = &args.endpoint {
        config = config.with_image_endpoint(endpoint.clone());
    }
    Ok(config)
}

fn fetch_pool(args: &Args, config: &GameConfig) -> Result<Vec<ImageRef>, ImageFetchError> {
    if args.offline {
        return StaticImageSource::placeholder(config.pair_count.saturating_mul(2)).fetch_images();
    }
    HttpImageSource::new(config)?.fetch_images()
}

fn render(view: &GameView) {
    println!();
    for row in view.cards.chunks(COLUMNS) {
        let line: Vec<String> = row
            .iter()
            .map(|card| {
                let face = if card.matched {
                    "=="
                } else if card.active {
                    "**"
                } else {
                    "??"
                };
                format!("{:>2}[{}]", card.index + 1, face)
            })
            .collect();
        println!("  {}", line.join("  "));
    }

    for card in view.cards.iter().filter(|c| c.active) {
        println!("  {:>2}: {}", card.index + 1, card.image);
    }
    println!(
        "  pairs {}/{}  wrong guesses {}",
        view.pairs_matched, view.pairs_total, view.mismatch_count
    );
    if let Some(message) = view.status_message() {
        println!("\n  {message}");
    }
}

fn prompt(phase: GamePhase) {
    let hint = match phase {
        GamePhase::Ended => "r = play again, q = quit",
        _ => "card number, q = quit",
    };
    print!("{hint}> ");
    let _ = io::stdout().flush();
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();
    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("memory-pairs: {e}");
            return ExitCode::FAILURE;
        }
    };

    let delay = config.reveal_delay();
    let mut game = GameController::new(config.clone());
    tracing::info!(seed = game.seed(), "session seed");

    println!("{}", game.view().status_message().unwrap_or_default());
    let pool = match fetch_pool(&args, &config) {
        Ok(pool) => pool,
        Err(e) => {
            game.fail_loading(&e);
            println!("{}", game.view().status_message().unwrap_or_default());
            eprintln!("memory-pairs: {e}");
            return ExitCode::FAILURE;
        }
    };
    game.start(&pool);
    render(&game.view());

    let stdin = io::stdin();
    prompt(game.phase());
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let input = line.trim();

        match input {
            "q" | "quit" => break,
            "r" | "restart" => {
                if !game.restart(&pool) {
                    println!("  finish this round first");
                }
                render(&game.view());
            }
            _ => match input.parse::<usize>() {
                Ok(number) if number > 0 => {
                    let outcome = game.select_card(number - 1);
                    render(&game.view());
                    if let SelectOutcome::Ignored(reason) = outcome {
                        println!("  ignored: {reason:?}");
                    }
                    if let Some(ticket) = outcome.ticket() {
                        if !delay.is_zero() {
                            std::thread::sleep(delay);
                        }
                        game.clear_selection(ticket);
                        if game.phase() == GamePhase::Playing {
                            render(&game.view());
                        }
                    }
                }
                _ => println!("  enter a card number between 1 and {}", game.deck().len()),
            },
        }
        prompt(game.phase());
    }

    ExitCode::SUCCESS
}
