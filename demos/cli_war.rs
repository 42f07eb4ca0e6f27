//! CLI War example.
//!
//! Plays against the public deck-of-cards API by default. Pass `--local`
//! (optionally followed by a seed) to play against an in-memory deck.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use tracing_subscriber::EnvFilter;
use warrs::{
    Card, DeckProvider, Game, GameOptions, HttpDeckProvider, LocalDeckProvider, MatchOutcome, Rank,
    RoundError, RoundOutcome, RoundResult, Suit,
};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("War CLI example (Enter to draw, 'r' to reset, 'q' to quit)");

    let args: Vec<String> = std::env::args().collect();
    if let Some(pos) = args.iter().position(|arg| arg == "--local") {
        let seed = args
            .get(pos + 1)
            .and_then(|arg| arg.parse::<u64>().ok())
            .unwrap_or_else(time_seed);
        println!("Using a local deck (seed {seed}).");
        run(LocalDeckProvider::new(seed)).await;
    } else {
        run(HttpDeckProvider::from_env()).await;
    }
}

async fn run<P: DeckProvider>(provider: P) {
    println!("Shuffling deck...");
    let mut game = match Game::start(provider, GameOptions::default()).await {
        Ok(game) => game,
        Err(err) => {
            println!("Could not initialize deck: {err}. Try again.");
            return;
        }
    };

    loop {
        print_scores(&game);

        match prompt_line("> ").as_str() {
            "q" | "quit" => return,
            "r" | "reset" => {
                match game.reset().await {
                    Ok(()) => println!("Fresh deck shuffled."),
                    Err(err) => println!("Reset failed: {err}. Try again."),
                }
                continue;
            }
            _ => {}
        }

        match game.play_round().await {
            Ok(round) => print_round(&round),
            Err(RoundError::GameOver) => {
                println!("The match is over. Reset with 'r' or quit with 'q'.");
            }
            Err(RoundError::Provider(err)) => println!("Draw failed: {err}. Try again."),
        }
    }
}

fn print_scores<P: DeckProvider>(game: &Game<P>) {
    println!(
        "\nPlayer 1: {}  Player 2: {}  ({} cards left)",
        game.scores().player1,
        game.scores().player2,
        game.cards_remaining()
    );
}

fn print_round(round: &RoundResult) {
    println!(
        "Player 1 flips {}   Player 2 flips {}",
        format_card(&round.cards[0]),
        format_card(&round.cards[1])
    );

    match round.outcome {
        RoundOutcome::Player1Wins if round.wars > 0 => {
            println!("Player 1 wins the WAR (+{}).", round.points);
        }
        RoundOutcome::Player2Wins if round.wars > 0 => {
            println!("Player 2 wins the WAR (+{}).", round.points);
        }
        RoundOutcome::Player1Wins => println!("Player 1 wins the round."),
        RoundOutcome::Player2Wins => println!("Player 2 wins the round."),
        RoundOutcome::WarAborted => {
            println!("Not enough cards left to complete WAR. Ending game...");
        }
    }

    if let Some(standing) = round.ending {
        match standing {
            MatchOutcome::Player1 => println!("Game over: Player 1 wins!"),
            MatchOutcome::Player2 => println!("Game over: Player 2 wins!"),
            MatchOutcome::Tie => println!("Game over: it's a tie!"),
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let (rank, is_face) = match card.rank {
        Rank::Jack => ("J".to_string(), true),
        Rank::Queen => ("Q".to_string(), true),
        Rank::King => ("K".to_string(), true),
        Rank::Ace => ("A".to_string(), true),
        numeral => (numeral.value().to_string(), false),
    };

    let colored_rank = if is_face {
        colorize(&rank, color_code)
    } else {
        rank
    };
    let colored_suit = colorize(suit, color_code);
    format!("{colored_rank}{colored_suit}")
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
