use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rs_mastermind::*;
use std::error::Error;
use std::io;
use std::io::BufRead;

/// Simple program to play Mastermind in the terminal, guessing a hidden sequence of colors.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// The number of colors in the secret and in each guess.
    #[arg(short, long, default_value_t = 4)]
    length: usize,

    /// The number of guesses the player gets.
    #[arg(short, long, default_value_t = 10)]
    guesses: usize,

    /// Forbid repeated colors in the secret and in guesses.
    #[arg(long)]
    no_duplicates: bool,

    /// Comma-separated palette, using color names or #rrggbb codes. Defaults to the six classic
    /// colors.
    #[arg(short, long)]
    colors: Option<String>,

    /// Seed for the secret, to replay the same game.
    #[arg(short, long)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run an interactive game against a random secret.
    Play,
    /// Score a single guess against a given secret, e.g. `score red,blue blue,red`.
    Score { secret: String, guess: String },
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let palette = match &args.colors {
        Some(colors) => colors.parse::<Palette>()?,
        None => Palette::default(),
    };
    let config = GameConfig {
        duplicates_allowed: !args.no_duplicates,
        sequence_length: args.length,
        number_of_guesses: args.guesses,
        palette,
    };

    match args.command {
        Command::Play => play_interactive_game(config, args.seed)?,
        Command::Score { secret, guess } => score_single_guess(&secret, &guess)?,
    }

    Ok(())
}

fn score_single_guess(secret: &str, guess: &str) -> Result<(), MastermindError> {
    let secret = parse_sequence(secret)?;
    let guess = parse_sequence(guess)?;
    let result = score(&guess, &secret)?;
    println!("Exact matches: {}", result.exact);
    println!("Inexact matches: {}", result.inexact);
    Ok(())
}

fn parse_sequence(text: &str) -> Result<Vec<Color>, MastermindError> {
    text.split(',').map(str::parse::<Color>).collect()
}

fn play_interactive_game(config: GameConfig, seed: Option<u64>) -> Result<(), Box<dyn Error>> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut game = Game::new(config, &mut rng)?;

    println!(
        "I've chosen a secret of {} colors. You have {} guesses.\n\n\
         Enter keys separated by spaces:\n\n\
           * '1'-'9' = place the color with that number\n\
           * 'backspace' = remove the last color\n\
           * 'enter' = submit the row\n\
           * 'quit' = give up\n",
        game.config().sequence_length,
        game.config().number_of_guesses
    );
    print_palette(game.palette());
    print_board(&game);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        for key in line.split_whitespace() {
            if key == "quit" {
                println!("Giving up.");
                return Ok(());
            }
            let intent = match Intent::from_key(key, game.palette()) {
                Ok(Some(intent)) => intent,
                Ok(None) => {
                    eprintln!("Unknown key '{}'.", key);
                    continue;
                }
                Err(err) => {
                    eprintln!("Error: {}", err);
                    continue;
                }
            };
            match game.apply(intent)? {
                Some(Outcome::Won(summary)) => {
                    print_summary(&summary);
                    println!("You won! It took you {} guesses.", summary.history.len());
                    return Ok(());
                }
                Some(Outcome::Lost(summary)) => {
                    print_summary(&summary);
                    println!("You lost :(");
                    return Ok(());
                }
                Some(Outcome::Continue(result)) => println!(
                    "Exact matches: {}, inexact matches: {}",
                    result.exact, result.inexact
                ),
                Some(Outcome::Ignored) => println!("Fill the whole row before submitting."),
                None => {}
            }
        }
        print_board(&game);
    }

    Ok(())
}

fn print_palette(palette: &Palette) {
    let entries: Vec<String> = palette
        .colors()
        .iter()
        .enumerate()
        .map(|(index, color)| format!("{}={}", index + 1, color))
        .collect();
    println!("Colors: {}\n", entries.join("  "));
}

fn format_row(row: &Row) -> String {
    row.cells()
        .iter()
        .map(|cell| match cell {
            Cell::Empty => format!("{:>8}", "."),
            Cell::Filled(color) => format!("{:>8}", color.to_string()),
        })
        .collect::<Vec<String>>()
        .join("")
}

/// Draws the rows from the last to the first, so the board fills from the bottom up.
fn print_board(game: &Game) {
    let history = game.history();
    for (index, row) in game.board().rows().iter().enumerate().rev() {
        let marker = if index + 1 == game.active_row_index() && !game.is_over() {
            ">"
        } else {
            " "
        };
        match history.get(index) {
            Some(result) => println!(
                "{}{}   exact {} inexact {}",
                marker,
                format_row(row),
                result.exact,
                result.inexact
            ),
            None => println!("{}{}", marker, format_row(row)),
        }
    }
}

fn print_summary(summary: &GameSummary) {
    for (row, result) in summary.board.rows().iter().zip(&summary.history).rev() {
        println!(
            " {}   exact {} inexact {}",
            format_row(row),
            result.exact,
            result.inexact
        );
    }
    let secret: Vec<String> = summary.secret.iter().map(Color::to_string).collect();
    println!("\nThe secret was: {}", secret.join(", "));
}
