use clap::{Parser, ValueEnum};
use color_lines::board::Coord;
use color_lines::game::{Game, GameConfig, GameStatus, MoveOutcome};
use color_lines::lines::find_runs;
use std::io::{self, Write}; // For input/output
use tracing_subscriber::EnvFilter;

/// Board size and palette presets.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum Difficulty {
    /// 10x10 board, five colors
    Easy,
    /// 12x12 board, six colors
    Medium,
    /// 14x14 board, seven colors
    Hard,
}

impl Difficulty {
    fn config(self) -> GameConfig {
        match self {
            Difficulty::Easy => GameConfig::easy(),
            Difficulty::Medium => GameConfig::medium(),
            Difficulty::Hard => GameConfig::hard(),
        }
    }
}

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Difficulty preset controlling board size and palette
    #[clap(short, long, value_enum, default_value_t = Difficulty::Easy)]
    difficulty: Difficulty,

    /// Seed for deterministic ball spawning
    #[clap(short, long)]
    seed: Option<u64>,
}

/// Reads one trimmed line from stdin. Returns `None` when stdin is
/// closed or unreadable.
fn read_command() -> Option<String> {
    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_string()),
    }
}

fn parse_cell(row_str: &str, col_str: &str) -> Option<Coord> {
    let row = row_str.parse::<usize>().ok()?;
    let col = col_str.parse::<usize>().ok()?;
    Some(Coord::new(row, col))
}

/// Prints the qualifying runs through `coord`, if any.
fn inspect(game: &Game, coord: Coord) {
    if !game.board().in_bounds(coord) {
        println!("Invalid coordinates: {} is outside the board.", coord);
        return;
    }
    let runs = find_runs(game.board(), coord, game.config().match_threshold);
    if runs.is_empty() {
        println!("No qualifying runs through {}.", coord);
        return;
    }
    for run in runs {
        let cells: Vec<String> = run.cells.iter().map(|c| c.to_string()).collect();
        println!("  {} run of {} cells: {}", run.color, run.len(), cells.join(" "));
    }
}

fn handle_select(game: &mut Game, coord: Coord) {
    match game.select(coord) {
        Ok(MoveOutcome::Selected(cell)) => println!("Selected the ball at {}.", cell),
        Ok(MoveOutcome::Reselected(cell)) => println!("Selection moved to {}.", cell),
        Ok(MoveOutcome::MoveRejected(reason)) => println!("Rejected: {}.", reason),
        Ok(MoveOutcome::MoveApplied(report)) => {
            println!("Moved in {} steps.", report.path.len() - 1);
            if !report.cleared.is_empty() {
                println!("Cleared {} balls!", report.cleared.len());
            }
            if !report.spawned.is_empty() {
                println!("{} new balls appeared.", report.spawned.len());
            }
        }
        Ok(MoveOutcome::GameEnded(status)) => {
            println!("The game is already over ({}).", status)
        }
        Err(err) => println!("Invalid coordinates: {}", err),
    }
}

fn main() {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = args.difficulty.config();
    let mut game = match args.seed {
        Some(seed) => Game::with_seed(config, seed),
        None => Game::new(config),
    }
    .expect("difficulty presets are valid configurations");

    println!("Welcome to Color Lines!");

    loop {
        println!("---------------------");
        println!(
            "Turns: {}, Cleared: {}, Status: {}",
            game.turns(),
            game.balls_cleared(),
            game.status()
        );
        println!("{}", game.board().to_string_with_highlight(game.selection()));

        if game.status() != GameStatus::Running {
            println!("---------------------");
            if game.status() == GameStatus::Lost {
                println!(
                    "GAME OVER! The board filled up after {} turns.",
                    game.turns()
                );
            } else {
                println!("🎉 YOU WIN! 🎉");
            }
            println!("Balls cleared: {}", game.balls_cleared());
            print!("Play again? 'n' starts a new game, anything else quits: ");
            io::stdout().flush().unwrap(); // Ensure prompt is shown before input

            match read_command() {
                Some(ref command) if command == "n" => {
                    game.reset_game();
                    continue;
                }
                _ => {
                    println!("Thanks for playing!");
                    break;
                }
            }
        }

        print!("Enter 'row col' to select or move, 'i row col' to inspect, 'n' for a new game, 'q' to quit: ");
        io::stdout().flush().unwrap();

        let input = match read_command() {
            Some(input) => input,
            None => {
                println!();
                break;
            }
        };

        let parts: Vec<&str> = input.split_whitespace().collect();
        match parts.as_slice() {
            ["q"] => {
                println!("Thanks for playing!");
                break;
            }
            ["n"] => {
                game.reset_game();
                println!("New game started.");
            }
            ["i", row_str, col_str] => match parse_cell(row_str, col_str) {
                Some(coord) => inspect(&game, coord),
                None => println!("Invalid input: Please enter numbers, e.g. 'i 3 4'."),
            },
            [row_str, col_str] => match parse_cell(row_str, col_str) {
                Some(coord) => handle_select(&mut game, coord),
                None => println!("Invalid input: Please enter numbers, e.g. '3 4'."),
            },
            _ => println!("Invalid input format. Use 'row col', 'i row col', 'n', or 'q'."),
        }
    }
}
