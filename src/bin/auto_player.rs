use clap::{Parser, ValueEnum};
use color_lines::board::Coord;
use color_lines::game::{Game, GameConfig, GameStatus, MoveOutcome};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
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
    /// Number of games to play
    #[clap(short, long, default_value_t = 10)]
    games: u32,

    /// Base seed; game i plays with seed + i
    #[clap(short, long, default_value_t = 0)]
    seed: u64,

    /// Difficulty preset controlling board size and palette
    #[clap(short, long, value_enum, default_value_t = Difficulty::Easy)]
    difficulty: Difficulty,

    /// Safety cap on turns per game; games hitting it count as stuck
    #[clap(long, default_value_t = 10_000)]
    max_turns: u32,
}

enum GameResult {
    Lost,
    Stuck,
}

/// Plays one uniformly random legal move. Returns `false` when no ball
/// can reach any empty cell.
fn play_random_move(game: &mut Game, rng: &mut SmallRng) -> bool {
    let board = game.board();
    let mut sources: Vec<Coord> = board
        .coords()
        .filter(|&coord| matches!(board.get(coord), Ok(Some(_))))
        .collect();
    sources.shuffle(rng);

    let mut destinations = game.board().empty_cells();
    destinations.shuffle(rng);

    for source in sources {
        match game.select(source).expect("source cells lie on the board") {
            MoveOutcome::Selected(_) | MoveOutcome::Reselected(_) => {}
            outcome => panic!("unexpected outcome arming {}: {:?}", source, outcome),
        }
        for &destination in &destinations {
            match game
                .select(destination)
                .expect("empty cells lie on the board")
            {
                MoveOutcome::MoveApplied(_) => return true,
                MoveOutcome::MoveRejected(_) => {}
                outcome => panic!("unexpected outcome moving to {}: {:?}", destination, outcome),
            }
        }
    }
    false
}

fn play_one_game(game: &mut Game, rng: &mut SmallRng, max_turns: u32) -> GameResult {
    while game.status() == GameStatus::Running && game.turns() < max_turns {
        if !play_random_move(game, rng) {
            return GameResult::Stuck;
        }
    }
    if game.status() == GameStatus::Lost {
        GameResult::Lost
    } else {
        GameResult::Stuck
    }
}

fn main() {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!(
        "Starting self-play for {} games (base seed {})...",
        args.games, args.seed
    );

    let mut driver_rng = SmallRng::seed_from_u64(args.seed);
    let mut lost = 0u32;
    let mut stuck = 0u32;
    let mut total_turns = 0u64;
    let mut total_cleared = 0u64;
    let mut longest = 0u32;

    for game_idx in 0..args.games {
        let game_seed = args.seed.wrapping_add(game_idx as u64);
        let mut game = Game::with_seed(args.difficulty.config(), game_seed)
            .expect("difficulty presets are valid configurations");

        let result = play_one_game(&mut game, &mut driver_rng, args.max_turns);
        let label = match result {
            GameResult::Lost => {
                lost += 1;
                "lost"
            }
            GameResult::Stuck => {
                stuck += 1;
                "stuck"
            }
        };
        total_turns += u64::from(game.turns());
        total_cleared += u64::from(game.balls_cleared());
        longest = longest.max(game.turns());

        println!(
            "  Game {:<3} (Seed: {:<4}): {:<5} after {} turns, {} balls cleared",
            game_idx,
            game_seed,
            label,
            game.turns(),
            game.balls_cleared()
        );
    }

    println!("\n--- Self-Play Complete ---");
    println!("Games played: {}", args.games);
    println!("Lost: {}, Stuck: {}", lost, stuck);
    if args.games > 0 {
        println!(
            "Average turns survived: {:.2}",
            total_turns as f64 / f64::from(args.games)
        );
        println!(
            "Average balls cleared: {:.2}",
            total_cleared as f64 / f64::from(args.games)
        );
        println!("Longest game: {} turns", longest);
    }
}
