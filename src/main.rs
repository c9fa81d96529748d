//! Dots-and-Boxes self-play runner
//!
//! Plays one computer-vs-computer match from the command line and prints the
//! final board and result. `X` is driven by `--algorithm`, `O` by
//! `--opponent-algorithm` (the same algorithm unless given).

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use dots_boxes::{AIEngine, Algorithm, Difficulty, EngineConfig, Game, Player};

#[derive(Debug, Parser)]
#[command(name = "dots_boxes", about = "Dots-and-Boxes engine self-play")]
struct Args {
    /// Points per column
    #[arg(long, default_value_t = 4)]
    rows: usize,

    /// Points per row
    #[arg(long, default_value_t = 4)]
    cols: usize,

    /// Search used by X
    #[arg(long, value_enum, default_value_t = Algorithm::AlphaBeta)]
    algorithm: Algorithm,

    /// Search used by O
    #[arg(long, value_enum)]
    opponent_algorithm: Option<Algorithm>,

    #[arg(long, value_enum, default_value_t = Difficulty::Medium)]
    difficulty: Difficulty,

    /// Override the depth derived from board size and difficulty
    #[arg(long)]
    depth: Option<u32>,

    /// Seed for reproducible matches
    #[arg(long)]
    seed: Option<u64>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    fn engine_config(&self, algorithm: Algorithm, seed_offset: u64) -> EngineConfig {
        let mut config = EngineConfig::for_board(self.rows, self.cols, algorithm, self.difficulty);
        if let Some(depth) = self.depth {
            config = config.with_depth(depth);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed.wrapping_add(seed_offset));
        }
        config
    }
}

fn init_tracing(level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level);

    let max_config = args.engine_config(args.algorithm, 0);
    let min_config = args.engine_config(args.opponent_algorithm.unwrap_or(args.algorithm), 1);
    info!(
        rows = args.rows,
        cols = args.cols,
        x = %max_config.algorithm,
        o = %min_config.algorithm,
        difficulty = %args.difficulty,
        depth = max_config.depth,
        "starting match"
    );

    let mut game = Game::new(args.rows, args.cols, max_config, None)
        .context("cannot set up the board")?;
    let mut opponent = AIEngine::with_config(min_config);

    while !game.is_finished() {
        let turn = match game.current_player() {
            Player::Max => game.computer_move()?,
            Player::Min => {
                let edge = opponent.choose_move(game.board())?;
                game.play(edge)?
            }
        };
        debug!(
            edge = %turn.edge,
            mover = %turn.mover,
            completed = turn.completed,
            "turn played"
        );
    }

    println!("{}", game.board());
    if let Some(outcome) = game.outcome() {
        info!(%outcome, "match finished");
        println!("{outcome}");
    }

    Ok(())
}
