// Alfabeta - Partida de demonstração entre dois agentes alfa-beta
use alfabeta::engine::{AlphaBetaAgent, GameClock, SearchConfig, DEFAULT_MAX_DEPTH};
use alfabeta::{Board, Color, START_FEN};
use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::time::Duration;
use tracing::{error, info, Level};

#[derive(Parser, Debug)]
#[command(name = "alfabeta")]
#[command(version, about = "Self-play between two time-bounded alpha-beta agents", long_about = None)]
struct Args {
    /// Starting position (piece placement and side to move are read)
    #[arg(long, default_value = START_FEN)]
    fen: String,

    /// Fixed search depth in plies
    #[arg(long, short = 'd', default_value_t = DEFAULT_MAX_DEPTH)]
    depth: u8,

    /// Total playtime per side, in seconds
    #[arg(long, short = 's', default_value_t = 60)]
    seconds: u64,

    /// Maximum number of plies to play
    #[arg(long, short = 'p', default_value_t = 40)]
    plies: u32,

    /// Random plies played before the agents take over
    #[arg(long, default_value_t = 0)]
    random_plies: u32,

    /// Seed for the random opening plies
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Also run exhaustive minimax on every move and compare
    #[arg(long)]
    cross_check: bool,

    /// Debug-level logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).with_target(false).init();

    let mut board = Board::from_fen(&args.fen).context("invalid --fen")?;
    let config = SearchConfig::default()
        .with_depth(args.depth)
        .with_playtime(Duration::from_secs(args.seconds))
        .with_cross_check(args.cross_check);

    let mut white = AlphaBetaAgent::new(Color::White, config)?;
    let mut black = AlphaBetaAgent::new(Color::Black, config)?;
    let mut clock = GameClock::new(config.max_playtime);

    // Abertura aleatória, reproduzível pela semente
    let mut rng = StdRng::seed_from_u64(args.seed);
    for _ in 0..args.random_plies {
        if board.is_game_over() {
            break;
        }
        let moves = board.generate_all_moves();
        let Some(&mv) = moves.choose(&mut rng) else { break };
        info!(%mv, "lance aleatório");
        board.make_move(mv);
    }

    println!("{}\n", board);

    for ply in 1..=args.plies {
        if board.is_game_over() {
            info!("fim de partida");
            break;
        }

        let side = board.to_move;
        if clock.is_flagged(side) {
            info!(color = %side, "tempo esgotado");
            break;
        }

        let agent = match side {
            Color::White => &mut white,
            Color::Black => &mut black,
        };

        let chosen = match agent.choose_move(&board, &mut clock) {
            Ok(mv) => mv,
            Err(err) => {
                error!("{}", err);
                return Err(err.into());
            }
        };

        match chosen {
            Some(mv) => {
                board.make_move(mv);
                info!(ply, color = %side, %mv, time_left_ms = clock.time_left(side), "lance jogado");
            }
            None => info!(ply, color = %side, "sem lance neste ciclo"),
        }
    }

    println!("{}", board);

    for agent in [&white, &black] {
        if let Some(validator) = agent.cross_validator() {
            println!(
                "{}: {} buscas verificadas, {} discrepâncias",
                agent.color(),
                validator.moves_checked(),
                validator.mismatches()
            );
        }
    }

    Ok(())
}
