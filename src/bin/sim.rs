use clap::Parser;
use flotilla::{create_player, init_logging, play, Catalog};
use rand::{rngs::SmallRng, SeedableRng};

/// Run automated matches on the standard fleet and report the results.
#[derive(Parser)]
struct Args {
    /// RNG seed for placements and attacks.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// First player kind: sweep, scatter or stripe.
    #[arg(long, default_value = "stripe")]
    p1: String,

    /// Second player kind: sweep, scatter or stripe.
    #[arg(long, default_value = "scatter")]
    p2: String,

    /// Number of matches to play.
    #[arg(long, default_value_t = 1)]
    games: usize,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();
    let catalog = Catalog::standard();
    let mut rng = SmallRng::seed_from_u64(args.seed);

    let mut wins = [0usize; 2];
    let mut total_turns = 0usize;
    for game in 0..args.games {
        let mut p1 = create_player(&args.p1, "Player 1", &catalog)
            .ok_or_else(|| anyhow::anyhow!("unknown player kind: {}", args.p1))?;
        let mut p2 = create_player(&args.p2, "Player 2", &catalog)
            .ok_or_else(|| anyhow::anyhow!("unknown player kind: {}", args.p2))?;
        let outcome = play(&catalog, p1.as_mut(), p2.as_mut(), &mut rng)
            .ok_or_else(|| anyhow::anyhow!("game {} aborted: fleet placement failed", game))?;
        wins[outcome.winner] += 1;
        total_turns += outcome.turns;
    }

    println!(
        "Player 1 ({}): {} wins, Player 2 ({}): {} wins over {} games, {:.1} attacks/game",
        args.p1,
        wins[0],
        args.p2,
        wins[1],
        args.games,
        total_turns as f64 / args.games.max(1) as f64,
    );
    Ok(())
}
