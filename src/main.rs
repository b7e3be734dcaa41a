//! Headless demo driver
//!
//! Stands in for the presentation layer: builds an engine, drops balls at
//! random targets, and ticks the simulation to completion, logging each
//! round. Run with `RUST_LOG=info` to watch the rounds.
//!
//! Usage: `plinko-sim [--seed N] [--rounds N]`

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use plinko_sim::sim::{Engine, tick};
use plinko_sim::BoardConfig;

struct Args {
    seed: u64,
    rounds: u64,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        seed: 0xC0FFEE,
        rounds: 5,
    };
    let mut iter = std::env::args().skip(1);
    while let Some(flag) = iter.next() {
        let value = |iter: &mut dyn Iterator<Item = String>| {
            iter.next().ok_or_else(|| format!("{flag} needs a value"))
        };
        match flag.as_str() {
            "--seed" => {
                args.seed = value(&mut iter)?
                    .parse()
                    .map_err(|e| format!("bad seed: {e}"))?;
            }
            "--rounds" => {
                args.rounds = value(&mut iter)?
                    .parse()
                    .map_err(|e| format!("bad round count: {e}"))?;
            }
            other => return Err(format!("unknown flag {other}")),
        }
    }
    Ok(args)
}

fn main() {
    env_logger::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}");
            eprintln!("usage: plinko-sim [--seed N] [--rounds N]");
            std::process::exit(2);
        }
    };

    let config = BoardConfig::default();
    log::debug!(
        "config: {}",
        serde_json::to_string(&config).unwrap_or_default()
    );

    let mut engine = match Engine::new(config, args.seed) {
        Ok(engine) => engine,
        Err(err) => {
            eprintln!("invalid board config: {err}");
            std::process::exit(2);
        }
    };

    // Separate stream for picking click targets, so the trajectory RNG stays
    // a function of the engine seed alone
    let mut targets = Pcg32::seed_from_u64(args.seed ^ 0x9E37_79B9);

    for _ in 0..args.rounds {
        let target_x = targets.random_range(0.0..engine.config().width);
        if let Err(err) = engine.drop_ball(target_x) {
            // The original game ignored invalid drops; we just stop playing
            log::warn!("drop rejected: {err}");
            break;
        }
        while tick(&mut engine).round.is_none() {}
    }

    println!(
        "played {} rounds with seed {}, final score {}",
        engine.rounds(),
        engine.seed(),
        engine.score()
    );
}
