//! Fixed timestep simulation tick
//!
//! One `tick` call advances a falling ball by one step: re-aim straight
//! down, resolve peg deflections, then check for bottom-edge termination.

use glam::Vec2;

use super::collision::{Approach, apply_deflection, peg_overlap, select_path};
use super::state::{Engine, Phase, RoundComplete};

/// What one tick produced
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    /// Ball position after the step (spawn, if the round just ended)
    pub ball: Vec2,
    /// Set on the tick that terminates a round
    pub round: Option<RoundComplete>,
}

/// Advance the engine by one step. Idle engines report their parked ball
/// and do nothing else.
pub fn tick(engine: &mut Engine) -> TickReport {
    if engine.phase != Phase::Falling {
        return TickReport {
            ball: engine.ball.pos,
            round: None,
        };
    }

    engine.time_ticks += 1;

    // Re-aim at the bottom edge directly below the ball. Horizontal drift
    // only ever comes from peg deflections, not from the drop target.
    let target = Vec2::new(engine.ball.pos.x, engine.config.height);
    let dir = (target - engine.ball.pos).normalize_or_zero();
    engine.ball.vel = dir * engine.config.animation_speed;
    engine.ball.pos += engine.ball.vel;

    // Resolve every overlapping peg in row-major order, no early exit.
    // Simultaneous hits compound, and a deflection from one peg can push
    // the ball into range of a later peg in the same tick.
    for peg in &engine.board.pegs {
        if !peg_overlap(
            engine.ball.pos,
            engine.ball.radius,
            peg,
            engine.config.collision_margin,
        ) {
            continue;
        }

        let approach = Approach::classify(engine.ball.pos, peg);
        let choice = select_path(approach, &mut engine.rng);
        let mut step = engine.config.animation_speed;
        if peg.bonus {
            step *= 2.0;
        }
        engine.ball.pos = apply_deflection(
            engine.ball.pos,
            peg,
            choice,
            step,
            engine.config.snap_on_straight,
        );
    }

    // Bottom edge reached: pay out, go idle, respawn, all in this tick
    if engine.ball.pos.y + engine.ball.radius >= engine.config.height {
        let landing_x = engine.ball.pos.x;
        let (bucket, payout) = match engine.board.bucket_at(landing_x) {
            Some(bucket) => (Some(bucket.index), bucket.value),
            None => (None, 0),
        };
        engine.score += payout;
        engine.rounds += 1;
        engine.reset();

        log::info!(
            "round {} done: landed x={landing_x:.1}, bucket {bucket:?}, payout {payout}, score {}",
            engine.rounds,
            engine.score
        );

        return TickReport {
            ball: engine.ball.pos,
            round: Some(RoundComplete {
                bucket,
                payout,
                score: engine.score,
            }),
        };
    }

    TickReport {
        ball: engine.ball.pos,
        round: None,
    }
}
