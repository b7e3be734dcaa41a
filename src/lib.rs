//! Plinko Sim - a pegboard trajectory engine
//!
//! Core modules:
//! - `sim`: Deterministic simulation (board, collisions, scoring, state machine)
//! - `config`: Data-driven board tuning
//!
//! The engine is a pure state machine: the presentation layer (canvas, TUI,
//! whatever) owns the event loop, calls [`sim::Engine::drop_ball`] on player
//! input and [`sim::tick()`] once per frame, and renders the reported state.

pub mod config;
pub mod sim;

pub use config::{BoardConfig, ConfigError};
pub use sim::{DropError, Engine, Phase, RoundComplete, TickReport};

/// Board tuning defaults, matching the original 600x400 nine-bucket layout.
pub mod consts {
    /// Board pixel dimensions
    pub const BOARD_WIDTH: f32 = 600.0;
    pub const BOARD_HEIGHT: f32 = 400.0;

    /// Peg grid defaults
    pub const PEG_ROWS: usize = 6;
    pub const PEG_COLUMNS: usize = 9;
    pub const PEG_SPACING: f32 = 55.0;
    pub const PEG_OFFSET: f32 = 25.0;
    pub const PEG_RADIUS: f32 = 5.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Distance the ball travels per tick while falling
    pub const ANIMATION_SPEED: f32 = 2.0;

    /// Extra reach added to the ball radius when testing peg overlap
    pub const COLLISION_MARGIN: f32 = 5.0;

    /// Scoring defaults
    pub const STARTING_SCORE: i64 = 100;
    pub const DROP_COST: i64 = 10;
    /// Bucket payouts, left to right (symmetric, high at the edges)
    pub const BUCKET_VALUES: [i64; 9] = [10, 5, 2, 1, 0, 1, 2, 5, 10];
}
