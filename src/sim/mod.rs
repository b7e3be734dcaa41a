//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one step per `tick` call)
//! - Seeded RNG only
//! - Stable peg iteration order (row-major generation order)
//! - No rendering or platform dependencies

pub mod board;
pub mod collision;
pub mod state;
pub mod tick;

pub use board::{Board, Bucket, Peg};
pub use collision::{Approach, PathChoice, apply_deflection, peg_overlap, select_path};
pub use state::{Ball, DropError, Engine, Phase, RoundComplete};
pub use tick::{TickReport, tick};
