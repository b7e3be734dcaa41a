//! Board generation: the peg grid and the scoring buckets
//!
//! Pegs and buckets are built once from a [`BoardConfig`] and never change
//! for the lifetime of the board.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::BoardConfig;

/// A fixed circular obstacle
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Peg {
    pub pos: Vec2,
    pub radius: f32,
    /// Bonus pegs double the deflection step on collision
    pub bonus: bool,
}

/// A scoring zone on the bottom edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bucket {
    /// Index from the left, `floor(x / peg_spacing)`
    pub index: usize,
    /// Half-open x range `[x_min, x_max)` this bucket covers
    pub x_min: f32,
    pub x_max: f32,
    /// Payout added to the score on landing
    pub value: i64,
}

/// Immutable board geometry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    pub width: f32,
    pub height: f32,
    /// Pegs in row-major generation order. Collision resolution iterates
    /// this order with no early exit, so the order is load-bearing.
    pub pegs: Vec<Peg>,
    /// Buckets indexed left to right
    pub buckets: Vec<Bucket>,
    peg_spacing: f32,
}

impl Board {
    /// Build the peg grid and bucket row from a validated config
    pub fn generate(config: &BoardConfig) -> Self {
        let mut pegs = Vec::with_capacity(config.rows * config.columns);
        for row in 0..config.rows {
            for col in 0..config.columns {
                pegs.push(Peg {
                    pos: Vec2::new(
                        col as f32 * config.peg_spacing + config.peg_offset,
                        row as f32 * config.peg_spacing + config.peg_offset,
                    ),
                    radius: config.peg_radius,
                    bonus: config.bonus_pegs,
                });
            }
        }

        let buckets = (0..config.columns)
            .map(|index| Bucket {
                index,
                x_min: index as f32 * config.peg_spacing,
                x_max: (index + 1) as f32 * config.peg_spacing,
                value: config.bucket_values[index],
            })
            .collect();

        Self {
            width: config.width,
            height: config.height,
            pegs,
            buckets,
            peg_spacing: config.peg_spacing,
        }
    }

    /// Bucket under a landing x, or None when the ball drifted off the row.
    /// An out-of-range landing is not an error; it just pays nothing.
    pub fn bucket_at(&self, x: f32) -> Option<&Bucket> {
        let index = (x / self.peg_spacing).floor();
        if index < 0.0 {
            return None;
        }
        self.buckets.get(index as usize)
    }
}
