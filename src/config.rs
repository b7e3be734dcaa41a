//! Board tuning configuration
//!
//! Everything the presentation layer can vary at board-build time lives here,
//! so a board can be loaded from JSON or built from the defaults.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Static configuration for one board
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Board pixel dimensions
    pub width: f32,
    pub height: f32,

    /// Peg grid
    pub rows: usize,
    pub columns: usize,
    pub peg_spacing: f32,
    /// Offset of the first peg from the board origin (both axes)
    pub peg_offset: f32,
    pub peg_radius: f32,

    /// Ball
    pub ball_radius: f32,
    /// Distance traveled per tick while falling
    pub animation_speed: f32,

    /// Extra reach added to the ball radius when testing peg overlap.
    /// The two captured variants used 5 and 10; 5 is the default.
    pub collision_margin: f32,
    /// Whether a STRAIGHT deflection recenters the ball on the peg's x.
    /// One captured variant snaps, the other drifts.
    pub snap_on_straight: bool,
    /// Generate every peg with the bonus (double-step) flag set.
    /// Matches the observed boards, where every peg was the bonus color.
    pub bonus_pegs: bool,

    /// Bucket payouts, left to right. Must cover every bucket index,
    /// i.e. `len >= columns`.
    pub bucket_values: Vec<i64>,
    pub drop_cost: i64,
    pub starting_score: i64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            rows: PEG_ROWS,
            columns: PEG_COLUMNS,
            peg_spacing: PEG_SPACING,
            peg_offset: PEG_OFFSET,
            peg_radius: PEG_RADIUS,
            ball_radius: BALL_RADIUS,
            animation_speed: ANIMATION_SPEED,
            collision_margin: COLLISION_MARGIN,
            snap_on_straight: true,
            bonus_pegs: true,
            bucket_values: BUCKET_VALUES.to_vec(),
            drop_cost: DROP_COST,
            starting_score: STARTING_SCORE,
        }
    }
}

/// Why a configuration was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Fewer bucket values than columns leaves buckets without a payout
    TooFewBucketValues { values: usize, columns: usize },
    /// Peg spacing must be positive (it also defines the bucket width)
    NonPositiveSpacing,
    /// The ball must move each tick or a round never terminates
    NonPositiveSpeed,
    /// A board with no pegs or no buckets is degenerate
    EmptyGrid,
    /// Board too small to hold the peg grid
    BoardTooSmall,
    /// Dropping must cost something non-negative
    NegativeDropCost,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::TooFewBucketValues { values, columns } => write!(
                f,
                "{values} bucket values cannot cover {columns} columns"
            ),
            ConfigError::NonPositiveSpacing => write!(f, "peg spacing must be positive"),
            ConfigError::NonPositiveSpeed => write!(f, "animation speed must be positive"),
            ConfigError::EmptyGrid => write!(f, "peg grid must have at least one row and column"),
            ConfigError::BoardTooSmall => {
                write!(f, "board dimensions too small for the peg grid")
            }
            ConfigError::NegativeDropCost => write!(f, "drop cost must be non-negative"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl BoardConfig {
    /// Check the invariants board generation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.columns == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        if self.peg_spacing <= 0.0 {
            return Err(ConfigError::NonPositiveSpacing);
        }
        if self.animation_speed <= 0.0 {
            return Err(ConfigError::NonPositiveSpeed);
        }
        if self.bucket_values.len() < self.columns {
            return Err(ConfigError::TooFewBucketValues {
                values: self.bucket_values.len(),
                columns: self.columns,
            });
        }
        if self.drop_cost < 0 {
            return Err(ConfigError::NegativeDropCost);
        }
        let grid_w = (self.columns - 1) as f32 * self.peg_spacing + self.peg_offset;
        let grid_h = (self.rows - 1) as f32 * self.peg_spacing + self.peg_offset;
        if grid_w > self.width || grid_h > self.height {
            return Err(ConfigError::BoardTooSmall);
        }
        Ok(())
    }

    /// Ball spawn point: centered on the top edge
    pub fn spawn(&self) -> glam::Vec2 {
        glam::Vec2::new(self.width / 2.0, 0.0)
    }
}
