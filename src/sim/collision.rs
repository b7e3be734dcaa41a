//! Peg collision detection and path selection
//!
//! The heart of the Plinko feel: a colliding ball does not reflect, it picks
//! a deflection path pseudo-randomly, biased by which side it approached the
//! peg from.

use glam::Vec2;
use rand::Rng;

use super::board::Peg;

/// Which quadrant the ball approached the peg from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Approach {
    /// Above and strictly left of the peg center
    AboveLeft,
    /// Above and strictly right of the peg center
    AboveRight,
    /// Everything else: from below, or directly level/centered
    Other,
}

impl Approach {
    /// Classify an approach. Equal x (dead center) is `Other`, matching the
    /// strict comparisons of the original.
    pub fn classify(ball_pos: Vec2, peg: &Peg) -> Self {
        let from_left = ball_pos.x < peg.pos.x;
        let from_right = ball_pos.x > peg.pos.x;
        let from_above = ball_pos.y < peg.pos.y;

        if from_left && from_above {
            Approach::AboveLeft
        } else if from_right && from_above {
            Approach::AboveRight
        } else {
            Approach::Other
        }
    }
}

/// Deflection path taken after a peg hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathChoice {
    Straight,
    Left,
    Right,
}

/// True when the ball overlaps the peg. The margin stands in for the peg
/// radius and is deliberately generous (it is what gives the board its
/// bounce density).
pub fn peg_overlap(ball_pos: Vec2, ball_radius: f32, peg: &Peg, margin: f32) -> bool {
    ball_pos.distance(peg.pos) <= ball_radius + margin
}

/// Pick a deflection path for an approach.
///
/// The distribution is intentionally non-uniform: a ball arriving from
/// above-left never deflects right (and vice versa), so the ball tends to
/// keep drifting the way it entered the peg field.
pub fn select_path<R: Rng>(approach: Approach, rng: &mut R) -> PathChoice {
    match approach {
        Approach::AboveLeft => {
            if rng.random_bool(0.5) {
                PathChoice::Left
            } else {
                PathChoice::Straight
            }
        }
        Approach::AboveRight => {
            if rng.random_bool(0.5) {
                PathChoice::Right
            } else {
                PathChoice::Straight
            }
        }
        Approach::Other => match rng.random_range(0..3) {
            0 => PathChoice::Straight,
            1 => PathChoice::Left,
            _ => PathChoice::Right,
        },
    }
}

/// Apply one deflection step to a ball position. Every path advances the
/// ball downward by `step`; bonus pegs have already doubled `step` by the
/// time we get here. `snap` recenters a STRAIGHT ball on the peg column.
pub fn apply_deflection(
    ball_pos: Vec2,
    peg: &Peg,
    choice: PathChoice,
    step: f32,
    snap: bool,
) -> Vec2 {
    match choice {
        PathChoice::Straight => {
            let x = if snap { peg.pos.x } else { ball_pos.x };
            Vec2::new(x, ball_pos.y + step)
        }
        PathChoice::Left => Vec2::new(ball_pos.x - step, ball_pos.y + step),
        PathChoice::Right => Vec2::new(ball_pos.x + step, ball_pos.y + step),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn peg_at(x: f32, y: f32) -> Peg {
        Peg {
            pos: Vec2::new(x, y),
            radius: 5.0,
            bonus: true,
        }
    }

    #[test]
    fn test_classify_quadrants() {
        let peg = peg_at(100.0, 100.0);
        assert_eq!(
            Approach::classify(Vec2::new(95.0, 90.0), &peg),
            Approach::AboveLeft
        );
        assert_eq!(
            Approach::classify(Vec2::new(105.0, 90.0), &peg),
            Approach::AboveRight
        );
        // From below
        assert_eq!(
            Approach::classify(Vec2::new(95.0, 110.0), &peg),
            Approach::Other
        );
        // Dead center: strict comparisons put this in Other
        assert_eq!(
            Approach::classify(Vec2::new(100.0, 90.0), &peg),
            Approach::Other
        );
        // Level with the peg
        assert_eq!(
            Approach::classify(Vec2::new(95.0, 100.0), &peg),
            Approach::Other
        );
    }

    #[test]
    fn test_peg_overlap_boundary() {
        let peg = peg_at(100.0, 100.0);
        // ball radius 10 + margin 5 = reach 15
        assert!(peg_overlap(Vec2::new(100.0, 85.0), 10.0, &peg, 5.0));
        assert!(!peg_overlap(Vec2::new(100.0, 84.9), 10.0, &peg, 5.0));
        // Wider margin variant reaches further
        assert!(peg_overlap(Vec2::new(100.0, 81.0), 10.0, &peg, 10.0));
    }

    #[test]
    fn test_above_left_never_deflects_right() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut lefts = 0u32;
        let mut straights = 0u32;
        for _ in 0..10_000 {
            match select_path(Approach::AboveLeft, &mut rng) {
                PathChoice::Left => lefts += 1,
                PathChoice::Straight => straights += 1,
                PathChoice::Right => panic!("above-left approach deflected right"),
            }
        }
        // Empirical ratio should be close to 1:1
        let ratio = lefts as f64 / straights as f64;
        assert!((0.9..1.1).contains(&ratio), "ratio {ratio} outside 1:1 band");
    }

    #[test]
    fn test_above_right_never_deflects_left() {
        let mut rng = Pcg32::seed_from_u64(11);
        for _ in 0..10_000 {
            assert_ne!(select_path(Approach::AboveRight, &mut rng), PathChoice::Left);
        }
    }

    #[test]
    fn test_other_approach_uses_all_paths() {
        let mut rng = Pcg32::seed_from_u64(13);
        let mut counts = [0u32; 3];
        for _ in 0..30_000 {
            match select_path(Approach::Other, &mut rng) {
                PathChoice::Straight => counts[0] += 1,
                PathChoice::Left => counts[1] += 1,
                PathChoice::Right => counts[2] += 1,
            }
        }
        for count in counts {
            // Each third of 30k draws, with slack
            assert!((9_000..11_000).contains(&count), "skewed count {count}");
        }
    }

    #[test]
    fn test_apply_deflection_steps() {
        let peg = peg_at(100.0, 100.0);
        let pos = Vec2::new(96.0, 92.0);

        let snapped = apply_deflection(pos, &peg, PathChoice::Straight, 4.0, true);
        assert_eq!(snapped, Vec2::new(100.0, 96.0));

        let drifted = apply_deflection(pos, &peg, PathChoice::Straight, 4.0, false);
        assert_eq!(drifted, Vec2::new(96.0, 96.0));

        assert_eq!(
            apply_deflection(pos, &peg, PathChoice::Left, 4.0, true),
            Vec2::new(92.0, 96.0)
        );
        assert_eq!(
            apply_deflection(pos, &peg, PathChoice::Right, 4.0, true),
            Vec2::new(100.0, 96.0)
        );
    }
}
