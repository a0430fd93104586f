//! Fixtures shared by the monecc integration tests

use monecc_algorithms::{CurveGroup, Point, RngScalarSource};
use monecc_api::{Result, ScalarSource};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Every point of `group`, the identity first.
///
/// Brute force over 𝔽ₚ², so only for tiny fields.
pub fn all_points(group: &CurveGroup) -> Vec<Point> {
    let p = group.params().p;
    let mut points = vec![Point::Infinity];
    for x in 0..p {
        for y in 0..p {
            let candidate = Point::new(x, y);
            if group.contains(&candidate) {
                points.push(candidate);
            }
        }
    }
    points
}

/// Reproducible scalar source
pub fn seeded_source(seed: u64) -> RngScalarSource<ChaCha20Rng> {
    RngScalarSource::new(ChaCha20Rng::seed_from_u64(seed))
}

/// Replays a fixed sequence of draws, panicking if one is out of range
/// or the script runs dry.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    draws: Vec<u64>,
    next: usize,
}

impl ScriptedSource {
    /// Replay `draws` in order
    pub fn new(draws: &[u64]) -> Self {
        Self {
            draws: draws.to_vec(),
            next: 0,
        }
    }

    /// Draws not yet consumed
    pub fn remaining(&self) -> usize {
        self.draws.len() - self.next
    }
}

impl ScalarSource for ScriptedSource {
    fn uniform_int(&mut self, low: u64, high: u64) -> Result<u64> {
        let value = self.draws[self.next];
        self.next += 1;
        assert!(
            low <= value && value <= high,
            "scripted draw {} outside [{}, {}]",
            value,
            low,
            high
        );
        Ok(value)
    }
}
