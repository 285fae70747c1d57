//! Dead stone estimation from repeated random playouts.
//!
//! [`estimate_ownership`] plays many independent playouts from the same
//! position and records, per point, how often it ended up black or white.
//! [`classify_dead`] then averages those probabilities over each chain on
//! the board; a chain sitting in what is statistically the opponent's area
//! is reported as dead.
//!
//! Trials run in parallel on the rayon pool. Each trial gets its own seed
//! drawn up front from the caller's RNG, so a seeded run gives the same
//! result regardless of scheduling.

use std::fmt;

use rayon::prelude::*;

use crate::board::{Board, Sign, Vertex};
use crate::constants::UNDECIDED;
use crate::playout::simulate;

/// Per-point probability that the point ends up black.
#[derive(Clone, Debug, PartialEq)]
pub struct ProbabilityMap {
    width: usize,
    height: usize,
    values: Vec<f64>,
}

impl ProbabilityMap {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Probability in `[0, 1]`; 1.0 is certainly black, 0.0 certainly white.
    pub fn get(&self, (x, y): Vertex) -> f64 {
        if x >= self.width || y >= self.height {
            return UNDECIDED;
        }
        self.values[y * self.width + x]
    }

    /// All points with their probability, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Vertex, f64)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(i, &p)| ((i % self.width, i / self.width), p))
    }
}

impl fmt::Display for ProbabilityMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                if x > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:.2}", self.get((x, y)))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Black and white vote counts per point, indexed like the board.
struct Tally {
    black: Vec<u32>,
    white: Vec<u32>,
}

impl Tally {
    fn new(len: usize) -> Self {
        Self {
            black: vec![0; len],
            white: vec![0; len],
        }
    }

    fn record(&mut self, area: &Board) {
        for (i, sign) in area.arrangement().iter().enumerate() {
            match sign {
                Sign::Black => self.black[i] += 1,
                Sign::White => self.white[i] += 1,
                Sign::Empty => {}
            }
        }
    }

    fn merge(mut self, other: Tally) -> Tally {
        for (a, b) in self.black.iter_mut().zip(&other.black) {
            *a += b;
        }
        for (a, b) in self.white.iter_mut().zip(&other.white) {
            *a += b;
        }
        self
    }
}

/// Estimate ownership of every point using `iterations` random playouts.
pub fn estimate_ownership(board: &Board, iterations: usize) -> ProbabilityMap {
    estimate_ownership_with_rng(board, iterations, &mut fastrand::Rng::new())
}

/// Like [`estimate_ownership`], drawing all randomness from `rng`.
///
/// With `iterations == 0` every point is undecided (0.5).
pub fn estimate_ownership_with_rng(
    board: &Board,
    iterations: usize,
    rng: &mut fastrand::Rng,
) -> ProbabilityMap {
    log::debug!(
        "estimating ownership on {}x{} board with {iterations} playouts",
        board.width(),
        board.height()
    );

    let len = board.width() * board.height();
    let trials: Vec<(u64, Sign)> = (0..iterations)
        .map(|_| {
            let sign = if rng.bool() { Sign::Black } else { Sign::White };
            (rng.u64(..), sign)
        })
        .collect();

    let tally = trials
        .into_par_iter()
        .map(|(seed, sign)| {
            let mut rng = fastrand::Rng::with_seed(seed);
            let area = simulate(board, sign, None, &mut rng);
            let mut tally = Tally::new(len);
            tally.record(&area);
            tally
        })
        .reduce(|| Tally::new(len), Tally::merge);

    let values = board
        .vertices()
        .map(|v| {
            let i = board.vertex_to_index(v);
            let total = tally.black[i] + tally.white[i];
            if total == 0 {
                UNDECIDED
            } else {
                tally.black[i] as f64 / total as f64
            }
        })
        .collect();

    ProbabilityMap {
        width: board.width(),
        height: board.height(),
        values,
    }
}

/// Guess which stones on `board` are dead, using `iterations` playouts.
pub fn classify_dead(board: &Board, iterations: usize) -> Vec<Vertex> {
    classify_dead_with_rng(board, iterations, &mut fastrand::Rng::new())
}

/// Like [`classify_dead`], drawing all randomness from `rng`.
///
/// Every chain is judged once, as a whole: if the mean ownership over its
/// stones favors the other color, all of its stones are reported. Chains
/// averaging exactly 0.5 are left alone.
pub fn classify_dead_with_rng(board: &Board, iterations: usize, rng: &mut fastrand::Rng) -> Vec<Vertex> {
    let map = estimate_ownership_with_rng(board, iterations, rng);
    let mut done = vec![false; board.width() * board.height()];
    let mut result = Vec::new();

    for x in 0..board.width() {
        for y in 0..board.height() {
            let vertex = (x, y);
            let sign = board.get(vertex);
            if sign.is_empty() || done[board.vertex_to_index(vertex)] {
                continue;
            }

            let chain = board.chain(vertex);
            let mean = chain.iter().map(|&v| map.get(v)).sum::<f64>() / chain.len() as f64;
            let owner = if mean < 0.5 {
                Sign::White
            } else if mean > 0.5 {
                Sign::Black
            } else {
                Sign::Empty
            };

            for &v in &chain {
                done[board.vertex_to_index(v)] = true;
            }
            if owner == -sign {
                result.extend(chain);
            }
        }
    }

    log::debug!("{} dead stones found", result.len());
    result
}
