//! Fitness evaluation: turn per-chromosome costs into selection weights.
//!
//! Costs are min-max inverted (`worst - cost`) and lifted by a floor of
//! `(worst - best) / (N - 1)` so that the worst chromosome still has a
//! non-zero chance of being picked. The weights are then normalised into a
//! probability distribution.

use super::chromosome::Chromosome;
use crate::schema::{CostAccumulation, Point};

/// Squared error of `chromosome` at `point`.
#[inline]
pub fn point_cost(chromosome: &Chromosome, point: &Point) -> f64 {
    let error = chromosome.evaluate(point.x as f64) - point.y as f64;
    error * error
}

/// Cost of a chromosome over a point set.
///
/// With [`CostAccumulation::LastPoint`] every point overwrites the previous
/// cost, so only the last point counts. An empty point set costs nothing.
pub fn chromosome_cost(chromosome: &Chromosome, points: &[Point], mode: CostAccumulation) -> f64 {
    match mode {
        CostAccumulation::LastPoint => {
            let mut cost = 0.0;
            for point in points {
                cost = point_cost(chromosome, point);
            }
            cost
        }
        CostAccumulation::Sum => points.iter().map(|p| point_cost(chromosome, p)).sum(),
    }
}

/// Summary of one evaluation pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostSummary {
    /// Lowest finite cost, if any chromosome had one.
    pub best: Option<f64>,
    /// Highest finite cost, if any chromosome had one.
    pub worst: Option<f64>,
    /// Index of the chromosome with the lowest finite cost.
    pub best_index: Option<usize>,
    /// Number of chromosomes whose cost was NaN or infinite.
    pub non_finite: usize,
}

/// Evaluates populations against a point set.
///
/// Holds the cost/fitness buffer so repeated evaluations do not allocate.
#[derive(Debug, Clone)]
pub struct FitnessEvaluator {
    mode: CostAccumulation,
    weights: Vec<f64>,
}

impl FitnessEvaluator {
    /// Create an evaluator for populations of `size` chromosomes.
    pub fn new(size: usize, mode: CostAccumulation) -> Self {
        Self {
            mode,
            weights: vec![0.0; size],
        }
    }

    /// Selection probabilities from the last call to [`evaluate`](Self::evaluate).
    pub fn distribution(&self) -> &[f64] {
        &self.weights
    }

    /// Compute the selection distribution for `population`.
    ///
    /// Requires `population.len() > 1`. Non-finite costs are treated as the
    /// worst possible cost: they take no part in the best/worst tracking and
    /// receive the floor weight only. When the weights cannot be normalised
    /// (every cost equal, or no finite cost at all) the distribution is
    /// uniform.
    pub fn evaluate(&mut self, population: &[Chromosome], points: &[Point]) -> CostSummary {
        let n = population.len();
        debug_assert!(n > 1, "fitness normalisation needs at least 2 chromosomes");
        self.weights.resize(n, 0.0);

        // cost
        let mut worst = f64::NEG_INFINITY;
        let mut best = f64::INFINITY;
        let mut best_index = None;
        let mut non_finite = 0;
        for (i, chromosome) in population.iter().enumerate() {
            let cost = chromosome_cost(chromosome, points, self.mode);
            if cost.is_finite() {
                if cost > worst {
                    worst = cost;
                }
                if cost < best {
                    best = cost;
                    best_index = Some(i);
                }
            } else {
                non_finite += 1;
            }
            self.weights[i] = cost;
        }

        let summary = CostSummary {
            best: best_index.map(|_| best),
            worst: best_index.map(|_| worst),
            best_index,
            non_finite,
        };

        // fitness
        let mut total = 0.0;
        if best_index.is_some() {
            let floor = (worst - best) / (n - 1) as f64;
            for weight in self.weights.iter_mut() {
                let cost = if weight.is_finite() { *weight } else { worst };
                *weight = (worst - cost) + floor;
                total += *weight;
            }
        }

        // weight
        if total > 0.0 && total.is_finite() {
            for weight in self.weights.iter_mut() {
                *weight /= total;
            }
        } else {
            self.weights.fill(1.0 / n as f64);
        }

        summary
    }
}
