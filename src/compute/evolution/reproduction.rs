//! Fitness-proportionate selection and generational reproduction.

use super::chromosome::Chromosome;
use super::genome::GenomeRng;
use crate::schema::MutationSchedule;

/// Roulette wheel over a probability distribution.
///
/// The cumulative table is rebuilt in place each generation.
#[derive(Debug, Clone, Default)]
pub struct RouletteWheel {
    cumulative: Vec<f64>,
}

impl RouletteWheel {
    pub fn with_capacity(size: usize) -> Self {
        Self {
            cumulative: Vec::with_capacity(size),
        }
    }

    /// Rebuild the wheel from non-negative weights.
    pub fn rebuild(&mut self, weights: &[f64]) {
        self.cumulative.clear();
        let mut running = 0.0;
        for &w in weights {
            running += w;
            self.cumulative.push(running);
        }
    }

    /// Draw an index with probability proportional to its weight.
    pub fn spin(&self, rng: &mut GenomeRng) -> usize {
        let total = self.cumulative.last().copied().unwrap_or(0.0);
        let target = rng.unit() * total;
        let idx = self.cumulative.partition_point(|&c| c <= target);
        // Rounding can leave target at the very top of the table.
        idx.min(self.cumulative.len().saturating_sub(1))
    }
}

/// Breeding parameters shared by every slot of a generation.
#[derive(Debug, Clone)]
pub struct BreedingParams<'a> {
    pub crossover_mix_probability: f64,
    pub mutation_probability: f64,
    pub schedule: &'a MutationSchedule,
}

/// Fill `next` with children of `current`.
///
/// Both parents are drawn from `wheel`; the mother is redrawn until she differs
/// from the father. Every weight is positive, so with two or more chromosomes
/// the loop terminates almost surely. Records the `(father, mother)` indices
/// chosen for each slot in order when `lineage` is given.
pub fn reproduce(
    current: &[Chromosome],
    wheel: &RouletteWheel,
    generation: u64,
    next: &mut [Chromosome],
    rng: &mut GenomeRng,
    params: &BreedingParams<'_>,
    mut lineage: Option<&mut Vec<(usize, usize)>>,
) {
    debug_assert!(current.len() > 1);
    debug_assert_eq!(current.len(), next.len());

    if let Some(lineage) = lineage.as_deref_mut() {
        lineage.clear();
    }

    for slot in next.iter_mut() {
        let father = wheel.spin(rng);
        let mother = loop {
            let candidate = wheel.spin(rng);
            if candidate != father {
                break candidate;
            }
        };

        *slot = rng.breed(
            &current[father],
            &current[mother],
            generation,
            params.crossover_mix_probability,
            params.mutation_probability,
            params.schedule,
        );

        if let Some(lineage) = lineage.as_deref_mut() {
            lineage.push((father, mother));
        }
    }
}
