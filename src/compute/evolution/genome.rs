//! Random generation, crossover, and mutation of chromosomes.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::prelude::*;
use rand_distr::StandardNormal;

use super::chromosome::{Chromosome, GENE_COUNT};
use crate::schema::{MutationSchedule, Viewport};

/// Half-width of the initial direction gene range.
pub const DIRECTION_BOUND: f64 = 100.0;

/// Random number generator wrapper for chromosome operations.
///
/// Every draw of a run goes through this one generator in sequence, so a run
/// is reproducible from its seed.
pub struct GenomeRng {
    rng: StdRng,
    seed: u64,
}

impl GenomeRng {
    /// Create from seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create with a seed taken from the wall clock.
    pub fn from_clock() -> Self {
        Self::new(clock_seed())
    }

    /// Seed this generator was created from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform draw in `[0, 1)`.
    #[inline]
    pub fn unit(&mut self) -> f64 {
        self.rng.r#gen::<f64>()
    }

    /// `true` with probability `p` (draw `<= p`).
    #[inline]
    pub fn chance(&mut self, p: f64) -> bool {
        self.unit() <= p
    }

    /// Uniform random in `[-bound, bound]`.
    fn symmetric(&mut self, bound: f64) -> f64 {
        self.rng.gen_range(-bound..=bound)
    }

    /// Generate a random chromosome inside the viewport.
    pub fn random_chromosome(&mut self, viewport: &Viewport) -> Chromosome {
        let (half_width, half_height) = viewport.anchor_bounds();
        let dx = self.symmetric(DIRECTION_BOUND);
        let dy = self.symmetric(DIRECTION_BOUND);
        let x0 = self.symmetric(half_width);
        let y0 = self.symmetric(half_height);
        Chromosome::new(dx, dy, x0, y0)
    }

    /// Combine one gene of two parents.
    ///
    /// With probability `mix_probability` the gene is copied from a parent
    /// chosen 50/50, otherwise it is the mean of both.
    pub fn crossover_gene(&mut self, father: f64, mother: f64, mix_probability: f64) -> f64 {
        if self.chance(mix_probability) {
            if self.rng.gen_bool(0.5) { father } else { mother }
        } else {
            (father + mother) / 2.0
        }
    }

    /// Perturb a gene uniformly within a jittered, generation-dependent range.
    pub fn mutate_gene(
        &mut self,
        value: f64,
        gene: usize,
        generation: u64,
        schedule: &MutationSchedule,
    ) -> f64 {
        let range = schedule.range(gene, generation);
        let noise: f64 = self.rng.sample(StandardNormal);
        let jittered = (range + noise * schedule.jitter_std_dev).abs();
        // Uniform over [value - jittered, value + jittered).
        value + jittered * (2.0 * self.unit() - 1.0)
    }

    /// Build a child from two parents, gene by gene.
    pub fn breed(
        &mut self,
        father: &Chromosome,
        mother: &Chromosome,
        generation: u64,
        mix_probability: f64,
        mutation_probability: f64,
        schedule: &MutationSchedule,
    ) -> Chromosome {
        let mut genes = [0.0; GENE_COUNT];
        for (j, gene) in genes.iter_mut().enumerate() {
            let mut value = self.crossover_gene(father[j], mother[j], mix_probability);
            if self.chance(mutation_probability) {
                value = self.mutate_gene(value, j, generation, schedule);
            }
            *gene = value;
        }
        Chromosome::from_genes(genes)
    }
}

/// Seed derived from the current wall-clock time.
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_chromosome_bounds() {
        let mut rng = GenomeRng::new(42);
        let viewport = Viewport::default();

        for _ in 0..1000 {
            let c = rng.random_chromosome(&viewport);
            assert!(c.dx().abs() <= 100.0);
            assert!(c.dy().abs() <= 100.0);
            assert!(c.x0().abs() <= 683.0);
            assert!(c.y0().abs() <= 384.0);
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let viewport = Viewport::default();
        let mut a = GenomeRng::new(7);
        let mut b = GenomeRng::new(7);
        for _ in 0..10 {
            assert_eq!(a.random_chromosome(&viewport), b.random_chromosome(&viewport));
        }
        assert_eq!(a.seed(), 7);
    }

    #[test]
    fn test_crossover_blend_only() {
        let mut rng = GenomeRng::new(1);
        for _ in 0..100 {
            assert_eq!(rng.crossover_gene(2.0, 4.0, 0.0), 3.0);
        }
    }

    #[test]
    fn test_crossover_pick_only() {
        let mut rng = GenomeRng::new(1);
        let mut seen_father = false;
        let mut seen_mother = false;
        for _ in 0..200 {
            let v = rng.crossover_gene(2.0, 4.0, 1.0);
            assert!(v == 2.0 || v == 4.0);
            seen_father |= v == 2.0;
            seen_mother |= v == 4.0;
        }
        assert!(seen_father && seen_mother);
    }

    #[test]
    fn test_mutation_stays_within_jittered_range() {
        let mut rng = GenomeRng::new(3);
        let schedule = MutationSchedule {
            jitter_std_dev: 0.0,
            ..Default::default()
        };

        // x0 at generation 5000 has a range of exactly 125.
        for _ in 0..1000 {
            let v = rng.mutate_gene(10.0, 2, 5000, &schedule);
            assert!(v >= 10.0 - 125.0 && v <= 10.0 + 125.0);
        }
    }

    #[test]
    fn test_mutation_range_is_jittered() {
        use crate::schema::GeneMutation;

        let mut rng = GenomeRng::new(4);
        let schedule = MutationSchedule {
            genes: [GeneMutation::new(0.0, 0.0); GENE_COUNT],
            jitter_std_dev: 10.0,
            ..Default::default()
        };

        // The range is pure |N(0, 10)|, so each delta is uniform on [-j, j]
        // and E|delta| = E|N(0, 10)| / 2 = 10 * sqrt(2 / pi) / 2.
        let samples = 5000;
        let deltas: Vec<f64> = (0..samples)
            .map(|i| rng.mutate_gene(0.0, i % GENE_COUNT, 0, &schedule))
            .collect();
        assert!(deltas.iter().any(|&d| d != 0.0));
        assert!(deltas.iter().any(|&d| d < 0.0) && deltas.iter().any(|&d| d > 0.0));

        let mean_abs = deltas.iter().map(|d| d.abs()).sum::<f64>() / samples as f64;
        let expected = 10.0 * (2.0 / std::f64::consts::PI).sqrt() / 2.0;
        assert!((mean_abs - expected).abs() < 0.3, "mean |delta| = {}", mean_abs);
    }

    #[test]
    fn test_breed_without_mutation_is_mean() {
        let mut rng = GenomeRng::new(5);
        let father = Chromosome::new(0.0, 10.0, -4.0, 8.0);
        let mother = Chromosome::new(2.0, 20.0, 4.0, 0.0);
        let child = rng.breed(&father, &mother, 0, 0.0, 0.0, &MutationSchedule::default());
        assert_eq!(child, Chromosome::new(1.0, 15.0, 0.0, 4.0));
    }
}
