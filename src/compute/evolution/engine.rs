//! Generation controller for the line fitting search.

use serde::Serialize;

use crate::schema::{ConfigError, EngineConfig, Point};

use super::chromosome::Chromosome;
use super::fitness::{CostSummary, FitnessEvaluator, chromosome_cost};
use super::genome::GenomeRng;
use super::population::PopulationStore;
use super::reproduction::{BreedingParams, RouletteWheel, reproduce};

/// Best chromosome of the current generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BestLine {
    pub index: usize,
    pub chromosome: Chromosome,
    pub cost: f64,
}

/// What a renderer needs after each tick.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationSnapshot {
    pub generation: u64,
    pub best: Option<BestLine>,
    pub population: Vec<Chromosome>,
}

/// Evolves a population of lines towards a point set.
///
/// The engine has no stopping criterion: every [`step`](Self::step) advances
/// exactly one generation. Construction starts the first run, so the current
/// population is always a valid, randomised generation.
pub struct LineFitEngine {
    config: EngineConfig,
    points: Vec<Point>,
    store: PopulationStore,
    evaluator: FitnessEvaluator,
    wheel: RouletteWheel,
    rng: GenomeRng,
    generation: u64,
    last_summary: Option<CostSummary>,
}

impl LineFitEngine {
    /// Create and start an engine.
    ///
    /// Fails when the configuration is invalid, in particular when the
    /// population has fewer than 2 chromosomes. The point count is the
    /// caller's responsibility (see [`PointSet::ensure_startable`]).
    ///
    /// [`PointSet::ensure_startable`]: crate::schema::PointSet::ensure_startable
    pub fn new(config: EngineConfig, points: impl Into<Vec<Point>>) -> Result<Self, ConfigError> {
        config.validate()?;

        let size = config.population_size;
        let rng = seeded_rng(&config);
        let mut engine = Self {
            store: PopulationStore::new(size),
            evaluator: FitnessEvaluator::new(size, config.cost),
            wheel: RouletteWheel::with_capacity(size),
            points: points.into(),
            config,
            rng,
            generation: 0,
            last_summary: None,
        };
        engine.randomize();
        Ok(engine)
    }

    /// Reset to generation 0 with a fresh random population.
    ///
    /// The generator is reseeded: from `random_seed` when configured,
    /// otherwise from the wall clock.
    pub fn start(&mut self) {
        self.rng = seeded_rng(&self.config);
        self.randomize();
    }

    fn randomize(&mut self) {
        self.generation = 0;
        self.last_summary = None;
        self.store.randomize(&mut self.rng, &self.config.viewport);
        log::debug!(
            "Started line fit: {} chromosomes, {} points, seed {}",
            self.store.size(),
            self.points.len(),
            self.rng.seed()
        );
    }

    /// Advance one generation: evaluate, breed into the spare buffer, swap.
    pub fn step(&mut self) {
        let summary = self.evaluator.evaluate(self.store.current(), &self.points);
        self.wheel.rebuild(self.evaluator.distribution());

        let params = BreedingParams {
            crossover_mix_probability: self.config.crossover_mix_probability,
            mutation_probability: self.config.mutation_probability,
            schedule: &self.config.mutation,
        };
        let (current, next) = self.store.split_mut();
        reproduce(
            current,
            &self.wheel,
            self.generation,
            next,
            &mut self.rng,
            &params,
            None,
        );

        self.store.swap();
        self.generation += 1;
        self.last_summary = Some(summary);

        if summary.non_finite > 0 {
            log::trace!(
                "Generation {}: {} chromosomes with non-finite cost",
                self.generation,
                summary.non_finite
            );
        }
    }

    /// Number of completed generations since the last start.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Live population.
    pub fn current(&self) -> &[Chromosome] {
        self.store.current()
    }

    /// Seed of the current run.
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Cost summary of the generation that produced the current one.
    pub fn last_summary(&self) -> Option<CostSummary> {
        self.last_summary
    }

    /// Lowest-cost chromosome of the current generation.
    ///
    /// Chromosomes with a non-finite cost are never reported as best.
    pub fn best(&self) -> Option<BestLine> {
        let mode = self.config.cost;
        self.store
            .current()
            .iter()
            .enumerate()
            .map(|(index, c)| (index, c, chromosome_cost(c, &self.points, mode)))
            .filter(|(_, _, cost)| cost.is_finite())
            .min_by(|a, b| a.2.total_cmp(&b.2))
            .map(|(index, chromosome, cost)| BestLine {
                index,
                chromosome: *chromosome,
                cost,
            })
    }

    /// Copy of the state a renderer polls each tick.
    pub fn snapshot(&self) -> GenerationSnapshot {
        GenerationSnapshot {
            generation: self.generation,
            best: self.best(),
            population: self.store.current().to_vec(),
        }
    }
}

fn seeded_rng(config: &EngineConfig) -> GenomeRng {
    config
        .random_seed
        .map(GenomeRng::new)
        .unwrap_or_else(GenomeRng::from_clock)
}
