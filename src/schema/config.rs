//! Configuration types for the line fitting engine.

use serde::{Deserialize, Serialize};

use super::Viewport;

fn default_population_size() -> usize {
    100
}

fn default_crossover_mix_probability() -> f64 {
    0.10
}

fn default_mutation_probability() -> f64 {
    0.03
}

/// Top-level engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Number of chromosomes per generation. Must be at least 2.
    #[serde(default = "default_population_size")]
    pub population_size: usize,
    /// Logical viewport, used to bound the initial anchor points.
    #[serde(default)]
    pub viewport: Viewport,
    /// Chance that a gene is copied from one parent instead of averaged.
    #[serde(default = "default_crossover_mix_probability")]
    pub crossover_mix_probability: f64,
    /// Chance that a gene is mutated after crossover.
    #[serde(default = "default_mutation_probability")]
    pub mutation_probability: f64,
    /// Generation-dependent mutation magnitude.
    #[serde(default)]
    pub mutation: MutationSchedule,
    /// How per-point squared errors are folded into a chromosome cost.
    #[serde(default)]
    pub cost: CostAccumulation,
    /// Fixed seed for reproducible runs. `None` seeds from the wall clock.
    #[serde(default)]
    pub random_seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            population_size: default_population_size(),
            viewport: Viewport::default(),
            crossover_mix_probability: default_crossover_mix_probability(),
            mutation_probability: default_mutation_probability(),
            mutation: MutationSchedule::default(),
            cost: CostAccumulation::default(),
            random_seed: None,
        }
    }
}

/// Cost accumulation over the point set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CostAccumulation {
    /// Only the squared error at the last point is kept. Each point overwrites
    /// the previous one, so earlier points never influence fitness.
    #[default]
    LastPoint,
    /// Sum of squared errors over every point.
    Sum,
}

/// Mutation magnitude for a single gene: `base - amplitude * tanh(..)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeneMutation {
    pub base: f64,
    pub amplitude: f64,
}

impl GeneMutation {
    pub const fn new(base: f64, amplitude: f64) -> Self {
        Self { base, amplitude }
    }
}

/// Cooling schedule for the mutation range.
///
/// The range for gene `i` at generation `g` is
/// `genes[i].base - genes[i].amplitude * tanh((g - inflection) / scale)`.
/// The drawn range is then jittered with a normal distribution of
/// `jitter_std_dev` and folded to its absolute value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MutationSchedule {
    /// Per-gene parameters in `dx, dy, x0, y0` order.
    pub genes: [GeneMutation; 4],
    /// Generation at which the range equals `base`.
    pub inflection: f64,
    /// Generations per unit of the `tanh` argument.
    pub scale: f64,
    /// Standard deviation of the range jitter.
    pub jitter_std_dev: f64,
}

impl Default for MutationSchedule {
    fn default() -> Self {
        Self {
            genes: [
                GeneMutation::new(50.0, 40.0),
                GeneMutation::new(50.0, 40.0),
                GeneMutation::new(125.0, 100.0),
                GeneMutation::new(125.0, 100.0),
            ],
            inflection: 5000.0,
            scale: 12000.0,
            jitter_std_dev: 10.0,
        }
    }
}

impl MutationSchedule {
    /// Mean mutation range for `gene` at `generation`, before jitter.
    #[inline]
    pub fn range(&self, gene: usize, generation: u64) -> f64 {
        let params = self.genes[gene];
        params.base - params.amplitude * ((generation as f64 - self.inflection) / self.scale).tanh()
    }
}

impl EngineConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < 2 {
            return Err(ConfigError::InvalidPopulationSize(self.population_size));
        }
        let max_extent = i32::MAX as u32;
        let Viewport { width, height } = self.viewport;
        if width == 0 || height == 0 || width > max_extent || height > max_extent {
            return Err(ConfigError::InvalidViewport { width, height });
        }

        let check_probability = |value: f64, name: &'static str| {
            if (0.0..=1.0).contains(&value) {
                Ok(())
            } else {
                Err(ConfigError::InvalidProbability { name, value })
            }
        };
        check_probability(self.crossover_mix_probability, "crossover_mix_probability")?;
        check_probability(self.mutation_probability, "mutation_probability")?;

        let schedule = &self.mutation;
        if !(schedule.scale.is_finite() && schedule.scale != 0.0) {
            return Err(ConfigError::InvalidMutationSchedule(format!(
                "scale must be finite and non-zero, got {}",
                schedule.scale
            )));
        }
        if !schedule.inflection.is_finite() {
            return Err(ConfigError::InvalidMutationSchedule(format!(
                "inflection must be finite, got {}",
                schedule.inflection
            )));
        }
        if !(schedule.jitter_std_dev.is_finite() && schedule.jitter_std_dev >= 0.0) {
            return Err(ConfigError::InvalidMutationSchedule(format!(
                "jitter_std_dev must be finite and non-negative, got {}",
                schedule.jitter_std_dev
            )));
        }
        for (i, gene) in schedule.genes.iter().enumerate() {
            if !(gene.base.is_finite() && gene.amplitude.is_finite()) {
                return Err(ConfigError::InvalidMutationSchedule(format!(
                    "gene {} has non-finite parameters",
                    i
                )));
            }
        }

        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Population size must be at least 2, got {0}")]
    InvalidPopulationSize(usize),
    #[error("Viewport dimensions must be within 1..={max}, got {width}x{height}", max = i32::MAX)]
    InvalidViewport { width: u32, height: u32 },
    #[error("Probability {name} must be within [0, 1], got {value}")]
    InvalidProbability { name: &'static str, value: f64 },
    #[error("Invalid mutation schedule: {0}")]
    InvalidMutationSchedule(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.population_size, 100);
        assert_eq!(config.cost, CostAccumulation::LastPoint);
    }

    #[test]
    fn test_population_too_small() {
        for size in [0, 1] {
            let config = EngineConfig {
                population_size: size,
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::InvalidPopulationSize(n)) if n == size
            ));
        }
    }

    #[test]
    fn test_invalid_probability() {
        let config = EngineConfig {
            mutation_probability: 1.5,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidProbability {
                name: "mutation_probability",
                ..
            })
        ));
    }

    #[test]
    fn test_viewport_extent_bounds() {
        for (width, height) in [(0, 768), (1366, 0), (i32::MAX as u32 + 1, 768), (1366, u32::MAX)] {
            let config = EngineConfig {
                viewport: Viewport::new(width, height),
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::InvalidViewport { width: w, height: h }) if w == width && h == height
            ));
        }

        let config = EngineConfig {
            viewport: Viewport::new(i32::MAX as u32, i32::MAX as u32),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_schedule() {
        let mut config = EngineConfig::default();
        config.mutation.scale = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidMutationSchedule(_))
        ));
    }

    #[test]
    fn test_mutation_range_schedule() {
        let schedule = MutationSchedule::default();

        let at_start = schedule.range(2, 0);
        let expected = 125.0 - 100.0 * (-5000.0f64 / 12000.0).tanh();
        assert!((at_start - expected).abs() < 1e-12);

        assert_eq!(schedule.range(2, 5000), 125.0);
        assert_eq!(schedule.range(0, 5000), 50.0);

        let mut previous = at_start;
        for generation in (1000..200_000).step_by(1000) {
            let range = schedule.range(2, generation);
            assert!(range <= previous);
            previous = range;
        }
        assert!((schedule.range(2, 1_000_000) - 25.0).abs() < 1e-6);
    }

    #[test]
    fn test_serialization() {
        let config = EngineConfig {
            cost: CostAccumulation::Sum,
            random_seed: Some(7),
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.population_size, config.population_size);
        assert_eq!(parsed.cost, CostAccumulation::Sum);
        assert_eq!(parsed.random_seed, Some(7));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let parsed: EngineConfig = serde_json::from_str(r#"{ "population_size": 20 }"#).unwrap();
        assert_eq!(parsed.population_size, 20);
        assert_eq!(parsed.viewport, Viewport::default());
        assert_eq!(parsed.mutation_probability, 0.03);
    }
}
