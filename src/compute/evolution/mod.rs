//! Evolutionary line fitting.
//!
//! A population of candidate lines is evolved against a point set, one
//! generation per [`LineFitEngine::step`].
//!
//! # Overview
//!
//! - **Line Encoding** (`chromosome`): four genes `(dx, dy, x0, y0)`
//! - **Genome Operations** (`genome`): random generation, crossover, and mutation
//! - **Population Store** (`population`): double-buffered generations
//! - **Fitness** (`fitness`): min-max normalised selection weights
//! - **Reproduction** (`reproduction`): roulette wheel selection and breeding
//! - **Engine** (`engine`): evaluate, breed, swap, count
//! - **Session** (`session`): running flag and start/stop/restart
//!
//! # Example
//!
//! ```rust
//! use genetic_line_fit::compute::evolution::LineFitEngine;
//! use genetic_line_fit::schema::{EngineConfig, Point};
//!
//! let points = vec![Point::new(-10, -10), Point::new(0, 0), Point::new(10, 10)];
//! let config = EngineConfig {
//!     random_seed: Some(42),
//!     ..Default::default()
//! };
//!
//! let mut engine = LineFitEngine::new(config, points).unwrap();
//! for _ in 0..100 {
//!     engine.step();
//! }
//! assert_eq!(engine.generation(), 100);
//! ```

mod chromosome;
mod engine;
mod fitness;
mod genome;
mod population;
mod reproduction;
mod session;

pub use chromosome::{Chromosome, GENE_COUNT, Gene};
pub use engine::{BestLine, GenerationSnapshot, LineFitEngine};
pub use fitness::{CostSummary, FitnessEvaluator, chromosome_cost, point_cost};
pub use genome::{DIRECTION_BOUND, GenomeRng, clock_seed};
pub use population::PopulationStore;
pub use reproduction::{BreedingParams, RouletteWheel, reproduce};
pub use session::{FitSession, SessionError};
