//! Genetic line fitting - evolve a straight line through a 2D point set.
//!
//! Instead of closed-form regression, a population of candidate lines is
//! evolved with fitness-proportionate selection, blend/pick crossover and a
//! mutation range that cools over the generations.
//!
//! # Architecture
//!
//! The crate is split into two main modules:
//!
//! - `schema`: Configuration, data points and their file format, viewport mapping
//! - `compute`: The evolutionary engine and the interactive session around it
//!
//! # Example
//!
//! ```rust,no_run
//! use genetic_line_fit::{
//!     compute::FitSession,
//!     schema::{EngineConfig, PointSet},
//! };
//!
//! let points = PointSet::load("points.txt").unwrap();
//! let mut session = FitSession::new(EngineConfig::default()).with_points(points);
//! session.start().unwrap();
//!
//! // Drive the session from a render loop.
//! while session.tick() {
//!     let snapshot = session.snapshot().unwrap();
//!     if snapshot.generation >= 1000 {
//!         break;
//!     }
//! }
//! ```

pub mod compute;
pub mod schema;

// Re-export commonly used types
pub use compute::{Chromosome, FitSession, LineFitEngine};
pub use schema::{EngineConfig, Point, PointSet, Viewport};
