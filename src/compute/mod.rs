//! Compute module - The evolutionary fitting engine.

pub mod evolution;

pub use evolution::{Chromosome, FitSession, LineFitEngine};
