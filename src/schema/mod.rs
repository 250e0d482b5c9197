//! Schema module - Configuration, data points and viewport types.

mod config;
mod points;
mod viewport;

pub use config::*;
pub use points::*;
pub use viewport::*;
