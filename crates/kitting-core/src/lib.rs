//! Kitting Core - evaluation of behavior trees in the kitting simulation.
//!
//! This crate ties the simulator and the tree executor together: YAML run
//! settings, token-file loading, the fitness function, and an
//! [`Environment`] that builds, runs and scores a tree in one call.

pub mod environment;
pub mod fitness;
pub mod settings;
pub mod tokens;

pub use environment::{Environment, Evaluation};
pub use fitness::{compute_fitness, Coefficients, TreeMetrics};
pub use settings::RunSettings;
pub use tokens::{load_tokens, parse_tokens};
