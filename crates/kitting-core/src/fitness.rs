//! Scalar score of a finished run.

use kitting_bt::Tree;
use kitting_sim::WorldState;
use serde::{Deserialize, Serialize};

/// Weights of each fitness term.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Coefficients {
    pub delivered_heavy: f64,
    pub delivered_light: f64,
    pub depth: f64,
    pub length: f64,
    pub ticks: f64,
    pub failed: f64,
    pub timeout: f64,
}

impl Default for Coefficients {
    fn default() -> Self {
        Self {
            delivered_heavy: 2.0,
            delivered_light: 1.0,
            depth: 0.0,
            length: -0.2,
            ticks: 0.0,
            failed: 0.0,
            timeout: 0.0,
        }
    }
}

/// Structural facts about a tree plus the flags of its last run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeMetrics {
    pub length: usize,
    pub depth: usize,
    pub failed: bool,
    pub timeout: bool,
}

impl TreeMetrics {
    pub fn of(tree: &Tree) -> Self {
        Self {
            length: tree.length(),
            depth: tree.depth(),
            failed: tree.failed(),
            timeout: tree.timeout(),
        }
    }
}

pub fn compute_fitness(
    state: &WorldState,
    metrics: &TreeMetrics,
    ticks: u64,
    coefficients: &Coefficients,
) -> f64 {
    let mut fitness = metrics.length as f64 * coefficients.length
        + metrics.depth as f64 * coefficients.depth
        + ticks as f64 * coefficients.ticks
        + f64::from(state.delivered_heavy) * coefficients.delivered_heavy
        + f64::from(state.delivered_light) * coefficients.delivered_light;
    if metrics.failed {
        fitness += coefficients.failed;
    }
    if metrics.timeout {
        fitness += coefficients.timeout;
    }
    round_to(fitness, 10)
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}
