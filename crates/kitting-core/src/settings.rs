//! Run settings loading and validation.

use std::path::Path;

use anyhow::{ensure, Context, Result};
use kitting_bt::RunPolicy;
use kitting_sim::SimConfig;
use serde::{Deserialize, Serialize};

use crate::Coefficients;

/// Everything needed to reproduce an evaluation, loaded from a YAML file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RunSettings {
    /// Seed for conveyor arrivals
    pub seed: u64,

    /// Termination thresholds
    pub run: RunPolicy,

    /// Simulation constants
    pub simulation: SimConfig,

    /// Fitness weights
    pub fitness: Coefficients,
}

impl RunSettings {
    /// Load and validate settings from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;
        Self::from_yaml_str(&content)
            .with_context(|| format!("Failed to load settings from {}", path.display()))
    }

    /// Load from `path` if it exists, otherwise the defaults
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            Ok(Self::default())
        }
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let settings: Self = serde_yaml::from_str(content).context("Failed to parse settings")?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize settings")
    }

    /// Reject settings the simulator or run loop cannot honor.
    pub fn validate(&self) -> Result<()> {
        let sim = &self.simulation;
        for (name, p) in [
            ("heavy_arrival_probability", sim.heavy_arrival_probability),
            ("light_arrival_probability", sim.light_arrival_probability),
        ] {
            ensure!((0.0..=1.0).contains(&p), "simulation.{name} must lie in [0, 1], got {p}");
        }
        ensure!(
            sim.robot_speed.is_finite() && sim.robot_speed > 0.0,
            "simulation.robot_speed must be positive, got {}",
            sim.robot_speed
        );
        ensure!(
            sim.heavy_weight > 0 && sim.light_weight > 0,
            "simulation item weights must be positive"
        );
        ensure!(sim.max_battery > 0, "simulation.max_battery must be positive");

        let run = &self.run;
        ensure!(run.max_ticks > 0, "run.max_ticks must be positive");
        ensure!(run.max_straight_fails > 0, "run.max_straight_fails must be positive");
        ensure!(run.successes_required > 0, "run.successes_required must be positive");
        Ok(())
    }
}
