//! Build, run and score a tree in a fresh simulation.

use anyhow::{Context, Result};
use kitting_bt::{build, run_with, RunTermination, Status};
use kitting_sim::{Simulator, WorldState};
use serde::Serialize;

use crate::{compute_fitness, RunSettings, TreeMetrics};

/// Result of one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub ticks: u64,
    pub termination: RunTermination,
    /// Root status after the last tick
    pub status: Status,
    pub fitness: f64,
    pub metrics: TreeMetrics,
    pub final_state: WorldState,
}

/// Evaluates token trees under fixed [`RunSettings`]. Every call starts from a
/// freshly built tree and a simulator seeded with the settings' seed, so
/// evaluating the same tokens twice gives the same result.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    settings: RunSettings,
}

impl Environment {
    pub fn new(settings: RunSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &RunSettings {
        &self.settings
    }

    pub fn evaluate<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Evaluation> {
        self.evaluate_observed(tokens, |_| {})
    }

    /// Like [`Environment::evaluate`], also returning the world after every tick.
    pub fn evaluate_with_trajectory<S: AsRef<str>>(
        &self,
        tokens: &[S],
    ) -> Result<(Evaluation, Vec<WorldState>)> {
        let mut trajectory = Vec::new();
        let evaluation = self.evaluate_observed(tokens, |state| trajectory.push(state.clone()))?;
        Ok((evaluation, trajectory))
    }

    fn evaluate_observed<S, F>(&self, tokens: &[S], mut observe: F) -> Result<Evaluation>
    where
        S: AsRef<str>,
        F: FnMut(&WorldState),
    {
        let mut tree = build(tokens).context("Failed to build behavior tree")?;
        let mut sim = Simulator::with_config(self.settings.simulation, self.settings.seed);

        let outcome = run_with(&mut tree, &mut sim, &self.settings.run, |_, _, state| {
            observe(state)
        });

        let metrics = TreeMetrics::of(&tree);
        let final_state = sim.snapshot();
        let fitness = compute_fitness(
            &final_state,
            &metrics,
            outcome.ticks,
            &self.settings.fitness,
        );
        tracing::debug!(
            ticks = outcome.ticks,
            termination = ?outcome.termination,
            fitness,
            "tree evaluated"
        );

        Ok(Evaluation {
            ticks: outcome.ticks,
            termination: outcome.termination,
            status: outcome.status,
            fitness,
            metrics,
            final_state,
        })
    }
}
