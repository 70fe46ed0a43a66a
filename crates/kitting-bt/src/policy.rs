//! Run loop: tick until the tree settles or the budget runs out.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use kitting_sim::{Simulator, WorldState};

use crate::{tick, Status, Tree};

/// Termination thresholds for [`run_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct RunPolicy {
    /// Hard cap on ticks.
    pub max_ticks: u64,
    /// Consecutive `Failure` ticks that end the run. Values below 1 act as 1.
    pub max_straight_fails: u32,
    /// Consecutive `Success` ticks that end the run. Values below 1 act as 1.
    pub successes_required: u32,
}

impl Default for RunPolicy {
    fn default() -> Self {
        Self {
            max_ticks: 200,
            max_straight_fails: 1,
            successes_required: 1,
        }
    }
}

impl RunPolicy {
    pub fn with_max_ticks(max_ticks: u64) -> Self {
        Self {
            max_ticks,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum RunTermination {
    Succeeded,
    Failed,
    TimedOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RunOutcome {
    /// Ticks actually executed.
    pub ticks: u64,
    /// Root status after the last tick (`Invalid` if no tick ran).
    pub status: Status,
    pub termination: RunTermination,
}

impl RunOutcome {
    pub fn failed(&self) -> bool {
        self.termination == RunTermination::Failed
    }

    pub fn timed_out(&self) -> bool {
        self.termination == RunTermination::TimedOut
    }
}

/// Ticks with the default thresholds and a `max_ticks` budget.
pub fn run(tree: &mut Tree, sim: &mut Simulator, max_ticks: u64) -> RunOutcome {
    run_with(tree, sim, &RunPolicy::with_max_ticks(max_ticks), |_, _, _| {})
}

/// Ticks `tree` until one of, checked after each tick in this order:
/// `max_straight_fails` consecutive failures, `successes_required`
/// consecutive successes, or `max_ticks` ticks.
///
/// `observer` sees the zero-based tick index, the root status and the world
/// right after each tick. The tree's `failed`/`timeout` flags are reset on
/// entry and set from the termination reason on exit.
pub fn run_with<F>(
    tree: &mut Tree,
    sim: &mut Simulator,
    policy: &RunPolicy,
    mut observer: F,
) -> RunOutcome
where
    F: FnMut(u64, Status, &WorldState),
{
    tree.failed = false;
    tree.timeout = false;

    let max_fails = policy.max_straight_fails.max(1);
    let required = policy.successes_required.max(1);
    let mut ticks = 0u64;
    let mut status = Status::Invalid;
    let mut straight_fails = 0u32;
    let mut straight_successes = 0u32;

    let termination = loop {
        if ticks >= policy.max_ticks {
            break RunTermination::TimedOut;
        }
        status = tick(tree, sim);
        observer(ticks, status, sim.state());
        ticks += 1;

        match status {
            Status::Failure => {
                straight_fails += 1;
                straight_successes = 0;
            }
            Status::Success => {
                straight_successes += 1;
                straight_fails = 0;
            }
            Status::Running | Status::Invalid => {
                straight_fails = 0;
                straight_successes = 0;
            }
        }

        if straight_fails >= max_fails {
            break RunTermination::Failed;
        }
        if straight_successes >= required {
            break RunTermination::Succeeded;
        }
    };

    tree.failed = termination == RunTermination::Failed;
    tree.timeout = termination == RunTermination::TimedOut;
    tracing::debug!(ticks, %status, ?termination, "run finished");

    RunOutcome {
        ticks,
        status,
        termination,
    }
}
