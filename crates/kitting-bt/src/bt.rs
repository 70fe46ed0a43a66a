use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Status of a node after its last tick.
///
/// `Invalid` means "not on the active execution path": never ticked, or
/// preempted by a higher-priority branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum Status {
    Success,
    Failure,
    Running,
    #[default]
    Invalid,
}

impl Status {
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }

    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, Status::Running)
    }

    /// `Success` or `Failure`.
    #[inline]
    pub fn is_settled(self) -> bool {
        matches!(self, Status::Success | Status::Failure)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Status::Success => "SUCCESS",
            Status::Failure => "FAILURE",
            Status::Running => "RUNNING",
            Status::Invalid => "INVALID",
        })
    }
}

/// Admission control for one tick: at most one physical action per cycle.
///
/// The scheduler creates an open gate before each traversal and threads it
/// through by `&mut`. The first action whose operation is accepted closes it;
/// because traversal is depth-first in priority order, higher-priority actions
/// win ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionGate {
    open: bool,
}

impl ActionGate {
    pub fn open() -> Self {
        Self { open: true }
    }

    pub fn closed() -> Self {
        Self { open: false }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Runs `op` if the gate is open and closes it when `op` reports acceptance.
    ///
    /// Returns `None` when the gate was already closed and `op` did not run.
    pub fn admit(&mut self, op: impl FnOnce() -> bool) -> Option<bool> {
        if !self.open {
            return None;
        }
        let accepted = op();
        if accepted {
            self.open = false;
        }
        Some(accepted)
    }
}
