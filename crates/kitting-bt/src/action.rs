//! Action leaves: the only nodes that drive the simulator.

use core::fmt;

use kitting_sim::{Simulator, Station};

use crate::{ActionGate, Status};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Idle,
    Charge,
    MoveTo(Station),
    Pick,
    Place,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionKind::Idle => f.write_str("idle"),
            ActionKind::Charge => f.write_str("charge"),
            ActionKind::MoveTo(station) => write!(f, "move to {station}"),
            ActionKind::Pick => f.write_str("pick"),
            ActionKind::Place => f.write_str("place"),
        }
    }
}

/// An action leaf plus its per-activation memory.
///
/// `Pick` and `Place` are single-shot: the tick whose operation is accepted
/// reports `Success` and records the completion. The record lives until the
/// next activation or until the node is halted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    kind: ActionKind,
    completed: bool,
}

impl Action {
    pub fn new(kind: ActionKind) -> Self {
        Self {
            kind,
            completed: false,
        }
    }

    pub fn kind(&self) -> ActionKind {
        self.kind
    }

    /// Whether a pick/place was accepted during the current activation.
    pub fn has_completed(&self) -> bool {
        self.completed
    }

    /// Called when the node enters `Running` from any other status.
    pub fn initialise(&mut self) {
        self.completed = false;
    }

    /// Called when the node is preempted or its parent is reset.
    pub fn halt(&mut self) {
        self.completed = false;
    }

    pub fn update(&mut self, sim: &mut Simulator, gate: &mut ActionGate) -> Status {
        match self.kind {
            ActionKind::Idle => {
                gate.admit(|| {
                    sim.idle();
                    true
                });
                Status::Running
            }
            ActionKind::Charge => {
                if sim.state().battery_level >= sim.config().max_battery {
                    return Status::Success;
                }
                attempt(gate.admit(|| sim.charge()))
            }
            ActionKind::MoveTo(station) => {
                if sim.at_station(station) {
                    return Status::Success;
                }
                attempt(gate.admit(|| sim.move_to(station)))
            }
            ActionKind::Pick => self.complete_with(gate.admit(|| sim.pick())),
            ActionKind::Place => self.complete_with(gate.admit(|| sim.place())),
        }
    }

    fn complete_with(&mut self, admitted: Option<bool>) -> Status {
        match admitted {
            Some(true) => {
                self.completed = true;
                Status::Success
            }
            Some(false) => Status::Failure,
            None => Status::Running,
        }
    }
}

fn attempt(admitted: Option<bool>) -> Status {
    match admitted {
        Some(false) => Status::Failure,
        Some(true) | None => Status::Running,
    }
}
