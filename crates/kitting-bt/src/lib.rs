//! Reactive behavior tree executor for the kitting simulation.
//!
//! A tree is an arena of [`Node`]s: conditions, actions and the three
//! composites (sequence, fallback, parallel). [`tick`] performs one control
//! cycle: a depth-first walk that restarts every composite from its first
//! child, hands out a single [`ActionGate`] so at most one physical action runs
//! per cycle, and invalidates lower-priority branches that lost control.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod action;
pub mod bt;
pub mod builder;
pub mod composite;
pub mod condition;
pub mod policy;
pub mod scheduler;
pub mod tree;

pub use action::{Action, ActionKind};
pub use bt::{ActionGate, Status};
pub use builder::{build, BuildError};
pub use composite::{Composite, CompositeKind};
pub use condition::{Comparator, Condition, Field};
pub use policy::{run, run_with, RunOutcome, RunPolicy, RunTermination};
pub use scheduler::tick;
pub use tree::{Node, NodeId, NodeKind, Tree};
