//! One control cycle over a [`Tree`].

use kitting_sim::Simulator;

use crate::{ActionGate, CompositeKind, NodeId, NodeKind, Status, Tree};

/// Ticks `tree` once against `sim` and returns the root status.
///
/// Every composite restarts from its first child, so a higher-priority branch
/// whose condition flips takes control on the very next cycle. A fresh
/// [`ActionGate`] bounds the cycle to one accepted physical action.
pub fn tick(tree: &mut Tree, sim: &mut Simulator) -> Status {
    let mut gate = ActionGate::open();
    let root = tree.root();
    let status = tick_node(tree, root, sim, &mut gate);
    tracing::trace!(%status, acted = !gate.is_open(), "tree ticked");
    status
}

/// Returns `id` and its whole subtree to `Invalid`, clearing node memory.
/// Nodes already `Invalid` are left untouched.
pub fn halt(tree: &mut Tree, id: NodeId) {
    if tree.node(id).status() == Status::Invalid {
        return;
    }
    for i in 0..tree.node(id).children().len() {
        let child = tree.node(id).children()[i];
        halt(tree, child);
    }

    let node = tree.node_mut(id);
    match &mut node.kind {
        NodeKind::Action(action) => action.halt(),
        NodeKind::Composite(composite) => composite.current_child = None,
        NodeKind::Condition(_) => {}
    }
    node.status = Status::Invalid;
    tracing::trace!(node = %id, label = node.label(), "halted");
}

fn tick_node(tree: &mut Tree, id: NodeId, sim: &mut Simulator, gate: &mut ActionGate) -> Status {
    let node = tree.node_mut(id);
    let entering = node.status != Status::Running;
    let leaf = match &mut node.kind {
        NodeKind::Condition(condition) => Some(condition.evaluate(sim.state())),
        NodeKind::Action(action) => {
            if entering {
                action.initialise();
            }
            Some(action.update(sim, gate))
        }
        NodeKind::Composite(_) => None,
    };

    let status = match leaf {
        Some(status) => status,
        None => tick_composite(tree, id, sim, gate),
    };
    tree.node_mut(id).status = status;
    status
}

fn tick_composite(
    tree: &mut Tree,
    id: NodeId,
    sim: &mut Simulator,
    gate: &mut ActionGate,
) -> Status {
    let Some(kind) = tree.node(id).composite().map(|c| c.kind()) else {
        return Status::Failure;
    };
    let len = tree.node(id).children().len();

    let status = match kind {
        CompositeKind::Sequence | CompositeKind::Fallback => {
            let pass = if kind == CompositeKind::Sequence {
                Status::Success
            } else {
                Status::Failure
            };
            let mut active = len.saturating_sub(1);
            let mut status = pass;
            for i in 0..len {
                let child = tree.node(id).children()[i];
                let child_status = tick_node(tree, child, sim, gate);
                if child_status != pass {
                    active = i;
                    status = child_status;
                    break;
                }
            }
            switch_active(tree, id, active);
            status
        }
        CompositeKind::Parallel => {
            let mut any_failed = false;
            let mut all_succeeded = true;
            for i in 0..len {
                let child = tree.node(id).children()[i];
                match tick_node(tree, child, sim, gate) {
                    Status::Failure => {
                        any_failed = true;
                        all_succeeded = false;
                    }
                    Status::Success => {}
                    _ => all_succeeded = false,
                }
            }
            if any_failed {
                Status::Failure
            } else if all_succeeded {
                Status::Success
            } else {
                Status::Running
            }
        }
    };

    if status.is_settled() {
        for i in 0..len {
            let child = tree.node(id).children()[i];
            if tree.node(child).status().is_running() {
                halt(tree, child);
            }
        }
    }
    status
}

/// Records `active` as the child that returned control. When it differs from
/// the previous one, every later sibling that is not already `Invalid` is
/// halted, so lower-priority branches never keep running state.
fn switch_active(tree: &mut Tree, id: NodeId, active: usize) {
    let previous = tree.node(id).composite().and_then(|c| c.current_child());
    if previous != Some(active) {
        let len = tree.node(id).children().len();
        for i in active + 1..len {
            let sibling = tree.node(id).children()[i];
            if tree.node(sibling).status() != Status::Invalid {
                halt(tree, sibling);
            }
        }
        tracing::trace!(node = %id, ?previous, active, "active child changed");
    }
    if let NodeKind::Composite(composite) = &mut tree.node_mut(id).kind {
        composite.current_child = Some(active);
    }
}
