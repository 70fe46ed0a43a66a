use kitting_bt::{build, tick, NodeId, Status};
use kitting_sim::{Pos, SimConfig, Simulator, Station};

const FALLBACK: NodeId = NodeId(0);
const GUARDED: NodeId = NodeId(1);
const IDLE: NodeId = NodeId(3);
const PICK: NodeId = NodeId(4);

#[test]
fn higher_priority_branch_invalidates_completed_pick() {
    let mut tree = build(&[
        "f(",
        "s(",
        "battery level < 50",
        "idle",
        ")",
        "pick",
        ")",
    ])
    .expect("valid tree");
    let mut sim = Simulator::with_config(SimConfig::default().without_arrivals(), 0);
    sim.state_mut().robot_pos = Station::ConveyorLight.pose();
    sim.state_mut().cnv_n_light = 5;

    assert_eq!(tick(&mut tree, &mut sim), Status::Success);
    assert_eq!(tree.node(PICK).status(), Status::Success);
    assert!(tree.node(PICK).action().expect("action").has_completed());
    assert_eq!(sim.state().carried_light, 1);

    // The guard flips: the idle branch takes over and the pick loses its memory.
    sim.state_mut().battery_level = 40;
    assert_eq!(tick(&mut tree, &mut sim), Status::Running);
    assert_eq!(tree.node(GUARDED).status(), Status::Running);
    assert_eq!(tree.node(IDLE).status(), Status::Running);
    assert_eq!(tree.node(PICK).status(), Status::Invalid);
    assert!(!tree.node(PICK).action().expect("action").has_completed());
    assert_eq!(
        tree.node(FALLBACK).composite().and_then(|c| c.current_child()),
        Some(0)
    );
    assert_eq!(sim.state().carried_light, 1);

    // Back on the pick branch a fresh activation picks again.
    sim.state_mut().battery_level = 100;
    assert_eq!(tick(&mut tree, &mut sim), Status::Success);
    assert_eq!(sim.state().carried_light, 2);
    assert_eq!(tree.node(IDLE).status(), Status::Invalid);
    assert_eq!(tree.node(GUARDED).status(), Status::Failure);
}

#[test]
fn preempted_branch_does_not_act_in_the_same_tick() {
    let mut tree = build(&[
        "f(",
        "s(",
        "battery level < 50",
        "move to CHARGE1",
        ")",
        "idle",
        ")",
    ])
    .expect("valid tree");
    let mut sim = Simulator::with_config(SimConfig::default().without_arrivals(), 0);

    tick(&mut tree, &mut sim);
    assert_eq!(sim.state().robot_pos, Pos::SPAWN);
    assert_eq!(sim.steps(), 1);

    sim.state_mut().battery_level = 30;
    tick(&mut tree, &mut sim);
    assert_ne!(sim.state().robot_pos, Pos::SPAWN);
    assert_eq!(sim.steps(), 2);
    assert_eq!(tree.node(NodeId(4)).status(), Status::Invalid);
}

#[test]
fn running_move_is_halted_when_a_higher_branch_wins() {
    let mut tree =
        build(&["f(", "carried weight > 0", "move to DELIVERY", ")"]).expect("valid tree");
    let mut sim = Simulator::with_config(SimConfig::default().without_arrivals(), 0);

    assert_eq!(tick(&mut tree, &mut sim), Status::Running);
    assert_eq!(tree.node(NodeId(2)).status(), Status::Running);

    {
        let state = sim.state_mut();
        state.carried_light = 1;
        state.carried_weight = 2;
    }
    assert_eq!(tick(&mut tree, &mut sim), Status::Success);
    assert_eq!(tree.node(NodeId(2)).status(), Status::Invalid);
    assert_eq!(sim.steps(), 1);
}

#[test]
fn preempted_composite_is_reset_recursively() {
    let mut tree = build(&[
        "f(",
        "battery level < 50",
        "s(",
        "at station CHARGE2",
        "move to DELIVERY",
        ")",
        ")",
    ])
    .expect("valid tree");
    let mut sim = Simulator::with_config(SimConfig::default().without_arrivals(), 0);
    sim.state_mut().robot_pos = Station::Charge2.pose();

    assert_eq!(tick(&mut tree, &mut sim), Status::Running);
    let sequence = NodeId(2);
    assert_eq!(tree.node(sequence).status(), Status::Running);
    assert_eq!(tree.node(NodeId(4)).status(), Status::Running);
    assert_eq!(tree.node(sequence).composite().and_then(|c| c.current_child()), Some(1));

    sim.state_mut().battery_level = 40;
    assert_eq!(tick(&mut tree, &mut sim), Status::Success);
    for id in [sequence, NodeId(3), NodeId(4)] {
        assert_eq!(tree.node(id).status(), Status::Invalid, "node {id}");
    }
    assert_eq!(tree.node(sequence).composite().and_then(|c| c.current_child()), None);
    assert_eq!(sim.steps(), 1);
}
