use kitting_bt::{build, BuildError, Comparator, Condition, Field, NodeId, NodeKind, Status};
use kitting_sim::{ParseStationError, Station};

#[test]
fn ids_follow_pre_order() {
    let tree = build(&[
        "s(",
        "f(",
        "battery level < 50",
        "charge",
        ")",
        "idle",
        ")",
    ])
    .expect("valid tree");

    assert_eq!(tree.root(), NodeId(0));
    assert_eq!(tree.node(tree.root()).children(), &[NodeId(1), NodeId(4)]);
    assert_eq!(tree.node(NodeId(1)).children(), &[NodeId(2), NodeId(3)]);
    assert_eq!(tree.node(NodeId(2)).label(), "battery level < 50");
    assert_eq!(tree.find("idle"), Some(NodeId(4)));
    assert!(tree.iter().all(|(_, node)| node.status() == Status::Invalid));
}

#[test]
fn tokens_are_trimmed() {
    let tree = build(&[
        "  s( ",
        " at station CHARGE1 ",
        "conveyor heavy>2",
        " )",
    ])
    .expect("valid tree");

    assert_eq!(tree.node(NodeId(1)).label(), "at station CHARGE1");
    assert_eq!(
        tree.node(NodeId(1)).kind(),
        &NodeKind::Condition(Condition::AtStation(Station::Charge1))
    );
    assert_eq!(
        tree.node(NodeId(2)).kind(),
        &NodeKind::Condition(Condition::compare(Field::ConveyorHeavy, Comparator::Greater, 2))
    );
}

#[test]
fn thresholds_may_be_negative() {
    let tree = build(&["carried light > -1"]).expect("valid tree");
    assert_eq!(
        tree.node(NodeId(0)).kind(),
        &NodeKind::Condition(Condition::compare(Field::CarriedLight, Comparator::Greater, -1))
    );
}

#[test]
fn structural_errors_point_at_the_token() {
    assert_eq!(build::<&str>(&[]), Err(BuildError::Empty));
    assert_eq!(build(&[")"]), Err(BuildError::UnexpectedClose { index: 0 }));
    assert_eq!(
        build(&["s(", "idle"]),
        Err(BuildError::Unclosed {
            index: 0,
            token: "s(".to_string()
        })
    );
    assert_eq!(
        build(&["s(", "p(", ")", ")"]),
        Err(BuildError::EmptyComposite {
            index: 1,
            token: "p(".to_string()
        })
    );
    assert_eq!(
        build(&["idle", "idle"]),
        Err(BuildError::TrailingToken {
            index: 1,
            token: "idle".to_string()
        })
    );
    assert_eq!(
        build(&["s(", "idle", ")", ")"]),
        Err(BuildError::UnexpectedClose { index: 3 })
    );
}

#[test]
fn malformed_leaves_are_rejected() {
    assert_eq!(
        build(&["move to KITCHEN"]),
        Err(BuildError::UnknownStation {
            index: 0,
            source: ParseStationError("KITCHEN".to_string())
        })
    );
    assert_eq!(
        build(&["battery level 50"]),
        Err(BuildError::MissingComparator {
            index: 0,
            token: "battery level 50".to_string()
        })
    );
    assert_eq!(
        build(&["battery level = 50"]),
        Err(BuildError::MissingComparator {
            index: 0,
            token: "battery level = 50".to_string()
        })
    );
    assert_eq!(
        build(&["carried weight < lots"]),
        Err(BuildError::InvalidThreshold {
            index: 0,
            token: "carried weight < lots".to_string()
        })
    );
    assert_eq!(
        build(&["s(", "dance", ")"]),
        Err(BuildError::UnknownToken {
            index: 1,
            token: "dance".to_string()
        })
    );
}

#[test]
fn errors_render_readably() {
    let err = build(&["at station MOON"]).expect_err("unknown station");
    assert_eq!(err.to_string(), "token 0: unknown station `MOON`");
}
