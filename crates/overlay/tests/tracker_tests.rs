use {
    base::Vec2,
    overlay::{DrawOp, KeypointTracker, TrackerError},
};

#[test]
fn test_first_result_draws_confident_points_only() {
    let mut tracker = KeypointTracker::new();

    let ops = tracker.reconcile(&[0.5, 0.5, 0.9, 0.2, 0.2, 0.1]).unwrap();

    assert_eq!(
        ops,
        vec![DrawOp::Draw {
            index: 0,
            at: Vec2::new(0.5, 0.5)
        }]
    );
    assert_eq!(tracker.len(), 2);
    assert!(tracker.points()[0].is_visible());
    assert!(!tracker.points()[1].is_visible());
}

#[test]
fn test_row_is_y_and_col_is_x() {
    let mut tracker = KeypointTracker::new();
    let ops = tracker.reconcile(&[0.25, 0.75, 0.9]).unwrap();
    assert_eq!(
        ops,
        vec![DrawOp::Draw {
            index: 0,
            at: Vec2::new(0.75, 0.25)
        }]
    );
}

#[test]
fn test_visible_point_moves() {
    let mut tracker = KeypointTracker::new();
    tracker.reconcile(&[0.5, 0.5, 0.9, 0.2, 0.2, 0.1]).unwrap();

    let ops = tracker.reconcile(&[0.6, 0.6, 0.9, 0.2, 0.2, 0.1]).unwrap();

    assert_eq!(
        ops,
        vec![DrawOp::Move {
            index: 0,
            from: Vec2::new(0.5, 0.5),
            to: Vec2::new(0.6, 0.6)
        }]
    );
    assert_eq!(tracker.points()[0].position, Vec2::new(0.6, 0.6));
}

#[test]
fn test_dropping_below_threshold_erases_at_stored_position() {
    let mut tracker = KeypointTracker::new();
    tracker.reconcile(&[0.3, 0.4, 0.8]).unwrap();

    let ops = tracker.reconcile(&[0.9, 0.9, 0.2]).unwrap();

    assert_eq!(
        ops,
        vec![DrawOp::Erase {
            index: 0,
            at: Vec2::new(0.4, 0.3)
        }]
    );
    assert_eq!(tracker.points()[0].confidence, 0.0);
}

#[test]
fn test_hidden_point_staying_low_is_noop() {
    let mut tracker = KeypointTracker::new();
    tracker.reconcile(&[0.3, 0.4, 0.1]).unwrap();
    let ops = tracker.reconcile(&[0.3, 0.4, 0.4]).unwrap();
    assert!(ops.is_empty());
}

#[test]
fn test_reappearing_point_is_drawn_not_moved() {
    let mut tracker = KeypointTracker::new();
    tracker.reconcile(&[0.1, 0.1, 0.9]).unwrap();
    tracker.reconcile(&[0.1, 0.1, 0.0]).unwrap();

    let ops = tracker.reconcile(&[0.2, 0.2, 0.9]).unwrap();

    assert_eq!(
        ops,
        vec![DrawOp::Draw {
            index: 0,
            at: Vec2::new(0.2, 0.2)
        }]
    );
}

#[test]
fn test_transition_table() {
    // index: 0 unset->low, 1 unset->high, then 1 high->high, 2 high->low, 3 low->low
    let mut tracker = KeypointTracker::new();
    let first = tracker
        .reconcile(&[
            0.1, 0.1, 0.2, //
            0.2, 0.2, 0.9, //
            0.3, 0.3, 0.9, //
            0.4, 0.4, 0.3, //
        ])
        .unwrap();
    assert_eq!(
        first,
        vec![
            DrawOp::Draw {
                index: 1,
                at: Vec2::new(0.2, 0.2)
            },
            DrawOp::Draw {
                index: 2,
                at: Vec2::new(0.3, 0.3)
            },
        ]
    );

    let second = tracker
        .reconcile(&[
            0.1, 0.1, 0.2, //
            0.25, 0.25, 0.95, //
            0.3, 0.3, 0.5, //
            0.4, 0.4, 0.1, //
        ])
        .unwrap();
    assert_eq!(
        second,
        vec![
            DrawOp::Move {
                index: 1,
                from: Vec2::new(0.2, 0.2),
                to: Vec2::new(0.25, 0.25)
            },
            DrawOp::Erase {
                index: 2,
                at: Vec2::new(0.3, 0.3)
            },
        ]
    );
}

#[test]
fn test_threshold_boundary() {
    let mut tracker = KeypointTracker::new();
    let ops = tracker.reconcile(&[0.5, 0.5, 0.5]).unwrap();
    assert!(ops.is_empty(), "exactly 0.5 is below threshold");

    let ops = tracker.reconcile(&[0.5, 0.5, 0.500_000_1]).unwrap();
    assert_eq!(ops.len(), 1);
    assert!(matches!(ops[0], DrawOp::Draw { index: 0, .. }));
}

#[test]
fn test_identical_result_repeats_as_move() {
    let keypoints = [0.5, 0.5, 0.9, 0.2, 0.2, 0.1];
    let mut tracker = KeypointTracker::new();
    tracker.reconcile(&keypoints).unwrap();

    let ops = tracker.reconcile(&keypoints).unwrap();

    // no new Draw; the visible point is re-placed in place, the hidden one stays put
    assert_eq!(
        ops,
        vec![DrawOp::Move {
            index: 0,
            from: Vec2::new(0.5, 0.5),
            to: Vec2::new(0.5, 0.5)
        }]
    );
}

#[test]
fn test_length_change_is_rejected_without_side_effects() {
    let mut tracker = KeypointTracker::new();
    tracker.reconcile(&[0.5, 0.5, 0.9, 0.2, 0.2, 0.1]).unwrap();
    let before = tracker.points().to_vec();

    let err = tracker.reconcile(&[0.1, 0.1, 0.9]).unwrap_err();

    assert_eq!(
        err,
        TrackerError::LengthChanged {
            expected: 2,
            actual: 1
        }
    );
    assert_eq!(tracker.points(), &before[..]);
}

#[test]
fn test_partial_triple_is_malformed() {
    let mut tracker = KeypointTracker::new();
    assert_eq!(
        tracker.reconcile(&[0.1, 0.2]).unwrap_err(),
        TrackerError::Malformed { len: 2 }
    );
    assert!(tracker.is_empty());
}

#[test]
fn test_empty_result_does_not_fix_point_count() {
    let mut tracker = KeypointTracker::new();
    assert!(tracker.reconcile(&[]).unwrap().is_empty());
    assert!(tracker.is_empty());

    tracker.reconcile(&[0.1, 0.1, 0.9, 0.2, 0.2, 0.9]).unwrap();
    assert_eq!(tracker.len(), 2);
}

#[test]
fn test_op_index() {
    let op = DrawOp::Erase {
        index: 7,
        at: Vec2::new(0.0, 0.0),
    };
    assert_eq!(op.index(), 7);
}
