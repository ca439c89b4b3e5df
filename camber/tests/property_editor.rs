use camber::algorithms::elevation::build_history;
use camber::controller::Input;
use camber::geometry::bezier::{elevate_degree, eval};
use camber::model::{Page, Point, MAX_ELEVATION_LEVEL, MAX_POINTS, MIN_POINTS};
use camber::Editor;
use proptest::prelude::*;

const W: f32 = 1400.0;
const H: f32 = 900.0;

fn point_strategy() -> impl Strategy<Value = Point> {
    (0.0f32..W, 0.0f32..H).prop_map(|(x, y)| Point::new(x, y))
}

fn polygon_strategy() -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec(point_strategy(), 2..=10)
}

proptest! {
    #[test]
    fn eval_hits_the_endpoints_exactly(polygon in polygon_strategy()) {
        prop_assert_eq!(eval(&polygon, 0.0), polygon[0]);
        prop_assert_eq!(eval(&polygon, 1.0), *polygon.last().unwrap());
    }

    #[test]
    fn elevation_preserves_the_curve(polygon in polygon_strategy(), t in 0.0f32..=1.0) {
        let elevated = elevate_degree(&polygon);
        prop_assert_eq!(elevated.len(), polygon.len() + 1);
        let a = eval(&polygon, t);
        let b = eval(&elevated, t);
        prop_assert!((a.x - b.x).abs() <= 0.05 && (a.y - b.y).abs() <= 0.05,
            "diverged at t={}: ({}, {}) vs ({}, {})", t, a.x, a.y, b.x, b.y);
    }

    #[test]
    fn repeated_elevation_adds_one_point_per_step(polygon in polygon_strategy(), k in 0u32..6) {
        let history = build_history(&polygon, k);
        prop_assert_eq!(history.len(), k as usize);
        for (step, entry) in history.iter().enumerate() {
            prop_assert_eq!(entry.len(), polygon.len() + step + 1);
        }
    }

    #[test]
    fn history_endpoints_never_move(polygon in polygon_strategy(), k in 1u32..6) {
        let history = build_history(&polygon, k);
        for entry in &history {
            prop_assert_eq!(entry[0], polygon[0]);
            prop_assert_eq!(*entry.last().unwrap(), *polygon.last().unwrap());
        }
    }
}

#[derive(Clone, Debug)]
enum Op {
    SetCount(u32),
    SetLevel(u32),
    Down { x: f32, y: f32 },
    Move { x: f32, y: f32 },
    Up,
    Leave,
    Reset,
    ToggleBase,
    ToggleElevated,
    Page(u8),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u32..24).prop_map(Op::SetCount),
        (0u32..10).prop_map(Op::SetLevel),
        (-100.0f32..1500.0, -100.0f32..1000.0).prop_map(|(x, y)| Op::Down { x, y }),
        (-100.0f32..1500.0, -100.0f32..1000.0).prop_map(|(x, y)| Op::Move { x, y }),
        Just(Op::Up),
        Just(Op::Leave),
        Just(Op::Reset),
        Just(Op::ToggleBase),
        Just(Op::ToggleElevated),
        (0u8..3).prop_map(Op::Page),
    ]
}

fn apply_op(ed: &mut Editor, op: Op) {
    let input = match op {
        Op::SetCount(n) => Input::SetPointCount(n),
        Op::SetLevel(l) => Input::SetElevationLevel(l),
        Op::Down { x, y } => Input::PointerDown { x, y },
        Op::Move { x, y } => Input::PointerMove { x, y },
        Op::Up => Input::PointerUp,
        Op::Leave => Input::PointerLeave,
        Op::Reset => Input::ResetPoints,
        Op::ToggleBase => Input::ToggleBase,
        Op::ToggleElevated => Input::ToggleElevated,
        Op::Page(p) => Input::SetPage(match p {
            0 => Page::Playground,
            1 => Page::Theory,
            _ => Page::About,
        }),
    };
    let _ = ed.apply(input);
}

fn assert_invariants(ed: &Editor) {
    let n = ed.points().len();
    assert!((MIN_POINTS..=MAX_POINTS).contains(&n), "point count {}", n);
    assert!(ed.elevation_level() <= MAX_ELEVATION_LEVEL);
    assert_eq!(ed.history().len(), ed.elevation_level() as usize);
    for (step, entry) in ed.history().iter().enumerate() {
        assert_eq!(entry.len(), n + step + 1, "history entry {} length", step);
    }
    for p in ed.points() {
        assert!((0.0..=W).contains(&p.x) && (0.0..=H).contains(&p.y),
            "point out of bounds: ({}, {})", p.x, p.y);
    }
    if let Some(i) = ed.dragging_index() {
        assert!(i < n, "dragging index {} out of range", i);
    }
    // Derived state is a pure function of (points, level): recomputing
    // from scratch must agree with what the editor carries.
    let fresh = build_history(ed.points(), ed.elevation_level());
    assert_eq!(ed.history(), fresh.as_slice());
}

fn sequence_strategy() -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(op_strategy(), 1..40)
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 512, .. ProptestConfig::default() })]
    #[test]
    fn random_input_sequences_keep_invariants(seq in sequence_strategy()) {
        let mut ed = Editor::new(W, H);
        for op in seq {
            apply_op(&mut ed, op);
            assert_invariants(&ed);
        }
    }

    #[test]
    fn resize_twice_yields_the_same_polygon(target in 2u32..=16, seq in sequence_strategy()) {
        let mut ed = Editor::new(W, H);
        for op in seq {
            apply_op(&mut ed, op);
        }
        apply_op(&mut ed, Op::Up);
        apply_op(&mut ed, Op::SetCount(target));
        let first: Vec<Point> = ed.points().to_vec();
        apply_op(&mut ed, Op::SetCount(target));
        prop_assert_eq!(ed.points(), first.as_slice());
        prop_assert_eq!(ed.points().len(), target as usize);
    }
}
