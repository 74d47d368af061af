//! Property-based and scenario tests for the stack engine.
//!
//! 1. Spacing never exceeds the maximum and never grows as cards are added.
//! 2. Single cards get spacing 0 under either alignment.
//! 3. Left-aligned rows never leave the bounds.
//! 4. Stack-local ↔ global round-trips.
//! 5. Transfers conserve cards and land where they were aimed.
//! 6. Reference layouts and transfer scenarios.

use std::time::Duration;

use emberdeck_core::geometry::Point;
use emberdeck_stack::{
    Align, CoordinateSpace, StackBoard, StackBounds, StackConfig, TransferEvent,
    calculate_layout,
};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn align_strategy() -> impl Strategy<Value = Align> {
    prop_oneof![Just(Align::Left), Just(Align::Center)]
}

fn bounds_strategy() -> impl Strategy<Value = StackBounds> {
    (-500.0f32..0.0, 0.0f32..500.0).prop_map(|(l, r)| StackBounds::from_edges(l, r))
}

/// Stack width 100, padding 5, card width 10: bounds [-40, 40].
fn reference_config() -> StackConfig {
    StackConfig {
        stack_width: 100.0,
        padding: 5.0,
        card_width: Some(10.0),
        ..StackConfig::default()
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Spacing bound and monotonicity
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn spacing_bounded_and_non_increasing(
        bounds in bounds_strategy(),
        align in align_strategy(),
        max in 0.0f32..20.0,
        n in 2usize..300,
    ) {
        let fewer = calculate_layout(bounds, n, align, max);
        let more = calculate_layout(bounds, n + 1, align, max);
        prop_assert!(fewer.spacing <= max);
        prop_assert!(fewer.spacing >= 0.0);
        prop_assert!(more.spacing <= fewer.spacing);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Single card
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn single_card_has_no_spacing(bounds in bounds_strategy(), max in 0.0f32..20.0) {
        let left = calculate_layout(bounds, 1, Align::Left, max);
        let center = calculate_layout(bounds, 1, Align::Center, max);
        prop_assert_eq!(left.spacing, 0.0);
        prop_assert_eq!(center.spacing, 0.0);
        prop_assert_eq!(left.start_offset, bounds.left);
        let mid = (bounds.left + bounds.right) / 2.0;
        prop_assert!((center.start_offset - mid).abs() < 1e-3);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Containment
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn rows_stay_inside_bounds(
        bounds in bounds_strategy(),
        align in align_strategy(),
        n in 1usize..300,
    ) {
        let layout = calculate_layout(bounds, n, align, 6.0);
        let slack = 1e-3 * (1.0 + bounds.span());
        for i in 0..n {
            let x = layout.position(i).x;
            prop_assert!(x >= bounds.left - slack, "card {} at {} left of {}", i, x, bounds.left);
            prop_assert!(x <= bounds.right + slack, "card {} at {} right of {}", i, x, bounds.right);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Coordinate round-trip
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn global_local_round_trip(
        ox in -2000.0f32..2000.0,
        oy in -2000.0f32..2000.0,
        px in -300.0f32..300.0,
        py in -300.0f32..300.0,
    ) {
        let mut board = StackBoard::new(StackConfig::default());
        let id = board.add_stack(Align::Center);
        board.set_stack_origin(id, Point::new(ox, oy));
        let local = Point::new(px, py);
        let space = board.space();
        let back = space.to_local(id, space.to_global(id, local));
        prop_assert!(back.distance(local) < 1e-2);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Conservation
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn transfers_conserve_cards(
        ops in prop::collection::vec((any::<bool>(), 0u64..1500), 1..60),
    ) {
        let mut board = StackBoard::new(StackConfig::default());
        let top = board.add_stack(Align::Center);
        let bottom = board.add_stack(Align::Left);
        board.set_stack_origin(top, Point::new(400.0, 200.0));
        board.set_stack_origin(bottom, Point::new(400.0, 400.0));
        board.deal(top, 12).unwrap();

        for (downward, ms) in ops {
            let (from, to) = if downward { (top, bottom) } else { (bottom, top) };
            board.transfer_card(from, to).unwrap();
            board.advance(Duration::from_millis(ms));
            prop_assert_eq!(board.total_cards(), 12);
        }
        board.advance(Duration::from_secs(3));
        prop_assert!(board.in_flight().is_empty());
        prop_assert_eq!(
            board.stack(top).unwrap().len() + board.stack(bottom).unwrap().len(),
            12
        );

        let mut started = 0;
        let mut landed = 0;
        for event in board.drain_events() {
            match event {
                TransferEvent::Started { .. } => started += 1,
                TransferEvent::Landed { .. } => landed += 1,
                TransferEvent::Cancelled { .. } => prop_assert!(false, "nothing was cancelled"),
            }
        }
        prop_assert_eq!(started, landed);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Scenarios
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn five_card_reference_layout() {
    let mut board = StackBoard::new(reference_config());
    let stack = board.add_stack(Align::Center);
    board.deal(stack, 5).unwrap();

    let s = board.stack(stack).unwrap();
    assert_eq!(s.bounds(), StackBounds::from_edges(-40.0, 40.0));
    let layout = s.layout_for(5);
    assert_eq!(layout.spacing, 6.0);
    assert_eq!(layout.start_offset, -12.0);
    let xs: Vec<f32> = s.cards().iter().map(|c| c.position().x).collect();
    assert_eq!(xs, vec![-12.0, -6.0, 0.0, 6.0, 12.0]);
}

#[test]
fn sole_card_moves_to_empty_left_stack() {
    let mut board = StackBoard::new(reference_config());
    let source = board.add_stack(Align::Center);
    let target = board.add_stack(Align::Left);
    board.set_stack_origin(source, Point::new(50.0, 30.0));
    board.set_stack_origin(target, Point::new(50.0, 120.0));
    board.deal(source, 1).unwrap();

    board.transfer_card(source, target).unwrap().unwrap();
    // Empty source re-layout must be harmless.
    assert!(board.stack(source).unwrap().is_empty());

    board.advance(Duration::from_millis(2000));
    let s = board.stack(source).unwrap();
    let t = board.stack(target).unwrap();
    assert!(s.is_empty());
    assert_eq!(t.len(), 1);
    assert_eq!(t.cards()[0].position(), Point::new(-40.0, 0.0));
    assert_eq!(board.card_global_position(target, 0), Some(Point::new(10.0, 120.0)));
}

#[test]
fn cancel_mid_flight_leaves_card_where_it_was() {
    let mut board = StackBoard::new(reference_config());
    let source = board.add_stack(Align::Center);
    let target = board.add_stack(Align::Left);
    board.set_stack_origin(source, Point::new(0.0, 0.0));
    board.set_stack_origin(target, Point::new(0.0, 100.0));
    board.deal(source, 1).unwrap();

    let id = board.transfer_card(source, target).unwrap().unwrap();
    board.advance(Duration::from_millis(1000));
    let flight = board.transfer(id).unwrap();
    let expected = flight.start().lerp(flight.destination(), 0.875);

    let card = board.cancel(id).unwrap();
    assert!(card.position().distance(expected) < 1e-3);
    // Never reparented.
    assert!(board.stack(target).unwrap().is_empty());
    assert!(board.in_flight().is_empty());
    assert!(
        !board
            .drain_events()
            .iter()
            .any(|e| matches!(e, TransferEvent::Landed { .. }))
    );

    // Further ticks do nothing.
    assert_eq!(board.advance(Duration::from_secs(5)), 0);
    assert!(board.stack(target).unwrap().is_empty());
}

#[test]
fn card_slides_without_jumping() {
    let mut board = StackBoard::new(StackConfig::default());
    let top = board.add_stack(Align::Center);
    let bottom = board.add_stack(Align::Left);
    board.set_stack_origin(top, Point::new(400.0, 210.0));
    board.set_stack_origin(bottom, Point::new(400.0, 390.0));
    board.deal(top, 144).unwrap();

    let id = board.transfer_card(top, bottom).unwrap().unwrap();
    let flight = board.transfer(id).unwrap();
    let total = flight.start().distance(flight.destination());
    let mut last = flight.position();
    // Ease-out: the first step is the longest.
    let max_step = total * 3.0 * (16.0 / 2000.0) + 1e-3;
    for _ in 0..125 {
        board.advance(Duration::from_millis(16));
        let Some(flight) = board.transfer(id) else {
            break;
        };
        assert!(flight.position().distance(last) <= max_step);
        last = flight.position();
    }
    assert_eq!(board.stack(bottom).unwrap().len(), 1);
}
