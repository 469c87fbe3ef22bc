use super::*;
use crate::entries::parser::parse_entries;
use crate::entries::segment::build_segments;

fn arcs_for(text: &str) -> (Vec<Segment>, Vec<Arc>) {
    let segments = build_segments(&parse_entries(text));
    let arcs = segment_arcs(&segments);
    (segments, arcs)
}

#[test]
fn arcs_are_cumulative_and_proportional() {
    let (_, arcs) = arcs_for("A * 1\nB * 3");
    assert_eq!(arcs.len(), 2);
    assert_eq!(arcs[0].start_deg, 0.0);
    assert!((arcs[0].sweep_deg - 90.0).abs() < 1e-9);
    assert!((arcs[1].start_deg - 90.0).abs() < 1e-9);
    assert!((arcs[1].sweep_deg - 270.0).abs() < 1e-9);
    assert!((arcs[1].end_deg() - 360.0).abs() < 1e-9);
}

#[test]
fn equal_weights_split_the_turn_evenly() {
    let (_, arcs) = arcs_for("A\nB\nC\nD");
    for (i, arc) in arcs.iter().enumerate() {
        assert!((arc.sweep_deg - 90.0).abs() < 1e-9);
        assert!((arc.start_deg - 90.0 * i as f64).abs() < 1e-9);
    }
}

#[test]
fn center_and_containment_agree() {
    let (_, arcs) = arcs_for("A * 1\nB * 1");
    assert!((arcs[0].center_deg() - 90.0).abs() < 1e-9);
    assert!(arcs[0].contains_deg(0.0));
    assert!(arcs[0].contains_deg(179.9));
    assert!(!arcs[0].contains_deg(180.0));
    assert!(arcs[1].contains_deg(180.0));
}

#[test]
fn winner_arc_is_first_match_in_segment_order() {
    let (segments, arcs) = arcs_for("Alice * 10\nAlice * 2\nBob");
    let arc = arc_for_winner(&arcs, &segments, "Alice").unwrap();
    assert_eq!(arc.index, 0);
    assert!(arc_for_winner(&arcs, &segments, "Ghost").is_none());
}
