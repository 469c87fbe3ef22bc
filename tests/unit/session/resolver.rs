use super::*;
use crate::entries::parser::parse_entries;
use crate::entries::segment::build_segments;
use crate::foundation::rng::SplitMix64;

fn segments(text: &str) -> Vec<Segment> {
    build_segments(&parse_entries(text))
}

#[test]
fn empty_pool_resolves_to_none() {
    let mut rigging = Rigging::default();
    let mut rng = SplitMix64::new(1);
    assert!(resolve_winner(&[], &mut rigging, &mut rng).is_none());
}

#[test]
fn fair_draw_returns_a_pool_member() {
    let segments = segments("Alice\nBob\nCharlie");
    let mut rigging = Rigging::default();
    let mut rng = SplitMix64::new(9);
    for _ in 0..50 {
        let r = resolve_winner(&segments, &mut rigging, &mut rng).unwrap();
        assert_eq!(r.tier, ResolutionTier::WeightedRandom);
        assert!(segments.iter().any(|s| s.display_name == r.winner));
    }
}

#[test]
fn queue_front_wins_and_is_consumed() {
    let segments = segments("X\nY\nZ");
    let mut rigging = Rigging::default();
    rigging.load_queue(vec!["X".into(), "Y".into()]);
    let mut rng = SplitMix64::new(1);

    let first = resolve_winner(&segments, &mut rigging, &mut rng).unwrap();
    assert_eq!(first.winner, "X");
    assert_eq!(first.tier, ResolutionTier::Queue);
    assert_eq!(rigging.queue.len(), 1);

    let second = resolve_winner(&segments, &mut rigging, &mut rng).unwrap();
    assert_eq!(second.winner, "Y");
    assert!(rigging.queue.is_empty());
}

#[test]
fn unmatched_queue_front_is_popped_and_falls_through() {
    let segments = segments("Alice\nBob");
    let mut rigging = Rigging::default();
    rigging.load_queue(vec!["Ghost".into()]);
    let mut rng = SplitMix64::new(2);

    let r = resolve_winner(&segments, &mut rigging, &mut rng).unwrap();
    assert_eq!(r.tier, ResolutionTier::WeightedRandom);
    // Popped regardless of match so a stale entry cannot block the queue.
    assert!(rigging.queue.is_empty());
}

#[test]
fn queue_matches_raw_text_of_weighted_entries() {
    let segments = segments("Alice * 10\nBob");
    let mut rigging = Rigging::default();
    rigging.load_queue(vec!["Alice * 10".into()]);
    let mut rng = SplitMix64::new(3);

    let r = resolve_winner(&segments, &mut rigging, &mut rng).unwrap();
    assert_eq!(r.winner, "Alice");
    assert_eq!(r.tier, ResolutionTier::Queue);
}

#[test]
fn duplicate_display_names_resolve_to_first_match() {
    let segments = segments("Alice * 10\nAlice * 2\nBob");
    let mut rigging = Rigging::default();
    rigging.load_queue(vec!["Alice".into()]);
    let mut rng = SplitMix64::new(3);

    let r = resolve_winner(&segments, &mut rigging, &mut rng).unwrap();
    assert_eq!(r.winner, "Alice");
}

#[test]
fn override_applies_after_queue_miss_and_clears() {
    let segments = segments("Alice\nBob");
    let mut rigging = Rigging::default();
    rigging.load_queue(vec!["Ghost".into()]);
    rigging.set_override(Some("Bob".into()));
    let mut rng = SplitMix64::new(4);

    let r = resolve_winner(&segments, &mut rigging, &mut rng).unwrap();
    assert_eq!(r.winner, "Bob");
    assert_eq!(r.tier, ResolutionTier::Override);
    assert!(rigging.override_name.is_none());
}

#[test]
fn queue_match_leaves_override_in_place() {
    let segments = segments("Alice\nBob");
    let mut rigging = Rigging::default();
    rigging.load_queue(vec!["Alice".into()]);
    rigging.set_override(Some("Bob".into()));
    let mut rng = SplitMix64::new(5);

    let r = resolve_winner(&segments, &mut rigging, &mut rng).unwrap();
    assert_eq!(r.winner, "Alice");
    assert_eq!(rigging.override_name.as_deref(), Some("Bob"));
}

#[test]
fn absent_override_is_kept_not_discarded() {
    let segments = segments("Alice\nBob");
    let mut rigging = Rigging::default();
    rigging.set_override(Some("Ghost".into()));
    let mut rng = SplitMix64::new(6);

    let r = resolve_winner(&segments, &mut rigging, &mut rng).unwrap();
    assert_eq!(r.tier, ResolutionTier::WeightedRandom);
    assert_eq!(rigging.override_name.as_deref(), Some("Ghost"));
}

#[test]
fn selection_frequency_converges_to_weight_share() {
    let segments = segments("Alice * 3\nBob * 1");
    let mut rng = SplitMix64::new(0xDECAF);
    let trials = 20_000;
    let mut alice = 0u32;
    for _ in 0..trials {
        let mut rigging = Rigging::default();
        let r = resolve_winner(&segments, &mut rigging, &mut rng).unwrap();
        if r.winner == "Alice" {
            alice += 1;
        }
    }
    let freq = f64::from(alice) / f64::from(trials);
    assert!(
        (freq - 0.75).abs() < 0.02,
        "Alice frequency {freq} not near 0.75"
    );
}

#[test]
fn every_positive_weight_segment_is_reachable() {
    let segments = segments("A * 1\nB * 5\nC * 1");
    let mut rng = SplitMix64::new(7);
    let mut seen = [false; 3];
    for _ in 0..5_000 {
        let mut rigging = Rigging::default();
        let r = resolve_winner(&segments, &mut rigging, &mut rng).unwrap();
        let i = segments
            .iter()
            .position(|s| s.display_name == r.winner)
            .unwrap();
        seen[i] = true;
    }
    assert_eq!(seen, [true, true, true]);
}
