use crate::entries::parser::ParticipantEntry;

/// Derived, per-entry view used by selection and wheel layout.
///
/// Segments mirror the entry list 1:1 and are recomputed whenever the
/// participant list is replaced; they are never mutated independently.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Segment {
    /// Zero-based position in the entry list.
    pub index: usize,
    /// Original participant line.
    pub raw_text: String,
    /// Name shown on the wheel and recorded in history.
    pub display_name: String,
    /// Positive selection weight.
    pub weight: u32,
}

/// Build the segment view over a parsed entry list.
pub fn build_segments(entries: &[ParticipantEntry]) -> Vec<Segment> {
    entries
        .iter()
        .enumerate()
        .map(|(index, e)| Segment {
            index,
            raw_text: e.raw_text.clone(),
            display_name: e.display_name.clone(),
            weight: e.weight,
        })
        .collect()
}

/// Sum of all segment weights. Zero only for an empty list, since every
/// parsed weight is >= 1.
pub fn total_weight(segments: &[Segment]) -> u64 {
    segments.iter().map(|s| u64::from(s.weight)).sum()
}
