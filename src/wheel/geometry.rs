use crate::entries::segment::{Segment, total_weight};

/// Fixed pointer reference angle in degrees ("top" of the wheel).
pub const POINTER_ANGLE_DEG: f64 = 270.0;

/// Angular arc occupied by one segment, in wheel-local degrees.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Arc {
    /// Index of the backing segment.
    pub index: usize,
    /// Arc start angle, cumulative from 0 degrees.
    pub start_deg: f64,
    /// Arc width, proportional to `weight / total_weight` of a full turn.
    pub sweep_deg: f64,
}

impl Arc {
    /// Arc end angle.
    pub fn end_deg(&self) -> f64 {
        self.start_deg + self.sweep_deg
    }

    /// Arc center angle.
    pub fn center_deg(&self) -> f64 {
        self.start_deg + self.sweep_deg / 2.0
    }

    /// True when the wheel-local angle (already reduced mod 360) falls
    /// inside this arc.
    pub fn contains_deg(&self, angle_deg: f64) -> bool {
        self.start_deg <= angle_deg && angle_deg < self.end_deg()
    }
}

/// Lay out segments as proportional arcs in segment order from 0 degrees.
pub fn segment_arcs(segments: &[Segment]) -> Vec<Arc> {
    let total = total_weight(segments) as f64;
    let mut start_deg = 0.0;
    segments
        .iter()
        .map(|seg| {
            let sweep_deg = f64::from(seg.weight) / total * 360.0;
            let arc = Arc {
                index: seg.index,
                start_deg,
                sweep_deg,
            };
            start_deg += sweep_deg;
            arc
        })
        .collect()
}

/// Arc of the first segment whose display name matches `winner`.
///
/// Duplicate display names resolve to the first match in segment order,
/// mirroring the resolver's lookup, so resolver and animator always agree
/// on the landing arc.
pub fn arc_for_winner<'a>(
    arcs: &'a [Arc],
    segments: &[Segment],
    winner: &str,
) -> Option<&'a Arc> {
    let index = segments.iter().position(|s| s.display_name == winner)?;
    arcs.iter().find(|a| a.index == index)
}

#[cfg(test)]
#[path = "../../tests/unit/wheel/geometry.rs"]
mod tests;
