use crate::{
    entries::segment::{Segment, total_weight},
    foundation::rng::RandomSource,
    rigging::state::Rigging,
};

/// Which precedence tier produced a winner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum ResolutionTier {
    /// Front of the scripted queue matched a segment.
    Queue,
    /// The single-use override matched a segment.
    Override,
    /// Cumulative-weight random selection.
    WeightedRandom,
}

/// Outcome of one resolution call.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Resolution {
    /// Display name of the winning segment.
    pub winner: String,
    /// Tier that decided the draw.
    pub tier: ResolutionTier,
}

/// Pick the next winner for one draw.
///
/// Returns `None` only when `segments` is empty. Precedence:
///
/// 1. Scripted queue: the front entry is matched against each segment's
///    display name first, then its raw text (routes may reference either
///    form). The front is popped whether or not it matched, so one stale
///    entry can never block the queue; an unmatched pop falls through.
/// 2. Single override: matched by display name only; cleared on a match,
///    left in place otherwise.
/// 3. Weighted random: uniform value in `[0, total_weight)`, walked
///    against cumulative weights in segment order. The final guard returns
///    the last segment if floating-point rounding exhausts the walk
///    without a hit, so no positive-weight segment is ever unreachable.
///
/// Queue and override mutations are the only side effects: the queue
/// shrinks by exactly zero or one entries per call.
#[tracing::instrument(skip(segments, rigging, rng), fields(pool = segments.len()))]
pub fn resolve_winner(
    segments: &[Segment],
    rigging: &mut Rigging,
    rng: &mut dyn RandomSource,
) -> Option<Resolution> {
    if segments.is_empty() {
        return None;
    }

    if let Some(front) = rigging.queue.pop_front() {
        let hit = segments
            .iter()
            .find(|s| s.display_name == front)
            .or_else(|| segments.iter().find(|s| s.raw_text == front));
        match hit {
            Some(seg) => {
                tracing::debug!(winner = %seg.display_name, "queue front matched");
                return Some(Resolution {
                    winner: seg.display_name.clone(),
                    tier: ResolutionTier::Queue,
                });
            }
            None => {
                tracing::warn!(entry = %front, "queue front matched no segment, discarded");
            }
        }
    }

    if let Some(name) = rigging.override_name.as_deref()
        && let Some(seg) = segments.iter().find(|s| s.display_name == name)
    {
        let winner = seg.display_name.clone();
        rigging.override_name = None;
        tracing::debug!(winner = %winner, "override matched");
        return Some(Resolution {
            winner,
            tier: ResolutionTier::Override,
        });
    }

    let total = total_weight(segments) as f64;
    let mut remaining = rng.next_f64_below(total);
    for seg in segments {
        remaining -= f64::from(seg.weight);
        if remaining <= 0.0 {
            return Some(Resolution {
                winner: seg.display_name.clone(),
                tier: ResolutionTier::WeightedRandom,
            });
        }
    }

    // Rounding undershoot; the walk covered the full range, so the last
    // segment owns whatever is left.
    segments.last().map(|seg| Resolution {
        winner: seg.display_name.clone(),
        tier: ResolutionTier::WeightedRandom,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/session/resolver.rs"]
mod tests;
