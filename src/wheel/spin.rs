use crate::{
    entries::segment::Segment,
    foundation::error::{RaffleError, RaffleResult},
    foundation::rng::RandomSource,
    wheel::ease::Ease,
    wheel::geometry::{POINTER_ANGLE_DEG, arc_for_winner, segment_arcs},
};

/// Minimum number of full extra turns per spin.
pub const MIN_FULL_TURNS: u32 = 6;

/// Spin duration band in milliseconds; randomized once per plan.
pub const DURATION_MIN_MS: f64 = 6000.0;
/// Upper bound of the duration band.
pub const DURATION_MAX_MS: f64 = 7000.0;

/// Landing offset bound as a fraction of the winner arc's sweep. Capping
/// at 0.4 keeps the landing point at least 10% of the sweep away from
/// either boundary, so the pointer never sits on a segment edge.
const LANDING_OFFSET_FRAC: f64 = 0.4;

/// One planned spin: an immutable rotation schedule from a start state to
/// a target that lands the precommitted winner under the pointer.
///
/// Plans are ephemeral, created per draw and discarded once sampled to
/// completion. Sampling is a pure function of elapsed time.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct SpinPlan {
    /// Wheel rotation at spin start, reduced to `[0, 360)`.
    pub start_rotation_deg: f64,
    /// Final wheel rotation; strictly greater than the start.
    pub target_rotation_deg: f64,
    /// Timestamp the spin started, in milliseconds.
    pub start_time_ms: f64,
    /// Animated duration in milliseconds.
    pub duration_ms: f64,
    /// Deceleration profile.
    pub ease: Ease,
}

/// One sampled animation frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpinSample {
    /// Wheel rotation at the sampled instant.
    pub rotation_deg: f64,
    /// True exactly once progress reaches 1; rotation then equals the
    /// plan target with no residual drift.
    pub done: bool,
}

/// Plan a spin that lands `winner` under the pointer.
///
/// The winner must already have been committed by the resolver; its
/// absence from `segments` means resolver and animator disagree about the
/// pool and is reported as a fatal [`RaffleError::Animation`], never
/// silently recovered.
///
/// The landing point is the winner arc's center perturbed by a uniform
/// offset within `±LANDING_OFFSET_FRAC` of the sweep. The target is the
/// start rotation plus [`MIN_FULL_TURNS`] full turns plus the forward
/// delta that brings the landing angle to [`POINTER_ANGLE_DEG`], so the
/// wheel never spins backward.
#[tracing::instrument(skip(segments, rng))]
pub fn plan_spin(
    segments: &[Segment],
    winner: &str,
    current_rotation_deg: f64,
    now_ms: f64,
    rng: &mut dyn RandomSource,
) -> RaffleResult<SpinPlan> {
    let arcs = segment_arcs(segments);
    let arc = arc_for_winner(&arcs, segments, winner).ok_or_else(|| {
        RaffleError::animation(format!(
            "winner '{winner}' is not in the segment list (resolver/animator desync)"
        ))
    })?;

    let offset_deg = (rng.next_f64_01() - 0.5) * arc.sweep_deg * (2.0 * LANDING_OFFSET_FRAC);
    let landing_deg = arc.center_deg() + offset_deg;

    let start_rotation_deg = current_rotation_deg.rem_euclid(360.0);
    let forward_delta_deg =
        (POINTER_ANGLE_DEG - landing_deg - start_rotation_deg).rem_euclid(360.0);
    let target_rotation_deg =
        start_rotation_deg + f64::from(MIN_FULL_TURNS) * 360.0 + forward_delta_deg;

    Ok(SpinPlan {
        start_rotation_deg,
        target_rotation_deg,
        start_time_ms: now_ms,
        duration_ms: rng.next_f64_range(DURATION_MIN_MS, DURATION_MAX_MS),
        ease: Ease::OutCubic,
    })
}

impl SpinPlan {
    /// Sample the plan at an absolute timestamp.
    pub fn sample(&self, now_ms: f64) -> SpinSample {
        let progress = ((now_ms - self.start_time_ms) / self.duration_ms).clamp(0.0, 1.0);
        if progress >= 1.0 {
            return SpinSample {
                rotation_deg: self.target_rotation_deg,
                done: true,
            };
        }
        let eased = self.ease.apply(progress);
        SpinSample {
            rotation_deg: self.start_rotation_deg
                + (self.target_rotation_deg - self.start_rotation_deg) * eased,
            done: false,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/wheel/spin.rs"]
mod tests;
