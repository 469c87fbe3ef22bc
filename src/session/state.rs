use crate::{
    entries::parser::{ParticipantEntry, parse_entries},
    entries::segment::{Segment, build_segments},
    foundation::error::RaffleResult,
    foundation::rng::RandomSource,
    rigging::routes::{Route, resolve_route},
    rigging::state::Rigging,
    session::resolver::resolve_winner,
    wheel::spin::{SpinPlan, plan_spin},
};

/// Render snapshot handed to the presentation collaborator.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ViewState {
    /// True from draw acceptance until the spin completes.
    pub is_resolving: bool,
    /// Most recent finalized winner, if any.
    pub winner: Option<String>,
    /// Winner history, most recent first.
    pub history: Vec<String>,
}

/// Discrete events emitted toward the presentation collaborator.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub enum SessionEvent {
    /// A draw was accepted and a spin is underway.
    DrawRequested,
    /// The spin finished and the named winner was finalized.
    SpinCompleted(String),
    /// The configuration surface was opened.
    ConfigOpened,
}

/// A spin in flight: the plan plus the winner it was built for. The pair
/// is created and discarded atomically so the animation can never outlive
/// or disagree with its precommitted winner.
#[derive(Debug)]
struct ActiveSpin {
    plan: SpinPlan,
    winner: String,
}

/// Single-owner raffle session state.
///
/// All mutation happens through the documented transitions below; the
/// session is driven by discrete user actions plus one `tick` per display
/// refresh, so ordering discipline (resolve, then animate, then finalize)
/// is the only concurrency concern.
#[derive(Debug, Default)]
pub struct RaffleSession {
    participants: Vec<String>,
    entries: Vec<ParticipantEntry>,
    segments: Vec<Segment>,
    history: Vec<String>,
    rigging: Rigging,
    rotation_deg: f64,
    active: Option<ActiveSpin>,
    current_winner: Option<String>,
}

impl RaffleSession {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rehydrate a session from previously persisted raw participant lines.
    pub fn from_saved_lines(lines: &[String]) -> Self {
        let mut session = Self::new();
        session.set_participants(&lines.join("\n"));
        session
    }

    /// Replace the whole participant list from a free-text block. This is
    /// the only way entries are removed; partial deletion does not exist.
    pub fn set_participants(&mut self, text: &str) {
        let entries = parse_entries(text);
        self.participants = entries.iter().map(|e| e.raw_text.clone()).collect();
        self.segments = build_segments(&entries);
        self.entries = entries;
    }

    /// Raw participant lines in entry order.
    pub fn participants(&self) -> &[String] {
        &self.participants
    }

    /// Parsed weighted entries.
    pub fn entries(&self) -> &[ParticipantEntry] {
        &self.entries
    }

    /// Derived segment view.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Rigging state (read only; mutate through the transitions below).
    pub fn rigging(&self) -> &Rigging {
        &self.rigging
    }

    /// Current wheel rotation in degrees.
    pub fn rotation_deg(&self) -> f64 {
        self.rotation_deg
    }

    /// True while a spin plan is active.
    pub fn is_resolving(&self) -> bool {
        self.active.is_some()
    }

    /// Request a draw.
    ///
    /// Ignored (returning `Ok(None)`) while a spin is active or the pool
    /// is empty; a live plan owns the rotation value and two plans must
    /// never race over it. Otherwise the winner is resolved eagerly, the
    /// spin is planned for that precommitted winner, and
    /// [`SessionEvent::DrawRequested`] is returned. A planning failure is
    /// fatal and propagated.
    #[tracing::instrument(skip(self, rng))]
    pub fn draw(
        &mut self,
        now_ms: f64,
        rng: &mut dyn RandomSource,
    ) -> RaffleResult<Option<SessionEvent>> {
        if self.active.is_some() {
            tracing::warn!("draw requested while a spin is active, ignored");
            return Ok(None);
        }
        let Some(resolution) = resolve_winner(&self.segments, &mut self.rigging, rng) else {
            return Ok(None);
        };

        let plan = plan_spin(
            &self.segments,
            &resolution.winner,
            self.rotation_deg,
            now_ms,
            rng,
        )?;
        self.rotation_deg = plan.start_rotation_deg;
        self.active = Some(ActiveSpin {
            plan,
            winner: resolution.winner,
        });
        self.current_winner = None;
        Ok(Some(SessionEvent::DrawRequested))
    }

    /// Advance the active spin one frame.
    ///
    /// Updates the wheel rotation; on completion finalizes the pending
    /// winner into history (most recent first), discards the plan, and
    /// returns [`SessionEvent::SpinCompleted`]. No-op while idle.
    pub fn tick(&mut self, now_ms: f64) -> Option<SessionEvent> {
        let active = self.active.as_ref()?;
        let sample = active.plan.sample(now_ms);
        self.rotation_deg = sample.rotation_deg;
        if !sample.done {
            return None;
        }

        let finished = self.active.take()?;
        self.history.insert(0, finished.winner.clone());
        self.current_winner = Some(finished.winner.clone());
        Some(SessionEvent::SpinCompleted(finished.winner))
    }

    /// Load a route as the scripted queue, all-or-nothing. The prior
    /// queue is untouched on failure. Returns the queued length.
    pub fn load_route(&mut self, route: &Route) -> RaffleResult<usize> {
        let queue = resolve_route(route, &self.participants)?;
        let len = queue.len();
        self.rigging.load_queue(queue);
        Ok(len)
    }

    /// Clear the scripted queue ("fair mode").
    pub fn clear_queue(&mut self) {
        self.rigging.clear_queue();
    }

    /// Set or clear the single-use override.
    pub fn set_override(&mut self, name: Option<String>) {
        self.rigging.set_override(name);
    }

    /// Clear everything: participants, history, rigging, and any active
    /// spin.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Snapshot for the presentation collaborator.
    pub fn view(&self) -> ViewState {
        ViewState {
            is_resolving: self.active.is_some(),
            winner: self.current_winner.clone(),
            history: self.history.clone(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/state.rs"]
mod tests;
