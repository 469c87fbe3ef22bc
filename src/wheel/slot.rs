use crate::foundation::rng::RandomSource;

/// Flip interval of the rolling text, in milliseconds.
pub const SLOT_TICK_MS: f64 = 50.0;

/// Text shown when the session is idle with no winner yet.
pub const IDLE_TEXT: &str = "READY";

/// Slot-style text roll: while a draw is resolving the display flips to a
/// random participant every [`SLOT_TICK_MS`], then settles on the winner.
///
/// Tick-driven like the wheel; holds no timers of its own.
#[derive(Clone, Debug)]
pub struct SlotRoll {
    display: String,
    last_flip_ms: f64,
}

impl Default for SlotRoll {
    fn default() -> Self {
        Self {
            display: IDLE_TEXT.to_owned(),
            last_flip_ms: f64::NEG_INFINITY,
        }
    }
}

impl SlotRoll {
    /// Current display text.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Advance one frame.
    ///
    /// `winner` pins the display once the draw is finalized; while
    /// `rolling` and the pool is non-empty the text flips at the slot
    /// cadence regardless of the caller's frame rate.
    pub fn tick(
        &mut self,
        participants: &[String],
        rolling: bool,
        winner: Option<&str>,
        now_ms: f64,
        rng: &mut dyn RandomSource,
    ) {
        if rolling && !participants.is_empty() {
            if now_ms - self.last_flip_ms >= SLOT_TICK_MS {
                self.display = participants[rng.next_index(participants.len())].clone();
                self.last_flip_ms = now_ms;
            }
        } else if let Some(name) = winner {
            self.display = name.to_owned();
        } else {
            self.display = IDLE_TEXT.to_owned();
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/wheel/slot.rs"]
mod tests;
