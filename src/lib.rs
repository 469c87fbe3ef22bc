//! Rafflewheel is the deterministic core of a raffle / prize-wheel widget.
//!
//! It turns a free-text block of weighted participant lines into a draw
//! with an animated reveal, keeping the hard invariant that the animation
//! always lands on the logically selected winner.
//!
//! # Draw pipeline
//!
//! 1. **Parse**: raw lines -> [`ParticipantEntry`] -> [`Segment`] view
//! 2. **Resolve**: scripted queue -> single override -> weighted random
//!    ([`resolve_winner`]), eagerly, before any animation starts
//! 3. **Plan**: [`plan_spin`] computes an eased multi-turn rotation that
//!    lands the precommitted winner under the fixed pointer
//! 4. **Sample**: [`SpinPlan::sample`] is driven once per display tick
//!    until done, then the winner is finalized into history
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: the resolver and the animator take an
//!   injected [`RandomSource`], so seeded runs reproduce exactly.
//! - **No IO in the core**: persistence and rendering are collaborator
//!   seams ([`SessionStore`], [`ViewState`] / [`SessionEvent`]).
//! - **Single-threaded, frame-driven**: one [`RaffleSession`] owner, one
//!   `tick` per display refresh, no locking.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod entries;
mod foundation;
mod fx;
mod rigging;
mod session;
mod wheel;

pub use entries::parser::{ParticipantEntry, parse_entries, parse_line};
pub use entries::segment::{Segment, build_segments, total_weight};
pub use foundation::error::{RaffleError, RaffleResult};
pub use foundation::rng::{RandomSource, SplitMix64};
pub use fx::particles::{FireworkField, Particle};
pub use rigging::routes::{Route, parse_routes, resolve_route};
pub use rigging::state::Rigging;
pub use session::persist::{
    MemoryStore, PARTICIPANTS_KEY, ROUTES_KEY, SessionStore, decode_participants,
    encode_participants, load_routes_text, load_session, save_participants, save_routes_text,
};
pub use session::resolver::{Resolution, ResolutionTier, resolve_winner};
pub use session::state::{RaffleSession, SessionEvent, ViewState};
pub use wheel::ease::Ease;
pub use wheel::geometry::{Arc, POINTER_ANGLE_DEG, arc_for_winner, segment_arcs};
pub use wheel::slot::{IDLE_TEXT, SLOT_TICK_MS, SlotRoll};
pub use wheel::spin::{
    DURATION_MAX_MS, DURATION_MIN_MS, MIN_FULL_TURNS, SpinPlan, SpinSample, plan_spin,
};
