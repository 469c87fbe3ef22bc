use std::collections::BTreeMap;

use crate::{
    foundation::error::{RaffleError, RaffleResult},
    session::state::RaffleSession,
};

/// Fixed key under which the participant blob is stored.
pub const PARTICIPANTS_KEY: &str = "rafflewheel/participants";
/// Fixed key under which the routes text blob is stored.
pub const ROUTES_KEY: &str = "rafflewheel/routes";

/// Key-value persistence seam the embedder provides (browser local
/// storage, a file, ...). Values are opaque strings; the crate owns their
/// encoding.
pub trait SessionStore {
    /// Load the value stored under `key`, if any.
    fn load(&self, key: &str) -> Option<String>;
    /// Store `value` under `key`, replacing any previous value.
    fn save(&mut self, key: &str, value: &str);
}

/// In-memory [`SessionStore`] for embedders and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl SessionStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_owned(), value.to_owned());
    }
}

/// Encode raw participant lines as the persisted JSON array blob.
pub fn encode_participants(lines: &[String]) -> RaffleResult<String> {
    serde_json::to_string(lines).map_err(|e| RaffleError::serde(e.to_string()))
}

/// Decode a persisted participant blob back into raw lines.
pub fn decode_participants(raw: &str) -> RaffleResult<Vec<String>> {
    serde_json::from_str(raw).map_err(|e| RaffleError::serde(e.to_string()))
}

/// Build a session from whatever the store holds; empty when nothing was
/// saved. A corrupt blob is an error rather than a silent empty session.
pub fn load_session(store: &dyn SessionStore) -> RaffleResult<RaffleSession> {
    match store.load(PARTICIPANTS_KEY) {
        Some(raw) => Ok(RaffleSession::from_saved_lines(&decode_participants(&raw)?)),
        None => Ok(RaffleSession::new()),
    }
}

/// Persist the current participant list. Callers invoke this after every
/// whole-list replacement.
pub fn save_participants(
    store: &mut dyn SessionStore,
    session: &RaffleSession,
) -> RaffleResult<()> {
    let blob = encode_participants(session.participants())?;
    store.save(PARTICIPANTS_KEY, &blob);
    Ok(())
}

/// Persist the raw routes text block as typed by the user.
pub fn save_routes_text(store: &mut dyn SessionStore, text: &str) {
    store.save(ROUTES_KEY, text);
}

/// Load the raw routes text block, if any was saved.
pub fn load_routes_text(store: &dyn SessionStore) -> Option<String> {
    store.load(ROUTES_KEY)
}

#[cfg(test)]
#[path = "../../tests/unit/session/persist.rs"]
mod tests;
