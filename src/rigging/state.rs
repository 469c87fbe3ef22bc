use std::collections::VecDeque;

/// Scripted-draw state: at most one queue and at most one single-use
/// override, layered ahead of the weighted-random fallback.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct Rigging {
    /// Scripted winners, consumed front-to-back, one per draw. Entries may
    /// be bare display names or exact weighted lines.
    pub queue: VecDeque<String>,
    /// Single-use forced winner, checked after the queue.
    pub override_name: Option<String>,
}

impl Rigging {
    /// True when neither a queue nor an override is set ("fair mode").
    pub fn is_fair(&self) -> bool {
        self.queue.is_empty() && self.override_name.is_none()
    }

    /// Replace the queue with a freshly resolved route.
    pub fn load_queue(&mut self, names: Vec<String>) {
        self.queue = names.into();
    }

    /// Drop any scripted queue, returning to fair mode for queued draws.
    pub fn clear_queue(&mut self) {
        self.queue.clear();
    }

    /// Set or clear the single-use override.
    pub fn set_override(&mut self, name: Option<String>) {
        self.override_name = name;
    }
}
