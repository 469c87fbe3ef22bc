/// Convenience result type used across the crate.
pub type RaffleResult<T> = Result<T, RaffleError>;

/// Top-level error taxonomy used by session and animation APIs.
#[derive(thiserror::Error, Debug)]
pub enum RaffleError {
    /// Invalid rigging configuration (route text, queue contents).
    #[error("rigging error: {0}")]
    Rigging(String),

    /// A route referenced participant ids that do not exist. The whole
    /// load is rejected; nothing is queued.
    #[error("route '{label}' references missing participant ids {missing:?}")]
    RouteReference {
        /// Label of the rejected route.
        label: String,
        /// The 1-based ids with no matching participant, in route order.
        missing: Vec<usize>,
    },

    /// Errors while planning or sampling the spin animation. Planning a
    /// spin for a winner absent from the segment list lands here; it
    /// signals resolver/animator desync and callers must propagate it.
    #[error("animation error: {0}")]
    Animation(String),

    /// Errors when serializing or deserializing persisted session blobs.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RaffleError {
    /// Build a [`RaffleError::Rigging`] value.
    pub fn rigging(msg: impl Into<String>) -> Self {
        Self::Rigging(msg.into())
    }

    /// Build a [`RaffleError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`RaffleError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}
