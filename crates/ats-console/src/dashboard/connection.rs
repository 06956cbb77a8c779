use super::*;

/// Transport health as displayed to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnState {
    /// Initial state, set before any transport event fires.
    #[default]
    Connecting,
    /// Broker session established.
    Connected,
    /// Session established and telemetry is flowing.
    Online,
    /// Session closed.
    Lost,
    /// Transport-level failure.
    Error,
}

impl ConnState {
    pub(super) fn label_key(self) -> LabelKey {
        match self {
            Self::Connecting => LabelKey::ConnConnecting,
            Self::Connected => LabelKey::ConnConnected,
            Self::Online => LabelKey::ConnOnline,
            Self::Lost => LabelKey::ConnLost,
            Self::Error => LabelKey::ConnError,
        }
    }
}

impl Dashboard {
    /// Sets the connection state and re-renders its label.
    ///
    /// No transition is validated; callers own the rules and any state may
    /// follow any other.
    pub fn set_conn_state(&mut self, state: ConnState) {
        self.connection = state;
        render_label(&mut self.connection_label, state.label_key(), self.language);
    }

    /// Inbound traffic acts as a liveness heartbeat.
    ///
    /// Nothing demotes `Online` when traffic stops; only a close or error
    /// event moves the state away from it.
    pub(super) fn mark_traffic(&mut self) {
        if matches!(self.connection, ConnState::Connected | ConnState::Online) {
            self.set_conn_state(ConnState::Online);
        }
    }
}
