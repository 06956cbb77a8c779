use super::*;

/// Belief about the physical generator's run state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenState {
    #[default]
    Stopped,
    Running,
}

impl GenState {
    /// The canonical device-report form of this state.
    #[must_use]
    pub fn report(self) -> &'static str {
        match self {
            Self::Stopped => "STOPPED",
            Self::Running => "RUNNING",
        }
    }
}

/// Cosmetic flavor of the button pulse played when a command is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenPulse {
    Start,
    Stop,
}

impl Dashboard {
    /// Publishes the command opposing the current belief state.
    ///
    /// The belief itself is left untouched on purpose: the display keeps
    /// showing the old state until the device confirms through
    /// [`Dashboard::update_generator_status`]. The button pulse is cosmetic
    /// and self-clears.
    pub fn toggle_generator(&mut self, sink: &mut dyn CommandSink, now: Instant) {
        let (command, key, pulse) = match self.generator {
            GenState::Stopped => ("START", LabelKey::GenSendingStart, GenPulse::Start),
            GenState::Running => ("STOP", LabelKey::GenSendingStop, GenPulse::Stop),
        };
        if let Some(text) = label_text(key, self.language) {
            self.notify(text.to_string(), NotifyKind::Info, now);
        }
        sink.publish_command(command);
        self.button_pulse = Some((pulse, now + PULSE_DURATION));
    }

    /// Reconciles the belief state with a device report.
    ///
    /// Exactly two normalized values are recognized; anything else shows
    /// verbatim and never corrupts the tracked belief.
    pub fn update_generator_status(&mut self, raw: &str, now: Instant) {
        let normalized = raw.trim().to_uppercase();
        match normalized.as_str() {
            "RUNNING" => {
                self.generator = GenState::Running;
                self.project_generator();
                if let Some(text) = label_text(LabelKey::GenNowRunning, self.language) {
                    self.notify(text.to_string(), NotifyKind::Success, now);
                }
            }
            "STOPPED" => {
                self.generator = GenState::Stopped;
                self.project_generator();
                // Error-styled on purpose: a stopped generator is the state
                // operators need to notice.
                if let Some(text) = label_text(LabelKey::GenNowStopped, self.language) {
                    self.notify(text.to_string(), NotifyKind::Error, now);
                }
            }
            _ => {
                if let Some(prefix) = label_text(LabelKey::GenStatusPrefix, self.language) {
                    self.generator_status_label = format!("{prefix}{raw}");
                }
                if let Some(prefix) =
                    label_text(LabelKey::GenUnexpectedPrefix, self.language)
                {
                    self.notify(format!("{prefix}{raw}"), NotifyKind::Info, now);
                }
            }
        }
    }

    /// Pure projection of the belief state into button and status labels.
    pub(super) fn project_generator(&mut self) {
        let (button, status) = match self.generator {
            GenState::Running => (LabelKey::BtnStop, LabelKey::GenStatusRunning),
            GenState::Stopped => (LabelKey::BtnStart, LabelKey::GenStatusStopped),
        };
        render_label(&mut self.generator_button_label, button, self.language);
        render_label(&mut self.generator_status_label, status, self.language);
    }
}
