use super::*;

/// Binary alarm state; there is no third tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlarmState {
    #[default]
    Ok,
    Fault,
}

impl Dashboard {
    /// Classifies a raw alarm report. Case-sensitive substring match: the
    /// device always reports faults in upper case.
    pub fn set_alarm(&mut self, raw: &str) {
        self.alarm = if raw.contains("FAULT") {
            AlarmState::Fault
        } else {
            AlarmState::Ok
        };
        self.project_alarm();
    }

    pub(super) fn project_alarm(&mut self) {
        let key = match self.alarm {
            AlarmState::Fault => LabelKey::AlarmFault,
            AlarmState::Ok => LabelKey::AlarmNone,
        };
        render_label(&mut self.alarm_label, key, self.language);
    }
}
