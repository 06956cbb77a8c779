//! Dashboard state and the handlers that mutate it.
//!
//! One [`Dashboard`] instance owns every piece of mutable display state:
//! language, connection state, generator belief state, telemetry text,
//! alarm state and the session gate. Only the UI thread touches it, one
//! transport event or key press at a time.

use std::time::{Duration, Instant};

use tracing::warn;

use crate::dispatch::{routes_for, CommandSink, LinkEvent, TopicRoute};
use crate::i18n::{label_text, LabelKey, Language};

mod alarm;
mod connection;
mod generator;
mod session;
mod telemetry;

pub use alarm::AlarmState;
pub use connection::ConnState;
pub use generator::{GenPulse, GenState};
pub use telemetry::{classify_voltage, Severity};

/// Card highlight duration after a fresh reading.
pub const PULSE_DURATION: Duration = Duration::from_millis(1200);
/// Notification bar auto-dismiss delay.
pub const NOTIFICATION_DURATION: Duration = Duration::from_secs(3);

/// Visual tone of a notification or login message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyKind {
    Info,
    Success,
    Error,
}

/// A transient notification-bar entry.
#[derive(Debug, Clone)]
pub struct Notification {
    pub text: String,
    pub kind: NotifyKind,
    pub until: Instant,
}

/// The whole of the console's mutable display state.
#[derive(Debug)]
pub struct Dashboard {
    pub language: Language,

    pub connection: ConnState,
    pub connection_label: String,

    /// Belief about the physical device, confirmed reports only.
    pub generator: GenState,
    pub generator_button_label: String,
    pub generator_status_label: String,
    pub button_pulse: Option<(GenPulse, Instant)>,

    pub voltage_text: String,
    pub voltage_severity: Option<Severity>,
    pub voltage_pulse_until: Option<Instant>,
    pub source_text: String,
    pub backup_text: String,

    pub alarm: AlarmState,
    pub alarm_label: String,

    pub last_update_label: String,

    pub authenticated: bool,
    pub user_line: String,
    pub login_message: Option<(String, NotifyKind)>,

    pub notification: Option<Notification>,
}

impl Dashboard {
    #[must_use]
    pub fn new(language: Language) -> Self {
        let mut dashboard = Self {
            language,
            connection: ConnState::Connecting,
            connection_label: String::new(),
            generator: GenState::Stopped,
            generator_button_label: String::new(),
            generator_status_label: String::new(),
            button_pulse: None,
            voltage_text: String::new(),
            voltage_severity: None,
            voltage_pulse_until: None,
            source_text: String::new(),
            backup_text: String::new(),
            alarm: AlarmState::Ok,
            alarm_label: String::new(),
            last_update_label: String::new(),
            authenticated: false,
            user_line: String::new(),
            login_message: None,
            notification: None,
        };
        dashboard.set_conn_state(ConnState::Connecting);
        dashboard.project_generator();
        dashboard.project_alarm();
        dashboard
    }

    /// Switches the display language and re-renders every projected label.
    ///
    /// A pure projection: no tracked state changes. The last-update line is
    /// deliberately left alone; it picks up the new language on the next
    /// inbound message, as the device dashboard always has.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        self.set_conn_state(self.connection);
        self.project_generator();
        self.project_alarm();
    }

    /// Applies one transport event, running its handlers to completion.
    pub fn handle_link_event(&mut self, event: LinkEvent, now: Instant) {
        match event {
            LinkEvent::Connected => self.set_conn_state(ConnState::Connected),
            LinkEvent::Closed => self.set_conn_state(ConnState::Lost),
            LinkEvent::Error(detail) => {
                warn!(%detail, "mqtt transport error");
                self.set_conn_state(ConnState::Error);
            }
            LinkEvent::Message { topic, payload } => {
                for route in routes_for(&topic) {
                    match route {
                        TopicRoute::Voltage => self.apply_voltage(&payload, now),
                        TopicRoute::Status => self.apply_status(&payload),
                        TopicRoute::Backup => self.apply_backup(&payload),
                        TopicRoute::Alarm => self.set_alarm(&payload),
                        TopicRoute::GeneratorStatus => {
                            self.update_generator_status(&payload, now);
                        }
                    }
                }
                self.mark_traffic();
                self.refresh_last_update();
            }
        }
    }

    /// Shows a notification, replacing any pending one. The newest deadline
    /// always wins; rapid triggers truncate earlier ones harmlessly.
    pub fn notify(&mut self, text: String, kind: NotifyKind, now: Instant) {
        self.notification = Some(Notification {
            text,
            kind,
            until: now + NOTIFICATION_DURATION,
        });
    }

    /// Expires fire-and-forget timers. Called once per frame.
    pub fn tick(&mut self, now: Instant) {
        if self.notification.as_ref().is_some_and(|note| now >= note.until) {
            self.notification = None;
        }
        if self.voltage_pulse_until.is_some_and(|until| now >= until) {
            self.voltage_pulse_until = None;
        }
        if self.button_pulse.is_some_and(|(_, until)| now >= until) {
            self.button_pulse = None;
        }
    }

    fn refresh_last_update(&mut self) {
        if let Some(prefix) = label_text(LabelKey::LastUpdatePrefix, self.language) {
            self.last_update_label = format!("{prefix}: {}", local_time_text());
        }
    }
}

/// Writes the label text for `key` into `slot`, keeping the previous text
/// when the active language has no mapping.
fn render_label(slot: &mut String, key: LabelKey, language: Language) {
    if let Some(text) = label_text(key, language) {
        slot.clear();
        slot.push_str(text);
    }
}

fn local_time_text() -> String {
    let now = time::OffsetDateTime::now_local()
        .unwrap_or_else(|_| time::OffsetDateTime::now_utc());
    format!("{:02}:{:02}:{:02}", now.hour(), now.minute(), now.second())
}
