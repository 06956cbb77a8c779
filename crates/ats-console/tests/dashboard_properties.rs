use std::time::{Duration, Instant};

use ats_console::dashboard::{
    AlarmState, ConnState, Dashboard, GenState, NotifyKind, Severity,
};
use ats_console::dispatch::{CommandSink, LinkEvent};
use ats_console::i18n::Language;

#[derive(Default)]
struct RecordingSink {
    commands: Vec<String>,
}

impl CommandSink for RecordingSink {
    fn publish_command(&mut self, command: &str) {
        self.commands.push(command.to_string());
    }
}

fn message(topic: &str, payload: &str) -> LinkEvent {
    LinkEvent::Message {
        topic: topic.into(),
        payload: payload.into(),
    }
}

fn online_dashboard(now: Instant) -> Dashboard {
    let mut dashboard = Dashboard::new(Language::En);
    dashboard.handle_link_event(LinkEvent::Connected, now);
    dashboard
}

#[test]
fn voltage_message_sets_text_severity_and_pulse() {
    let now = Instant::now();
    let mut dashboard = online_dashboard(now);

    dashboard.handle_link_event(message("ats/home1/voltage", "195.5"), now);
    assert_eq!(dashboard.voltage_text, "195.5 V");
    assert_eq!(dashboard.voltage_severity, Some(Severity::Warn));
    assert!(dashboard.voltage_pulse_until.is_some());
    assert_eq!(dashboard.connection, ConnState::Online);

    dashboard.tick(now + Duration::from_millis(1100));
    assert!(dashboard.voltage_pulse_until.is_some());
    dashboard.tick(now + Duration::from_millis(1200));
    assert!(dashboard.voltage_pulse_until.is_none());
}

#[test]
fn garbled_voltage_shows_verbatim_and_reads_ok() {
    let now = Instant::now();
    let mut dashboard = online_dashboard(now);
    dashboard.handle_link_event(message("ats/home1/voltage", "ERR"), now);
    assert_eq!(dashboard.voltage_text, "ERR V");
    assert_eq!(dashboard.voltage_severity, Some(Severity::Ok));
}

#[test]
fn toggle_publishes_without_changing_belief() {
    let now = Instant::now();
    let mut dashboard = online_dashboard(now);
    let mut sink = RecordingSink::default();

    dashboard.toggle_generator(&mut sink, now);
    assert_eq!(sink.commands, ["START"]);
    assert_eq!(dashboard.generator, GenState::Stopped);
    assert_eq!(dashboard.generator_button_label, "Start Generator");
    let note = dashboard.notification.as_ref().expect("sending notice");
    assert_eq!(note.kind, NotifyKind::Info);

    // Only the device report flips the belief.
    dashboard.handle_link_event(message("ats/home1/generator/status", "RUNNING"), now);
    assert_eq!(dashboard.generator, GenState::Running);
    assert_eq!(dashboard.generator_button_label, "Stop Generator");
    assert_eq!(dashboard.generator_status_label, "Status: Running");
    let note = dashboard.notification.as_ref().expect("running notice");
    assert_eq!(note.kind, NotifyKind::Success);

    // The generator topic also carries the substring "status", so the
    // source field picks up the raw payload too.
    assert_eq!(dashboard.source_text, "RUNNING");

    dashboard.toggle_generator(&mut sink, now);
    assert_eq!(sink.commands, ["START", "STOP"]);
    assert_eq!(dashboard.generator, GenState::Running);
}

#[test]
fn double_toggle_without_confirmation_repeats_the_same_command() {
    let now = Instant::now();
    let mut dashboard = online_dashboard(now);
    let mut sink = RecordingSink::default();

    // Each toggle reads the same unconfirmed belief, so the command repeats.
    dashboard.toggle_generator(&mut sink, now);
    dashboard.toggle_generator(&mut sink, now);
    assert_eq!(sink.commands, ["START", "START"]);
    assert_eq!(dashboard.generator, GenState::Stopped);
}

#[test]
fn stopped_report_notifies_in_error_tone() {
    let now = Instant::now();
    let mut dashboard = online_dashboard(now);
    dashboard.handle_link_event(message("ats/home1/generator/status", "RUNNING"), now);
    dashboard.handle_link_event(message("ats/home1/generator/status", "stopped"), now);

    assert_eq!(dashboard.generator, GenState::Stopped);
    let note = dashboard.notification.as_ref().expect("stopped notice");
    assert_eq!(note.kind, NotifyKind::Error);
    assert_eq!(note.text, "🛑 Generator is now STOPPED.");
}

#[test]
fn unexpected_report_keeps_belief_and_shows_raw_text() {
    let now = Instant::now();
    let mut dashboard = online_dashboard(now);
    dashboard.handle_link_event(message("ats/home1/generator/status", "MAYBE"), now);

    assert_eq!(dashboard.generator, GenState::Stopped);
    assert_eq!(dashboard.generator_status_label, "Status: MAYBE");
    assert_eq!(dashboard.generator_button_label, "Start Generator");
    let note = dashboard.notification.as_ref().expect("unexpected notice");
    assert_eq!(note.kind, NotifyKind::Info);
    assert_eq!(note.text, "⚠️ Unexpected Generator Status: MAYBE");
}

#[test]
fn alarm_matches_the_uppercase_fault_substring_only() {
    let now = Instant::now();
    let mut dashboard = online_dashboard(now);

    dashboard.handle_link_event(message("ats/home1/alarm", "FAULT: overload"), now);
    assert_eq!(dashboard.alarm, AlarmState::Fault);
    assert_eq!(dashboard.alarm_label, "🚨 ACTIVE FAULT");

    dashboard.handle_link_event(message("ats/home1/alarm", "fault cleared"), now);
    assert_eq!(dashboard.alarm, AlarmState::Ok);
    assert_eq!(dashboard.alarm_label, "None");
}

#[test]
fn notifications_expire_after_three_seconds() {
    let now = Instant::now();
    let mut dashboard = online_dashboard(now);
    let mut sink = RecordingSink::default();
    dashboard.toggle_generator(&mut sink, now);

    dashboard.tick(now + Duration::from_millis(2900));
    assert!(dashboard.notification.is_some());
    dashboard.tick(now + Duration::from_secs(3));
    assert!(dashboard.notification.is_none());
}

#[test]
fn connection_follows_link_events_and_traffic_promotes() {
    let now = Instant::now();
    let mut dashboard = Dashboard::new(Language::En);
    assert_eq!(dashboard.connection, ConnState::Connecting);
    assert_eq!(dashboard.connection_label, "Connecting...");

    dashboard.handle_link_event(LinkEvent::Connected, now);
    assert_eq!(dashboard.connection, ConnState::Connected);

    dashboard.handle_link_event(message("ats/home1/voltage", "230"), now);
    assert_eq!(dashboard.connection, ConnState::Online);

    // No idle timeout demotes Online; only close or error moves it.
    dashboard.tick(now + Duration::from_secs(600));
    assert_eq!(dashboard.connection, ConnState::Online);

    dashboard.handle_link_event(LinkEvent::Closed, now);
    assert_eq!(dashboard.connection, ConnState::Lost);

    dashboard.handle_link_event(LinkEvent::Error("socket reset".into()), now);
    assert_eq!(dashboard.connection, ConnState::Error);
}

#[test]
fn language_toggle_reprojects_labels_but_not_the_timestamp() {
    let now = Instant::now();
    let mut dashboard = online_dashboard(now);
    dashboard.handle_link_event(message("ats/home1/voltage", "230"), now);
    let stamped = dashboard.last_update_label.clone();
    assert!(stamped.starts_with("Last update"));

    dashboard.set_language(Language::Km);
    assert_eq!(dashboard.generator_button_label, "ចាប់ផ្តើមម៉ាស៊ីនភ្លើង");
    assert_eq!(dashboard.connection_label, "🟢 លើបណ្តាញ");
    assert_eq!(dashboard.alarm_label, "គ្មាន");
    // The timestamp line keeps its old language until the next message.
    assert_eq!(dashboard.last_update_label, stamped);
}

#[test]
fn login_gates_the_dashboard_behind_the_fixed_account() {
    let now = Instant::now();
    let mut dashboard = Dashboard::new(Language::En);

    assert!(!dashboard.login("Rith", "wrong", now));
    assert!(!dashboard.authenticated);
    let (message, kind) = dashboard.login_message.clone().expect("login error");
    assert_eq!(message, "❌ Invalid Username or Password");
    assert_eq!(kind, NotifyKind::Error);

    assert!(dashboard.login("Rith", "1234", now));
    assert!(dashboard.authenticated);
    assert_eq!(dashboard.user_line, "User ID: Rith");
    assert!(dashboard.login_message.is_none());
    // Login replays the belief state as a report, so the STOPPED notice
    // fires immediately.
    assert_eq!(dashboard.generator_status_label, "Status: Stopped");
    let note = dashboard.notification.as_ref().expect("initial projection");
    assert_eq!(note.kind, NotifyKind::Error);
}
