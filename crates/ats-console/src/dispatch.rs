//! Transport events and topic routing.
//!
//! The MQTT link forwards [`LinkEvent`]s over a channel; the UI thread drains
//! them one at a time, so every handler runs to completion before the next
//! event is observed. Outbound commands go through the [`CommandSink`] seam
//! so the dashboard core never depends on the MQTT client.

use smol_str::SmolStr;

/// Events delivered by the broker link, in delivery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkEvent {
    /// The transport established a broker session.
    Connected,
    /// The broker session closed.
    Closed,
    /// A transport-level failure. The detail is logged, never displayed.
    Error(SmolStr),
    /// An inbound message on a subscribed topic, payload as text.
    Message { topic: SmolStr, payload: SmolStr },
}

/// Outbound command publisher.
pub trait CommandSink {
    /// Publishes a literal command string ("START" or "STOP") on the
    /// control topic.
    fn publish_command(&mut self, command: &str);
}

/// Handlers a message topic is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopicRoute {
    Voltage,
    Status,
    Backup,
    Alarm,
    GeneratorStatus,
}

/// Resolves the handlers for a topic by substring match, in fixed order.
///
/// Substring semantics mean one topic can hit several handlers: a
/// `generator/status` topic also matches the plain `status` field. That is
/// the device's established contract, not an accident.
#[must_use]
pub fn routes_for(topic: &str) -> Vec<TopicRoute> {
    let mut routes = Vec::new();
    if topic.contains("voltage") {
        routes.push(TopicRoute::Voltage);
    }
    if topic.contains("status") {
        routes.push(TopicRoute::Status);
    }
    if topic.contains("backup") {
        routes.push(TopicRoute::Backup);
    }
    if topic.contains("alarm") {
        routes.push(TopicRoute::Alarm);
    }
    if topic.contains("generator/status") {
        routes.push(TopicRoute::GeneratorStatus);
    }
    routes
}
