//! MQTT broker link.
//!
//! A reader thread drives the rumqttc connection and forwards typed
//! [`LinkEvent`]s over a channel in delivery order; the UI thread is the
//! single consumer. Reconnection is whatever the client's event loop does
//! implicitly; this layer adds no retry policy of its own.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use rumqttc::{Client, Connection, Event, MqttOptions, Packet, QoS, Transport};
use smol_str::SmolStr;
use tracing::{debug, warn};

use crate::config::ConsoleConfig;
use crate::dispatch::{CommandSink, LinkEvent};
use crate::error::ConsoleError;

/// Channel capacity for outbound client requests.
const CLIENT_CHANNEL_CAP: usize = 64;

/// A parsed websocket broker endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrokerEndpoint {
    pub url: SmolStr,
    pub secure: bool,
    pub port: u16,
}

impl BrokerEndpoint {
    /// Parses a ws:// or wss:// URL. Other schemes are rejected.
    pub fn parse(url: &str) -> Result<Self, ConsoleError> {
        let url = url.trim();
        let (secure, rest) = if let Some(rest) = url.strip_prefix("wss://") {
            (true, rest)
        } else if let Some(rest) = url.strip_prefix("ws://") {
            (false, rest)
        } else {
            return Err(ConsoleError::InvalidEndpoint(SmolStr::new(url)));
        };
        let host_port = rest.split('/').next().unwrap_or("");
        if host_port.is_empty() {
            return Err(ConsoleError::InvalidEndpoint(SmolStr::new(url)));
        }
        let port = host_port
            .rsplit_once(':')
            .and_then(|(_, port)| port.parse::<u16>().ok())
            .unwrap_or(if secure { 443 } else { 80 });
        Ok(Self {
            url: SmolStr::new(url),
            secure,
            port,
        })
    }
}

/// Publishes control commands on the configured control topic.
#[derive(Clone)]
pub struct MqttCommandSink {
    client: Client,
    control_topic: String,
}

impl CommandSink for MqttCommandSink {
    fn publish_command(&mut self, command: &str) {
        if let Err(err) = self.client.try_publish(
            &self.control_topic,
            QoS::AtLeastOnce,
            false,
            command.to_string(),
        ) {
            warn!(%err, command, "failed to queue control command");
        }
    }
}

/// Connects to the broker and spawns the reader thread.
///
/// Returns the event channel and the command publisher.
pub fn connect(
    config: &ConsoleConfig,
) -> Result<(Receiver<LinkEvent>, MqttCommandSink), ConsoleError> {
    let endpoint = BrokerEndpoint::parse(&config.broker.url)?;
    let mut options = MqttOptions::new(
        config.broker.client_id.as_str(),
        endpoint.url.as_str(),
        endpoint.port,
    );
    options.set_credentials(
        config.broker.username.as_str(),
        config.broker.password.as_str(),
    );
    options.set_keep_alive(Duration::from_secs(config.broker.keep_alive_secs));
    options.set_transport(if endpoint.secure {
        Transport::wss_with_default_config()
    } else {
        Transport::Ws
    });

    let (client, connection) = Client::new(options, CLIENT_CHANNEL_CAP);
    let (tx, rx) = mpsc::channel();
    let subscriber = client.clone();
    let filter = config.subscribe_filter();
    thread::Builder::new()
        .name("mqtt-link".into())
        .spawn(move || run_link(connection, &subscriber, &filter, &tx))
        .map_err(|err| ConsoleError::Transport(SmolStr::new(err.to_string())))?;

    Ok((
        rx,
        MqttCommandSink {
            client,
            control_topic: config.control_topic(),
        },
    ))
}

fn run_link(
    mut connection: Connection,
    client: &Client,
    filter: &str,
    tx: &Sender<LinkEvent>,
) {
    for event in connection.iter() {
        let forwarded = match event {
            Ok(Event::Incoming(Packet::ConnAck(_))) => {
                debug!(filter, "broker session established, subscribing");
                if let Err(err) = client.try_subscribe(filter, QoS::AtMostOnce) {
                    warn!(%err, "failed to queue subscription");
                }
                tx.send(LinkEvent::Connected)
            }
            Ok(Event::Incoming(Packet::Publish(publish))) => {
                let payload = String::from_utf8_lossy(&publish.payload).into_owned();
                tx.send(LinkEvent::Message {
                    topic: SmolStr::new(&publish.topic),
                    payload: SmolStr::new(payload),
                })
            }
            Ok(Event::Incoming(Packet::Disconnect)) => tx.send(LinkEvent::Closed),
            Ok(_) => continue,
            Err(err) => {
                let sent = tx.send(LinkEvent::Error(SmolStr::new(err.to_string())));
                // Let the event loop settle before it retries the broker.
                thread::sleep(Duration::from_secs(1));
                sent
            }
        };
        if forwarded.is_err() {
            // UI is gone; stop forwarding.
            return;
        }
    }
    let _ = tx.send(LinkEvent::Closed);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_secure_endpoint_with_port_and_path() {
        let endpoint =
            BrokerEndpoint::parse("wss://broker.example.com:8884/mqtt").expect("valid wss url");
        assert!(endpoint.secure);
        assert_eq!(endpoint.port, 8884);
    }

    #[test]
    fn defaults_ports_per_scheme() {
        assert_eq!(
            BrokerEndpoint::parse("wss://broker.example.com/mqtt")
                .expect("wss default")
                .port,
            443
        );
        assert_eq!(
            BrokerEndpoint::parse("ws://broker.example.com/mqtt")
                .expect("ws default")
                .port,
            80
        );
    }

    #[test]
    fn rejects_other_schemes_and_empty_hosts() {
        assert!(BrokerEndpoint::parse("tcp://broker.example.com:1883").is_err());
        assert!(BrokerEndpoint::parse("mqtt://broker.example.com").is_err());
        assert!(BrokerEndpoint::parse("wss:///mqtt").is_err());
    }
}
