//! Console errors.

use smol_str::SmolStr;
use thiserror::Error;

/// Errors raised while loading configuration or talking to the broker.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsoleError {
    /// Invalid console.toml content.
    #[error("invalid config: {0}")]
    InvalidConfig(SmolStr),

    /// Broker endpoint could not be parsed.
    #[error("invalid broker endpoint '{0}'")]
    InvalidEndpoint(SmolStr),

    /// Transport-level failure surfaced by the MQTT client.
    #[error("transport error: {0}")]
    Transport(SmolStr),

    /// Filesystem failure while reading configuration.
    #[error("i/o error: {0}")]
    Io(SmolStr),
}

impl From<std::io::Error> for ConsoleError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(SmolStr::new(err.to_string()))
    }
}
