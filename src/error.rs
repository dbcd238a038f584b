use std::io;
use std::net::SocketAddr;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConnectionError>;

/// The single error kind for every network operation the probe performs.
///
/// Nothing here is caught or retried; each variant propagates straight to
/// the process boundary and terminates the run with a diagnostic.
#[derive(Debug, Error)]
pub enum ConnectionError {
    #[error("could not resolve {host:?}: {source}")]
    Resolve {
        host: String,
        #[source]
        source: io::Error,
    },

    #[error("connect to {addr} failed: {source}")]
    Connect {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("recv failed: {0}")]
    Recv(#[source] io::Error),

    #[error("send failed: {0}")]
    Send(#[source] io::Error),

    #[error("read shutdown failed: {0}")]
    ShutdownRead(#[source] io::Error),
}
