use std::io;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use tokio::net::lookup_host;

use crate::error::{ConnectionError, Result};

/// Turns a host string and port into one concrete address.
///
/// An empty host selects the IPv4 loopback address. IP literals are used
/// directly; anything else goes through the system resolver, first result
/// wins.
pub async fn resolve_target(host: &str, port: u16) -> Result<SocketAddr> {
    if host.is_empty() {
        return Ok(SocketAddr::from((Ipv4Addr::LOCALHOST, port)));
    }

    if let Ok(ip) = host.parse::<IpAddr>() {
        return Ok(SocketAddr::from((ip, port)));
    }

    let mut addrs = lookup_host((host, port))
        .await
        .map_err(|source| ConnectionError::Resolve {
            host: host.to_string(),
            source,
        })?;
    addrs.next().ok_or_else(|| ConnectionError::Resolve {
        host: host.to_string(),
        source: io::Error::new(io::ErrorKind::AddrNotAvailable, "lookup returned no addresses"),
    })
}
