use std::net::{Shutdown, SocketAddr};

use socket2::SockRef;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::{debug, info};

use crate::error::{ConnectionError, Result};
use crate::report;

/// Payload written to the peer after the initial read.
pub const HANDSHAKE: &[u8] = b"CoWasm";

/// Upper bound on the single read from the peer.
pub const RECV_MAX: usize = 6;

/// One live TCP connection, from establishment until the read half is shut
/// down. At most one of these exists per run.
#[derive(Debug)]
pub struct ConnectionProbe {
    conn: TcpStream,
}

impl ConnectionProbe {
    pub async fn connect(addr: SocketAddr) -> Result<Self> {
        let conn = TcpStream::connect(addr)
            .await
            .map_err(|source| ConnectionError::Connect { addr, source })?;
        info!("connected to {}", addr);
        Ok(Self { conn })
    }

    /// Prints the connection handle between two banner lines.
    pub fn report(&self) {
        println!("{}", report::banner());
        println!("conn = {:?}", self.conn);
        println!("{}", report::banner());
    }

    /// Single bounded read of at most [`RECV_MAX`] bytes. An empty result
    /// means the peer closed; a short read is accepted as-is.
    pub async fn recv(&mut self) -> Result<Vec<u8>> {
        let mut buf = [0u8; RECV_MAX];
        let n = self
            .conn
            .read(&mut buf)
            .await
            .map_err(ConnectionError::Recv)?;
        debug!("received {} bytes", n);
        Ok(buf[..n].to_vec())
    }

    /// Writes the handshake once, returning how many bytes the kernel
    /// accepted. Short writes are reported as-is, not retried.
    pub async fn send(&mut self) -> Result<usize> {
        let n = self
            .conn
            .write(HANDSHAKE)
            .await
            .map_err(ConnectionError::Send)?;
        debug!("sent {} of {} bytes", n, HANDSHAKE.len());
        Ok(n)
    }

    /// Half-closes the inbound direction; the write side stays open.
    pub fn shutdown_read(&self) -> Result<()> {
        SockRef::from(&self.conn)
            .shutdown(Shutdown::Read)
            .map_err(ConnectionError::ShutdownRead)?;
        debug!("read half closed");
        Ok(())
    }
}

/// Runs the full probe sequence against `addr`: connect, report, one bounded
/// read, one fixed write, then read-half shutdown. Every failure is fatal.
pub async fn run(addr: SocketAddr) -> Result<()> {
    let mut probe = ConnectionProbe::connect(addr).await?;
    probe.report();

    let received = probe.recv().await?;
    println!("b\"{}\"", received.escape_ascii());

    let sent = probe.send().await?;
    println!("{}", sent);

    probe.shutdown_read()
}
