// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::net::{Ipv4Addr, SocketAddr, TcpListener};

use tracing::{Level, event};

use crate::channel::TcpChannel;
use crate::error::Result;

/// A listening TCP socket that hands out one [`TcpChannel`] per accepted client.
///
/// # Example
///
/// ```no_run
/// use bytestring_net::TcpServer;
///
/// let server = TcpServer::bind(4444)?;
///
/// loop {
///     let mut client = server.next_client()?;
///     let request = client.recv(1024)?;
///     client.send(&request)?; // echo
/// }
/// # Ok::<(), bytestring_net::Error>(())
/// ```
#[derive(Debug)]
pub struct TcpServer {
    listener: TcpListener,
}

impl TcpServer {
    /// Starts listening on `port` on all interfaces.
    ///
    /// Pass port 0 to let the operating system pick a free port; the chosen one is
    /// available from [`local_addr()`][Self::local_addr].
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised while binding or listening.
    pub fn bind(port: u16) -> Result<Self> {
        let listener = TcpListener::bind((Ipv4Addr::UNSPECIFIED, port))?;

        event!(Level::DEBUG, message = "listening", local = %listener.local_addr()?);

        Ok(Self { listener })
    }

    /// The local address the server is listening on.
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised while querying the socket.
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Blocks until the next client connects, returning a channel to it.
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised while accepting.
    pub fn next_client(&self) -> Result<TcpChannel> {
        let (stream, peer) = self.listener.accept()?;

        event!(Level::DEBUG, message = "accepted", %peer);

        Ok(TcpChannel::from_parts(stream, peer))
    }
}
