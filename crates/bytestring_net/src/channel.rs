// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::io::{Read, Write};
use std::net::{Shutdown, SocketAddr, TcpStream, ToSocketAddrs};

use bytestring::ByteString;
use tracing::{Level, event};

use crate::error::{Error, Result};

/// One established TCP connection that sends and receives [`ByteString`] payloads.
///
/// A channel is obtained by [`connect()`][Self::connect]ing to a remote host or by
/// accepting a client on a [`TcpServer`][crate::TcpServer]. The underlying socket is
/// closed when the channel is dropped.
///
/// # Example
///
/// ```no_run
/// use bytestring::ByteString;
/// use bytestring_net::TcpChannel;
///
/// let mut channel = TcpChannel::connect("localhost", 4444)?;
///
/// channel.send(&ByteString::from_text("ping"))?;
/// let reply = channel.recv(1024)?;
/// # Ok::<(), bytestring_net::Error>(())
/// ```
#[derive(Debug)]
pub struct TcpChannel {
    stream: TcpStream,
    peer: SocketAddr,
}

impl TcpChannel {
    /// Connects to `host` on `port`.
    ///
    /// The host may be a name or a literal address. When it resolves to several
    /// addresses, each is tried in turn until a connection succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Resolve`] if the host does not resolve to any address, and the
    /// last connection error if every resolved address refused us.
    pub fn connect(host: &str, port: u16) -> Result<Self> {
        let addresses = (host, port).to_socket_addrs().map_err(|_| Error::Resolve {
            host: host.to_string(),
        })?;

        let mut last_error = None;

        for address in addresses {
            match TcpStream::connect(address) {
                Ok(stream) => {
                    event!(Level::DEBUG, message = "connected", host, %address);

                    return Ok(Self {
                        stream,
                        peer: address,
                    });
                }
                Err(error) => {
                    event!(Level::DEBUG, message = "connect attempt failed", %address, %error);

                    last_error = Some(error);
                }
            }
        }

        // An empty resolution result is legal per `ToSocketAddrs`, so the loop may
        // never have produced an error to report.
        Err(last_error.map_or_else(
            || Error::Resolve {
                host: host.to_string(),
            },
            Error::Io,
        ))
    }

    /// Wraps an already-established stream. Used by the server side after `accept`.
    pub(crate) fn from_parts(stream: TcpStream, peer: SocketAddr) -> Self {
        Self { stream, peer }
    }

    /// The address of the remote end of the connection.
    #[must_use]
    pub fn peer_addr(&self) -> SocketAddr {
        self.peer
    }

    /// Sends the entire content of `payload` to the peer, returning the number of
    /// bytes written.
    ///
    /// Short writes are retried internally until everything is on the wire, so the
    /// return value always equals `payload.len()` on success.
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised while writing.
    pub fn send(&mut self, payload: &ByteString) -> Result<usize> {
        self.stream.write_all(payload.as_bytes())?;

        event!(Level::TRACE, message = "sent", peer = %self.peer, len = payload.len());

        Ok(payload.len())
    }

    /// Receives up to `max_len` bytes from the peer into a fresh [`ByteString`].
    ///
    /// This performs a single read, so the returned string may be shorter than
    /// `max_len`. An empty string means the peer closed its sending side.
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised while reading.
    pub fn recv(&mut self, max_len: usize) -> Result<ByteString> {
        let mut buf = vec![0_u8; max_len];
        let received = self.stream.read(&mut buf)?;

        event!(Level::TRACE, message = "received", peer = %self.peer, len = received);

        Ok(ByteString::copied_from_slice(&buf[..received]))
    }

    /// Shuts down both directions of the connection, letting the peer observe a
    /// graceful end of stream. The socket itself is released when the channel is
    /// dropped.
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised while shutting down.
    pub fn shutdown(&mut self) -> Result<()> {
        self.stream.shutdown(Shutdown::Both)?;

        event!(Level::DEBUG, message = "shut down", peer = %self.peer);

        Ok(())
    }
}
