// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Blocking TCP channels that speak [`ByteString`][bytestring::ByteString].
//!
//! Two types cover the whole surface: [`TcpChannel`] is one established connection,
//! obtained either by connecting out or by accepting on a [`TcpServer`]. Payloads go
//! over the wire as `ByteString` values, so the rest of the toolkit never touches raw
//! buffers when talking to a peer.
//!
//! ```no_run
//! use bytestring::ByteString;
//! use bytestring_net::TcpChannel;
//!
//! let mut channel = TcpChannel::connect("example.com", 80)?;
//!
//! channel.send(&ByteString::from_text("GET / HTTP/1.0\r\n\r\n"))?;
//! let response = channel.recv(4096)?;
//!
//! response.print()?;
//! # Ok::<(), bytestring_net::Error>(())
//! ```
//!
//! Connections close when dropped; call [`TcpChannel::shutdown()`] first for a
//! graceful two-way goodbye.

mod channel;
mod error;
mod server;

pub use channel::TcpChannel;
pub use error::{Error, Result};
pub use server::TcpServer;
