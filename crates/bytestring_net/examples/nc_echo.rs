// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! A tiny echo server. Point `nc localhost 4444` at it and type away.

use bytestring::ByteString;
use bytestring_net::TcpServer;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::TRACE).init();

    let server = TcpServer::bind(4444)?;
    println!("listening on {}", server.local_addr()?);

    loop {
        let mut client = server.next_client()?;

        loop {
            let chunk = client.recv(4096)?;
            if chunk.is_empty() {
                break;
            }

            let mut reply = ByteString::from_text("echo: ");
            reply.put_string(&chunk);
            client.send(&reply)?;
        }
    }
}
