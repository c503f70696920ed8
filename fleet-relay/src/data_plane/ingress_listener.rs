/********************************************************************************
 * Copyright (c) 2026 Contributors to the Eclipse Foundation
 *
 * See the NOTICE file(s) distributed with this work for additional
 * information regarding copyright ownership.
 *
 * This program and the accompanying materials are made available under the
 * terms of the Apache License Version 2.0 which is available at
 * https://www.apache.org/licenses/LICENSE-2.0
 *
 * SPDX-License-Identifier: Apache-2.0
 ********************************************************************************/

//! Ingress listener: owns the receive socket and feeds datagrams to the relay.

use crate::codec::MAX_DATAGRAM_SIZE;
use crate::error::RelayError;
use crate::observability::events;
use crate::relay::FleetRelay;
use std::io;
use std::net::SocketAddr;
use tokio::net::{lookup_host, UdpSocket};
use tracing::{info, warn};

const COMPONENT: &str = "ingress_listener";

pub struct IngressListener {
    socket: UdpSocket,
    local_addr: SocketAddr,
}

impl IngressListener {
    /// Resolves `address` (`host:port`) and binds to the first address it yields.
    pub async fn bind(address: &str) -> Result<Self, RelayError> {
        let resolved = lookup_host(address)
            .await
            .map_err(|source| RelayError::Resolve {
                address: address.to_string(),
                source,
            })?
            .next()
            .ok_or_else(|| RelayError::NoAddress {
                address: address.to_string(),
            })?;

        let socket = UdpSocket::bind(resolved)
            .await
            .map_err(|source| RelayError::Bind {
                address: resolved,
                source,
            })?;
        let local_addr = socket.local_addr()?;

        info!(
            event = events::INGRESS_LISTENING,
            component = COMPONENT,
            requested = address,
            local_addr = %local_addr,
            "listening for fleet datagrams"
        );

        Ok(Self { socket, local_addr })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Waits for one datagram. Anything past `buffer.len()` bytes is discarded by the OS.
    pub async fn receive(&self, buffer: &mut [u8]) -> io::Result<(SocketAddr, usize)> {
        let (len, source) = self.socket.recv_from(buffer).await?;
        Ok((source, len))
    }

    /// Receives and handles datagrams one at a time, forever.
    ///
    /// The next datagram is read only after the previous one is handled, so a full
    /// dispatch queue holds back ingestion. Receive errors are logged and the loop moves on to the next datagram.
    pub async fn run(&self, relay: &mut FleetRelay) {
        let mut buffer = [0u8; MAX_DATAGRAM_SIZE];

        loop {
            match self.receive(&mut buffer).await {
                Ok((source, len)) => {
                    relay.handle_datagram(source, &buffer[..len]).await;
                }
                Err(err) => {
                    warn!(
                        event = events::INGRESS_RECV_FAILED,
                        component = COMPONENT,
                        local_addr = %self.local_addr,
                        err = %err,
                        "invalid read"
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::IngressListener;
    use crate::codec::MAX_DATAGRAM_SIZE;
    use crate::error::RelayError;
    use std::time::Duration;
    use tokio::net::UdpSocket;

    #[tokio::test]
    async fn bind_reports_unresolvable_address() {
        let result = IngressListener::bind("no-port-here").await;

        assert!(matches!(result, Err(RelayError::Resolve { .. })));
    }

    #[tokio::test]
    async fn bind_reports_address_in_use() {
        let first = IngressListener::bind("127.0.0.1:0").await.expect("first bind");
        let taken = first.local_addr().to_string();

        let result = IngressListener::bind(&taken).await;

        assert!(matches!(result, Err(RelayError::Bind { .. })));
    }

    #[tokio::test]
    async fn receive_truncates_oversized_datagrams() {
        let listener = IngressListener::bind("127.0.0.1:0").await.expect("bind");
        let sender = UdpSocket::bind("127.0.0.1:0").await.expect("sender bind");
        let oversized = vec![b'x'; MAX_DATAGRAM_SIZE + 64];

        sender
            .send_to(&oversized, listener.local_addr())
            .await
            .expect("send");

        let mut buffer = [0u8; MAX_DATAGRAM_SIZE];
        let (source, len) = tokio::time::timeout(Duration::from_secs(2), listener.receive(&mut buffer))
            .await
            .expect("datagram arrives")
            .expect("receive succeeds");

        assert_eq!(source, sender.local_addr().expect("sender address"));
        assert_eq!(len, MAX_DATAGRAM_SIZE);
    }
}
