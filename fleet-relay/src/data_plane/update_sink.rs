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

//! Outbound transport seam used by the egress worker.

use crate::model::SubscriberEndpoint;
use async_trait::async_trait;
use std::io;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use tokio::net::UdpSocket;

/// Delivers one formatted update to one subscriber. Delivery is fire-and-forget; an
/// `Ok` only means the datagram was handed to the transport.
#[async_trait]
pub trait UpdateSink: Send + Sync {
    async fn send_update(&self, target: SubscriberEndpoint, payload: &str) -> io::Result<()>;
}

/// Sends each update from a fresh ephemeral UDP socket that is closed right after.
#[derive(Clone, Copy, Debug, Default)]
pub struct UdpUpdateSink;

impl UdpUpdateSink {
    fn ephemeral_bind_address(target: &SubscriberEndpoint) -> SocketAddr {
        match target {
            SocketAddr::V4(_) => SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0)),
            SocketAddr::V6(_) => SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0)),
        }
    }
}

#[async_trait]
impl UpdateSink for UdpUpdateSink {
    async fn send_update(&self, target: SubscriberEndpoint, payload: &str) -> io::Result<()> {
        let socket = UdpSocket::bind(Self::ephemeral_bind_address(&target)).await?;
        socket.connect(target).await?;
        socket.send(payload.as_bytes()).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{UdpUpdateSink, UpdateSink};
    use std::time::Duration;
    use tokio::net::UdpSocket;

    #[tokio::test]
    async fn udp_sink_delivers_payload_verbatim() {
        let receiver = UdpSocket::bind("127.0.0.1:0").await.expect("bind receiver");
        let target = receiver.local_addr().expect("receiver address");

        UdpUpdateSink
            .send_update(target, "2024-01-01T00:00:00.000000000Z V1 1.000000 2.000000 -1.000000")
            .await
            .expect("send succeeds");

        let mut buffer = [0u8; 256];
        let len = tokio::time::timeout(Duration::from_secs(2), receiver.recv(&mut buffer))
            .await
            .expect("datagram arrives")
            .expect("recv succeeds");
        assert_eq!(
            &buffer[..len],
            b"2024-01-01T00:00:00.000000000Z V1 1.000000 2.000000 -1.000000"
        );
    }
}
