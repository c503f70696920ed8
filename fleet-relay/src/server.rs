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

//! Fleet state server: an ingress listener driving a [`FleetRelay`].

use crate::config::RelayConfig;
use crate::data_plane::ingress_listener::IngressListener;
use crate::data_plane::update_sink::{UdpUpdateSink, UpdateSink};
use crate::error::RelayError;
use crate::relay::FleetRelay;
use std::net::SocketAddr;
use std::sync::Arc;

pub struct FleetStateServer {
    listener: IngressListener,
    relay: FleetRelay,
}

impl FleetStateServer {
    /// Binds the listen socket and starts the egress worker, sending over UDP.
    pub async fn bind(config: &RelayConfig) -> Result<Self, RelayError> {
        Self::bind_with_sink(config, Arc::new(UdpUpdateSink)).await
    }

    pub async fn bind_with_sink(
        config: &RelayConfig,
        sink: Arc<dyn UpdateSink>,
    ) -> Result<Self, RelayError> {
        let listener = IngressListener::bind(&config.listen_address()).await?;
        let relay = FleetRelay::new(sink, config.message_queue_size)?;

        Ok(Self { listener, relay })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.listener.local_addr()
    }

    /// Serves until the process is terminated.
    pub async fn run(mut self) {
        self.listener.run(&mut self.relay).await;
    }
}
