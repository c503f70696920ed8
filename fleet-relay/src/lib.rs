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

//! # fleet-relay
//!
//! `fleet-relay` ingests position reports from mobile agents over UDP, keeps a per-agent
//! position history, derives speed from the last two reports and forwards every update
//! to the observers subscribed to that agent.
//!
//! ```no_run
//! use fleet_relay::{FleetStateServer, RelayConfig};
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let server = FleetStateServer::bind(&RelayConfig::default()).await.unwrap();
//! server.run().await;
//! # });
//! ```
//!
//! ## Internal architecture map
//!
//! - Codec: classification and parsing of inbound datagrams, outbound update rendering
//! - Kinematics: haversine distance and windowed speed
//! - State: append-only fleet store and subscriber registry, owned by the ingest loop
//! - Data plane: ingress listener, dispatch queue and egress worker
//! - Runtime: the dedicated thread hosting the egress worker
//!
//! Sends to subscribers happen off the ingest loop on a single egress worker, behind a
//! bounded queue. A slow subscriber delays ingestion only once that queue is full, and
//! updates keep the order they were accepted in.
//!
//! ## Observability model
//!
//! Library code emits `tracing` events and never installs a global subscriber.

pub mod codec;
mod config;
mod data_plane;
mod error;
pub mod kinematics;
mod model;
#[doc(hidden)]
pub mod observability;
mod relay;
mod runtime;
mod server;
pub mod state;

pub use config::{RelayConfig, DEFAULT_HOST, DEFAULT_MESSAGE_QUEUE_SIZE, DEFAULT_PORT};
pub use data_plane::ingress_listener::IngressListener;
pub use data_plane::update_dispatcher::DispatchOutcome;
pub use data_plane::update_sink::{UdpUpdateSink, UpdateSink};
pub use error::{PacketError, RelayError};
pub use model::{AgentId, PositionSample, SubscriberEndpoint};
pub use relay::{Disposition, FleetRelay};
pub use server::FleetStateServer;
