//! Data-plane layer.
//!
//! Owns the ingress socket, the dispatch queue and the egress worker that turns queued
//! updates into per-subscriber datagrams. A full queue makes ingestion wait; accepted
//! updates are not discarded while the egress worker runs.
//!
//! ```
//! use std::net::SocketAddr;
//! use fleet_relay::{FleetRelay, UdpUpdateSink};
//! use std::sync::Arc;
//!
//! let mut relay = FleetRelay::new(Arc::new(UdpUpdateSink), 16).unwrap();
//! let observer: SocketAddr = "127.0.0.1:9".parse().unwrap();
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! relay.handle_datagram(observer, b"SUBSCRIBE V1").await;
//! relay
//!     .handle_datagram(observer, b"2024-01-01T00:00:00Z V1 53.344496 -6.259427")
//!     .await;
//! # });
//! relay.shutdown();
//! ```

pub(crate) mod egress_worker;
pub(crate) mod ingress_listener;
pub(crate) mod update_dispatcher;
pub(crate) mod update_sink;
