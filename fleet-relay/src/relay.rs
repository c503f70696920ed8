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

//! Relay facade: classify a datagram, update state, dispatch the derived update.

use crate::codec::{InboundPacket, PositionReport, SubscribeRequest};
use crate::data_plane::update_dispatcher::{DispatchOutcome, UpdateDispatcher};
use crate::data_plane::update_sink::UpdateSink;
use crate::error::{PacketError, RelayError};
use crate::model::{AgentId, SubscriberEndpoint};
use crate::observability::{events, fields};
use crate::state::{FleetStore, SubscriberRegistry};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, warn, Level};

const COMPONENT: &str = "fleet_relay";

/// Result of handling one inbound datagram.
#[derive(Clone, Debug, PartialEq)]
pub enum Disposition {
    /// The source endpoint was added to the agent's subscribers.
    Subscribed {
        agent_id: AgentId,
        subscriber_count: usize,
    },
    /// The sample was appended to the agent's history.
    Recorded {
        agent_id: AgentId,
        dispatch: DispatchOutcome,
    },
    /// The datagram failed to parse; nothing changed.
    Dropped(PacketError),
}

/// Owns the fleet store, the subscriber registry and the dispatch queue.
///
/// All mutation goes through `&mut self`, so a single ingest loop owns the state and no
/// locking is needed. Only immutable snapshots leave it, via the dispatch queue.
pub struct FleetRelay {
    fleet: FleetStore,
    subscribers: SubscriberRegistry,
    dispatcher: UpdateDispatcher,
}

impl FleetRelay {
    /// Creates an empty relay whose updates are delivered through `sink`.
    ///
    /// `message_queue_size` bounds the updates waiting for the egress worker; a zero is
    /// treated as one.
    pub fn new(sink: Arc<dyn UpdateSink>, message_queue_size: usize) -> Result<Self, RelayError> {
        Ok(Self {
            fleet: FleetStore::new(),
            subscribers: SubscriberRegistry::new(),
            dispatcher: UpdateDispatcher::new(sink, message_queue_size)?,
        })
    }

    /// Handles one raw datagram from `source`.
    ///
    /// Payloads that are not valid UTF-8 are dropped, so distinct raw agent ids are never
    /// merged under a lossy decoding.
    pub async fn handle_datagram(&mut self, source: SocketAddr, payload: &[u8]) -> Disposition {
        match std::str::from_utf8(payload) {
            Ok(message) => self.handle_message(source, message).await,
            Err(err) => {
                let err = PacketError::Encoding(err.valid_up_to());
                self.drop_packet(source, &String::from_utf8_lossy(payload), err)
            }
        }
    }

    /// Handles one decoded message from `source`.
    ///
    /// Waits only when the dispatch queue is full.
    pub async fn handle_message(&mut self, source: SocketAddr, message: &str) -> Disposition {
        if tracing::enabled!(Level::DEBUG) {
            let payload = fields::format_payload(message);
            debug!(
                event = events::INGRESS_RECEIVE,
                component = COMPONENT,
                source = %source,
                "{source} >> {payload}"
            );
        }

        match InboundPacket::parse(message) {
            Ok(InboundPacket::Subscribe(request)) => self.handle_subscribe(source, request),
            Ok(InboundPacket::Position(report)) => self.handle_position(report).await,
            Err(err) => self.drop_packet(source, message, err),
        }
    }

    fn drop_packet(&self, source: SocketAddr, message: &str, err: PacketError) -> Disposition {
        warn!(
            event = events::INGRESS_DROP_INVALID_PACKET,
            component = COMPONENT,
            source = %source,
            reason = err.reason(),
            payload = fields::format_payload(message),
            "{err}"
        );
        Disposition::Dropped(err)
    }

    fn handle_subscribe(
        &mut self,
        source: SubscriberEndpoint,
        request: SubscribeRequest,
    ) -> Disposition {
        let SubscribeRequest { agent_id } = request;
        let subscriber_count = self.subscribers.subscribe(agent_id.clone(), source);

        debug!(
            event = events::SUBSCRIBER_REGISTERED,
            component = COMPONENT,
            agent_id = agent_id.as_str(),
            source = %source,
            subscribers = subscriber_count,
            "registered subscriber"
        );

        Disposition::Subscribed {
            agent_id,
            subscriber_count,
        }
    }

    async fn handle_position(&mut self, report: PositionReport) -> Disposition {
        let PositionReport { agent_id, sample } = report;
        let history = self.fleet.append(&agent_id, sample);

        debug!(
            event = events::POSITION_RECORDED,
            component = COMPONENT,
            agent_id = agent_id.as_str(),
            history_len = history.len(),
            "recorded position sample"
        );

        let subscribers = self.subscribers.subscribers(agent_id.as_str());
        let dispatch = self
            .dispatcher
            .dispatch(&agent_id, history, subscribers)
            .await;

        Disposition::Recorded { agent_id, dispatch }
    }

    pub fn fleet(&self) -> &FleetStore {
        &self.fleet
    }

    pub fn subscribers(&self) -> &SubscriberRegistry {
        &self.subscribers
    }

    /// Closes the dispatch queue and blocks until every queued update has been sent.
    pub fn shutdown(self) {
        self.dispatcher.shutdown();
    }
}
