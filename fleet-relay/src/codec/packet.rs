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

//! Inbound packet classification and parsing.

use super::{format_timestamp, parse_latitude, parse_longitude, parse_timestamp, SUBSCRIBE_TOKEN};
use crate::error::PacketError;
use crate::model::{AgentId, PositionSample};
use std::fmt;

/// Which parser an inbound message is routed to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PacketKind {
    Subscription,
    Position,
}

/// Selects the parser for `message` by its leading token. Never fails.
pub fn classify(message: &str) -> PacketKind {
    match message.split_whitespace().next() {
        Some(SUBSCRIBE_TOKEN) => PacketKind::Subscription,
        _ => PacketKind::Position,
    }
}

/// `SUBSCRIBE <agentId>`
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SubscribeRequest {
    pub agent_id: AgentId,
}

impl SubscribeRequest {
    pub fn new(agent_id: AgentId) -> Self {
        Self { agent_id }
    }

    pub fn parse(message: &str) -> Result<Self, PacketError> {
        let tokens: Vec<&str> = message.split_whitespace().collect();
        let [_, agent_id] = tokens.as_slice() else {
            return Err(PacketError::SubscribeTokenCount(tokens.len()));
        };

        Ok(Self::new(AgentId::from(*agent_id)))
    }
}

impl fmt::Display for SubscribeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{SUBSCRIBE_TOKEN} {}", self.agent_id)
    }
}

/// `<timestamp> <agentId> <latitude> <longitude>`
///
/// Coordinates are not range-checked; only finiteness is enforced.
#[derive(Clone, Debug, PartialEq)]
pub struct PositionReport {
    pub agent_id: AgentId,
    pub sample: PositionSample,
}

impl PositionReport {
    pub fn new(agent_id: AgentId, sample: PositionSample) -> Self {
        Self { agent_id, sample }
    }

    pub fn parse(message: &str) -> Result<Self, PacketError> {
        let tokens: Vec<&str> = message.split_whitespace().collect();
        let [timestamp, agent_id, latitude, longitude] = tokens.as_slice() else {
            return Err(PacketError::PositionTokenCount(tokens.len()));
        };

        let timestamp = parse_timestamp(timestamp)?;
        let latitude = parse_latitude(latitude)?;
        let longitude = parse_longitude(longitude)?;

        Ok(Self::new(
            AgentId::from(*agent_id),
            PositionSample::new(timestamp, latitude, longitude),
        ))
    }
}

impl fmt::Display for PositionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {:.6} {:.6}",
            format_timestamp(&self.sample.timestamp),
            self.agent_id,
            self.sample.latitude,
            self.sample.longitude
        )
    }
}

/// A classified and parsed inbound datagram.
#[derive(Clone, Debug, PartialEq)]
pub enum InboundPacket {
    Subscribe(SubscribeRequest),
    Position(PositionReport),
}

impl InboundPacket {
    pub fn parse(message: &str) -> Result<Self, PacketError> {
        match classify(message) {
            PacketKind::Subscription => SubscribeRequest::parse(message).map(Self::Subscribe),
            PacketKind::Position => PositionReport::parse(message).map(Self::Position),
        }
    }
}
