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

//! Outbound update message sent to subscribers.

use super::{format_timestamp, parse_latitude, parse_longitude, parse_speed, parse_timestamp};
use crate::error::PacketError;
use crate::kinematics::{self, UNKNOWN_SPEED};
use crate::model::{AgentId, PositionSample};
use chrono::{DateTime, FixedOffset};
use std::fmt;

/// `<timestamp> <agentId> <latitude> <longitude> <speed>`, numbers to 6 decimals.
#[derive(Clone, Debug, PartialEq)]
pub struct PositionUpdate {
    pub timestamp: DateTime<FixedOffset>,
    pub agent_id: AgentId,
    pub latitude: f64,
    pub longitude: f64,
    /// Meters per second, or [`UNKNOWN_SPEED`].
    pub speed: f64,
}

impl PositionUpdate {
    /// Builds the update for the latest sample of `history`, or `None` if it is empty.
    pub fn from_history(agent_id: &AgentId, history: &[PositionSample]) -> Option<Self> {
        let latest = history.last()?;

        Some(Self {
            timestamp: latest.timestamp,
            agent_id: agent_id.clone(),
            latitude: latest.latitude,
            longitude: latest.longitude,
            speed: kinematics::speed(history),
        })
    }

    pub fn is_speed_known(&self) -> bool {
        self.speed != UNKNOWN_SPEED
    }

    pub fn parse(message: &str) -> Result<Self, PacketError> {
        let tokens: Vec<&str> = message.split_whitespace().collect();
        let [timestamp, agent_id, latitude, longitude, speed] = tokens.as_slice() else {
            return Err(PacketError::UpdateTokenCount(tokens.len()));
        };

        Ok(Self {
            timestamp: parse_timestamp(timestamp)?,
            agent_id: AgentId::from(*agent_id),
            latitude: parse_latitude(latitude)?,
            longitude: parse_longitude(longitude)?,
            speed: parse_speed(speed)?,
        })
    }
}

impl fmt::Display for PositionUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {:.6} {:.6} {:.6}",
            format_timestamp(&self.timestamp),
            self.agent_id,
            self.latitude,
            self.longitude,
            self.speed
        )
    }
}
