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

//! Error taxonomy for the relay.
//!
//! [`RelayError`] covers fatal startup and transport failures. [`PacketError`] covers
//! protocol failures of a single datagram; those are logged and the datagram dropped.

use std::net::SocketAddr;

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("unable to resolve server address '{address}': {source}")]
    Resolve {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server address '{address}' did not resolve to any socket address")]
    NoAddress { address: String },

    #[error("unable to initialize listener on address '{address}': {source}")]
    Bind {
        address: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to start dispatch worker: {0}")]
    WorkerSpawn(#[source] std::io::Error),

    #[error("listener i/o failure: {0}")]
    Io(#[from] std::io::Error),
}

/// Reason a datagram was rejected by the classifier's parsers.
///
/// Fields are validated in wire order and the first failure wins.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum PacketError {
    #[error("invalid packet encoding: not UTF-8 after {0} bytes")]
    Encoding(usize),

    #[error("invalid subscriber packet: expected 2 tokens, got {0}")]
    SubscribeTokenCount(usize),

    #[error("invalid vehicle packet: expected 4 tokens, got {0}")]
    PositionTokenCount(usize),

    #[error("invalid update packet: expected 5 tokens, got {0}")]
    UpdateTokenCount(usize),

    #[error("invalid timestamp '{0}'")]
    Timestamp(String),

    #[error("invalid latitude '{0}'")]
    Latitude(String),

    #[error("invalid longitude '{0}'")]
    Longitude(String),

    #[error("invalid speed '{0}'")]
    Speed(String),
}

impl PacketError {
    /// Stable `reason` field value used in drop diagnostics.
    pub fn reason(&self) -> &'static str {
        match self {
            PacketError::Encoding(_) => "invalid_utf8",
            PacketError::SubscribeTokenCount(_) => "invalid_subscribe_packet",
            PacketError::PositionTokenCount(_) => "invalid_position_packet",
            PacketError::UpdateTokenCount(_) => "invalid_update_packet",
            PacketError::Timestamp(_) => "invalid_timestamp",
            PacketError::Latitude(_) => "invalid_latitude",
            PacketError::Longitude(_) => "invalid_longitude",
            PacketError::Speed(_) => "invalid_speed",
        }
    }
}
