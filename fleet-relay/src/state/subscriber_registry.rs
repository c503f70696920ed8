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

//! Per-agent subscriber endpoints.

use crate::model::{AgentId, SubscriberEndpoint};
use std::collections::HashMap;

/// Mapping of agent id to the endpoints that asked for its updates.
///
/// Registration is not deduplicated: an endpoint that subscribes twice is stored twice
/// and receives every update twice.
#[derive(Debug, Default)]
pub struct SubscriberRegistry {
    subscribers: HashMap<AgentId, Vec<SubscriberEndpoint>>,
}

impl SubscriberRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `endpoint` to the agent's subscriber set, creating the set if absent.
    /// Returns the resulting number of entries for the agent.
    pub fn subscribe(&mut self, agent_id: AgentId, endpoint: SubscriberEndpoint) -> usize {
        let endpoints = self.subscribers.entry(agent_id).or_default();
        endpoints.push(endpoint);
        endpoints.len()
    }

    /// Subscribers of `agent_id` in registration order; empty when none registered.
    pub fn subscribers(&self, agent_id: &str) -> &[SubscriberEndpoint] {
        self.subscribers
            .get(agent_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn is_subscribed(&self, agent_id: &str, endpoint: &SubscriberEndpoint) -> bool {
        self.subscribers(agent_id).contains(endpoint)
    }

    pub fn agent_count(&self) -> usize {
        self.subscribers.len()
    }
}
