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

//! Per-agent position history.

use crate::model::{AgentId, PositionSample};
use std::collections::HashMap;

/// Mapping of agent id to its position history, in arrival order.
///
/// History is never re-sorted by timestamp and never truncated.
#[derive(Debug, Default)]
pub struct FleetStore {
    histories: HashMap<AgentId, Vec<PositionSample>>,
}

impl FleetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `sample` to the agent's history, creating it on first report, and returns
    /// the history including the new sample.
    pub fn append(&mut self, agent_id: &AgentId, sample: PositionSample) -> &[PositionSample] {
        let history = self.histories.entry(agent_id.clone()).or_default();
        history.push(sample);
        history
    }

    pub fn history(&self, agent_id: &str) -> Option<&[PositionSample]> {
        self.histories.get(agent_id).map(Vec::as_slice)
    }

    pub fn latest(&self, agent_id: &str) -> Option<&PositionSample> {
        self.histories.get(agent_id).and_then(|history| history.last())
    }

    pub fn agent_count(&self) -> usize {
        self.histories.len()
    }

    pub fn sample_count(&self) -> usize {
        self.histories.values().map(Vec::len).sum()
    }
}
