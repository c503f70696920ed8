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

//! Formats position updates and hands them to the egress worker.

use crate::codec::PositionUpdate;
use crate::data_plane::egress_worker::{EgressWorker, OutboundUpdate};
use crate::data_plane::update_sink::UpdateSink;
use crate::error::RelayError;
use crate::model::{AgentId, PositionSample, SubscriberEndpoint};
use crate::observability::events;
use std::sync::Arc;
use tokio::sync::mpsc::{self, error::TrySendError, Sender};
use tracing::{debug, error};

const COMPONENT: &str = "update_dispatcher";

/// What happened to one update handed to [`UpdateDispatcher::dispatch`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DispatchOutcome {
    /// Queued for delivery to this many subscriber entries.
    Enqueued(usize),
    /// Nothing to send: no subscribers, or no sample to report.
    Skipped,
    /// The egress worker is gone; the update could not be queued.
    Dropped,
}

/// Front half of the dispatch path. Runs on the ingest loop.
///
/// Sends happen on the egress worker. The ingest loop only waits when the queue is full,
/// so every accepted update is delivered to the worker.
pub(crate) struct UpdateDispatcher {
    sender: Sender<OutboundUpdate>,
    worker: EgressWorker,
}

impl UpdateDispatcher {
    pub(crate) fn new(
        sink: Arc<dyn UpdateSink>,
        message_queue_size: usize,
    ) -> Result<Self, RelayError> {
        let (sender, receiver) = mpsc::channel(message_queue_size.max(1));
        let worker = EgressWorker::new(sink, receiver)?;
        debug!(
            component = COMPONENT,
            worker_id = worker.worker_id(),
            worker_thread = worker.runtime_thread(),
            message_queue_size,
            "update dispatcher started"
        );

        Ok(Self { sender, worker })
    }

    /// Formats the latest sample of `history` with its derived speed and queues one copy
    /// per subscriber entry, waiting for room if the queue is full.
    pub(crate) async fn dispatch(
        &self,
        agent_id: &AgentId,
        history: &[PositionSample],
        subscribers: &[SubscriberEndpoint],
    ) -> DispatchOutcome {
        if subscribers.is_empty() {
            return DispatchOutcome::Skipped;
        }
        let Some(update) = PositionUpdate::from_history(agent_id, history) else {
            return DispatchOutcome::Skipped;
        };

        let outbound = OutboundUpdate {
            agent_id: agent_id.clone(),
            payload: Arc::from(update.to_string()),
            targets: subscribers.to_vec(),
        };

        let queued = match self.sender.try_send(outbound) {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(outbound)) => {
                debug!(
                    event = events::DISPATCH_QUEUE_FULL,
                    component = COMPONENT,
                    agent_id = agent_id.as_str(),
                    "update queue full; waiting for egress worker"
                );
                self.sender.send(outbound).await.map_err(|_| ())
            }
            Err(TrySendError::Closed(_)) => Err(()),
        };

        match queued {
            Ok(()) => {
                debug!(
                    event = events::DISPATCH_ENQUEUED,
                    component = COMPONENT,
                    agent_id = agent_id.as_str(),
                    subscribers = subscribers.len(),
                    speed = update.speed,
                    "queued subscriber update"
                );
                DispatchOutcome::Enqueued(subscribers.len())
            }
            Err(()) => {
                error!(
                    event = events::DISPATCH_QUEUE_CLOSED,
                    component = COMPONENT,
                    agent_id = agent_id.as_str(),
                    "update queue closed; egress worker is gone"
                );
                DispatchOutcome::Dropped
            }
        }
    }

    /// Closes the queue and waits until every queued update has been sent.
    pub(crate) fn shutdown(self) {
        let Self { sender, worker } = self;
        drop(sender);
        worker.join();
    }
}
