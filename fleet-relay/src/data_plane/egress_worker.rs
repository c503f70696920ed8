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

//! Egress worker that delivers queued updates to every target subscriber.

use crate::data_plane::update_sink::UpdateSink;
use crate::error::RelayError;
use crate::model::{AgentId, SubscriberEndpoint};
use crate::observability::{events, fields::WorkerContext};
use crate::runtime::worker_runtime::{
    spawn_dispatch_loop, DispatchLoopHandle, DEFAULT_EGRESS_RUNTIME_THREAD_NAME,
};
use std::sync::Arc;
use tokio::sync::mpsc::Receiver;
use tracing::{debug, info, warn};
use uuid::Uuid;

const EGRESS_RUNTIME_THREAD_NAME_PREFIX: &str = "fleet-eg-";
const EGRESS_RUNTIME_THREAD_NAME_MAX_LEN: usize = 15;
const COMPONENT: &str = "egress_worker";

/// One formatted update and the subscribers it must reach, snapshotted at enqueue time.
#[derive(Clone, Debug)]
pub struct OutboundUpdate {
    pub agent_id: AgentId,
    pub payload: Arc<str>,
    pub targets: Vec<SubscriberEndpoint>,
}

/// Worker state that owns the spawned dispatch thread.
pub(crate) struct EgressWorker {
    worker_id: String,
    dispatch_handle: DispatchLoopHandle,
}

impl EgressWorker {
    /// Spawns a dedicated runtime thread draining `update_receiver` into `sink`.
    pub(crate) fn new(
        sink: Arc<dyn UpdateSink>,
        update_receiver: Receiver<OutboundUpdate>,
    ) -> Result<Self, RelayError> {
        let worker_id = Uuid::new_v4().hyphenated().to_string();
        let runtime_thread_name = Self::build_runtime_thread_name(&worker_id);
        let worker_id_for_loop = worker_id.clone();

        let dispatch_handle = spawn_dispatch_loop(
            runtime_thread_name,
            sink,
            update_receiver,
            move |sink, update_receiver| async move {
                Self::dispatch_loop(worker_id_for_loop, sink, update_receiver).await;
            },
        )
        .map_err(RelayError::WorkerSpawn)?;

        Ok(Self {
            worker_id,
            dispatch_handle,
        })
    }

    pub(crate) fn worker_id(&self) -> &str {
        &self.worker_id
    }

    pub(crate) fn runtime_thread(&self) -> &str {
        self.dispatch_handle.worker_thread()
    }

    /// Waits for the loop to exit. The queue sender must already be dropped.
    pub(crate) fn join(self) {
        if self.dispatch_handle.join().is_err() {
            warn!(
                event = events::EGRESS_WORKER_JOIN_FAILED,
                component = COMPONENT,
                worker_id = self.worker_id.as_str(),
                "egress worker thread panicked"
            );
        }
    }

    fn build_runtime_thread_name(worker_id: &str) -> String {
        let suffix_len =
            EGRESS_RUNTIME_THREAD_NAME_MAX_LEN - EGRESS_RUNTIME_THREAD_NAME_PREFIX.len();
        let suffix: String = worker_id
            .chars()
            .filter(|ch| ch.is_ascii_hexdigit())
            .take(suffix_len)
            .collect();

        if suffix.len() == suffix_len {
            format!("{EGRESS_RUNTIME_THREAD_NAME_PREFIX}{suffix}")
        } else {
            debug!(
                event = events::RUNTIME_THREAD_NAME_FALLBACK,
                component = COMPONENT,
                worker_id,
                "falling back to default egress thread name"
            );
            DEFAULT_EGRESS_RUNTIME_THREAD_NAME.to_string()
        }
    }

    /// Sends every queued update to each of its targets, in queue order.
    ///
    /// A failed send is logged and does not affect the remaining targets.
    pub(crate) async fn dispatch_loop(
        worker_id: String,
        sink: Arc<dyn UpdateSink>,
        mut update_receiver: Receiver<OutboundUpdate>,
    ) {
        let worker_context = WorkerContext::with_current_thread(worker_id);

        while let Some(update) = update_receiver.recv().await {
            for target in &update.targets {
                debug!(
                    event = events::EGRESS_SEND_ATTEMPT,
                    component = COMPONENT,
                    worker_id = worker_context.worker_id.as_str(),
                    worker_thread = worker_context.worker_thread.as_str(),
                    agent_id = update.agent_id.as_str(),
                    target = %target,
                    "attempting subscriber send"
                );

                match sink.send_update(*target, &update.payload).await {
                    Ok(()) => {
                        debug!(
                            event = events::EGRESS_SEND_OK,
                            component = COMPONENT,
                            worker_id = worker_context.worker_id.as_str(),
                            agent_id = update.agent_id.as_str(),
                            target = %target,
                            "subscriber send succeeded"
                        );
                    }
                    Err(err) => {
                        warn!(
                            event = events::EGRESS_SEND_FAILED,
                            component = COMPONENT,
                            worker_id = worker_context.worker_id.as_str(),
                            worker_thread = worker_context.worker_thread.as_str(),
                            agent_id = update.agent_id.as_str(),
                            target = %target,
                            err = %err,
                            "failed to send subscriber update"
                        );
                    }
                }
            }
        }

        info!(
            event = events::EGRESS_RECV_CLOSED,
            component = COMPONENT,
            worker_id = worker_context.worker_id.as_str(),
            worker_thread = worker_context.worker_thread.as_str(),
            reason = crate::observability::fields::REASON_QUEUE_CLOSED,
            "update queue closed; stopping dispatch loop"
        );
    }
}
