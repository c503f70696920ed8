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

//! Runtime helper for spawning the egress dispatch loop on a dedicated thread.

use crate::data_plane::egress_worker::OutboundUpdate;
use crate::data_plane::update_sink::UpdateSink;
use crate::observability::{events, fields};
use std::future::Future;
use std::io;
use std::sync::Arc;
use std::thread;
use tokio::runtime::Builder;
use tokio::sync::mpsc::Receiver;
use tracing::{debug, error};

pub(crate) const DEFAULT_EGRESS_RUNTIME_THREAD_NAME: &str = "fleet-egress";
const COMPONENT: &str = "worker_runtime";

/// Owns the thread running one dispatch loop.
pub(crate) struct DispatchLoopHandle {
    worker_thread: String,
    join_handle: thread::JoinHandle<()>,
}

impl DispatchLoopHandle {
    pub(crate) fn worker_thread(&self) -> &str {
        &self.worker_thread
    }

    /// Blocks until the loop has drained its queue and exited.
    pub(crate) fn join(self) -> thread::Result<()> {
        self.join_handle.join()
    }
}

/// Runs `run_loop` on a new named thread backed by a current-thread tokio runtime.
pub(crate) fn spawn_dispatch_loop<F, Fut>(
    thread_name: String,
    sink: Arc<dyn UpdateSink>,
    update_receiver: Receiver<OutboundUpdate>,
    run_loop: F,
) -> io::Result<DispatchLoopHandle>
where
    F: FnOnce(Arc<dyn UpdateSink>, Receiver<OutboundUpdate>) -> Fut + Send + 'static,
    Fut: Future<Output = ()> + 'static,
{
    let thread_label = thread_name.clone();
    let join_handle = thread::Builder::new()
        .name(thread_name.clone())
        .spawn(move || {
            let runtime = match Builder::new_current_thread().enable_all().build() {
                Ok(runtime) => runtime,
                Err(err) => {
                    error!(
                        event = events::RUNTIME_SPAWN_FAILED,
                        component = COMPONENT,
                        worker_thread = thread_label.as_str(),
                        reason = fields::REASON_RUNTIME_BUILD_FAILED,
                        err = %err,
                        "unable to build egress runtime"
                    );
                    return;
                }
            };

            runtime.block_on(run_loop(sink, update_receiver));
        })
        .inspect_err(|err| {
            error!(
                event = events::RUNTIME_SPAWN_FAILED,
                component = COMPONENT,
                worker_thread = thread_name.as_str(),
                err = %err,
                "unable to spawn egress runtime thread"
            );
        })?;

    debug!(
        event = events::RUNTIME_SPAWN_OK,
        component = COMPONENT,
        worker_thread = thread_name.as_str(),
        "spawned egress runtime thread"
    );

    Ok(DispatchLoopHandle {
        worker_thread: thread_name,
        join_handle,
    })
}
