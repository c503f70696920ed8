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

//! Shared structured field values and value-format helpers.

pub const REASON_QUEUE_CLOSED: &str = "queue_closed";
pub const REASON_RUNTIME_BUILD_FAILED: &str = "runtime_build_failed";
pub const DEFAULT_WORKER_THREAD: &str = "unknown-thread";

/// Longest payload rendered into a log line, in characters.
pub const PAYLOAD_PREVIEW_CHARS: usize = 96;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WorkerContext {
    pub worker_id: String,
    pub worker_thread: String,
}

impl WorkerContext {
    pub fn with_current_thread(worker_id: impl Into<String>) -> Self {
        Self {
            worker_id: worker_id.into(),
            worker_thread: current_thread_name_or_default(),
        }
    }
}

pub fn thread_name_or_default(thread_name: Option<&str>) -> String {
    thread_name.unwrap_or(DEFAULT_WORKER_THREAD).to_string()
}

pub fn current_thread_name_or_default() -> String {
    thread_name_or_default(std::thread::current().name())
}

/// Escapes control characters and caps the length so a datagram fits on one log line.
pub fn format_payload(payload: &str) -> String {
    let mut preview: String = payload
        .chars()
        .take(PAYLOAD_PREVIEW_CHARS)
        .flat_map(char::escape_debug)
        .collect();
    if payload.chars().nth(PAYLOAD_PREVIEW_CHARS).is_some() {
        preview.push_str("...");
    }
    preview
}
