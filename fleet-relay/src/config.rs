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

//! Library-facing relay configuration.

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_MESSAGE_QUEUE_SIZE: usize = 1024;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RelayConfig {
    /// Host name or IP address to listen on.
    pub host: String,
    pub port: u16,
    /// Maximum number of updates waiting for the egress worker.
    pub message_queue_size: usize,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            message_queue_size: DEFAULT_MESSAGE_QUEUE_SIZE,
        }
    }
}

impl RelayConfig {
    /// `host:port`, with IPv6 literals bracketed.
    pub fn listen_address(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}
