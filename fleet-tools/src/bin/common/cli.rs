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

use std::net::SocketAddr;
use tokio::net::lookup_host;

/// `host:port`, with IPv6 literals bracketed.
pub(crate) fn join_host_port(host: &str, port: u16) -> String {
    if host.contains(':') && !host.starts_with('[') {
        format!("[{host}]:{port}")
    } else {
        format!("{host}:{port}")
    }
}

/// Resolves `host:port` to its first socket address.
pub(crate) async fn resolve_address(role: &str, host: &str, port: u16) -> Result<SocketAddr, String> {
    let address = join_host_port(host, port);
    let mut resolved = lookup_host(&address)
        .await
        .map_err(|error| format!("unable to resolve {role} address '{address}': {error}"))?;

    resolved
        .next()
        .ok_or_else(|| format!("{role} address '{address}' did not resolve to any socket address"))
}

/// Unspecified address of the same family as `target`, for an ephemeral local bind.
#[allow(dead_code)]
pub(crate) fn unspecified_for(target: &SocketAddr) -> SocketAddr {
    match target {
        SocketAddr::V4(_) => SocketAddr::from(([0, 0, 0, 0], 0)),
        SocketAddr::V6(_) => SocketAddr::from(([0u16; 8], 0)),
    }
}
