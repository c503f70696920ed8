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

mod common;

use clap::Parser;
use common::cli::resolve_address;
use fleet_relay::codec::{PositionUpdate, MAX_DATAGRAM_SIZE};
use fleet_relay::PacketError;
use std::process::ExitCode;
use tokio::net::UdpSocket;
use tracing::{error, info, warn};

/// Subscribes to the updates of one vehicle and prints each one until interrupted.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Hostname or IP address the client listens on
    #[arg(long, default_value = "localhost")]
    client_host: String,

    /// Port the client listens on
    #[arg(long, default_value_t = 8001)]
    client_port: u16,

    /// Hostname or IP address of the fleet state server
    #[arg(long, default_value = "localhost")]
    server_host: String,

    /// Port of the fleet state server
    #[arg(long, default_value_t = 8000)]
    server_port: u16,

    /// VIN of the vehicle to follow
    #[arg(long, default_value = "1HGBH41JXMN000000")]
    vin: String,
}

/// `[<time>]  (<lat>, <lon>)  <speed>`, with `N/A` when the speed is unknown.
fn render_update(update: &PositionUpdate) -> String {
    let time = update
        .timestamp
        .to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
    let position = format!("({:.6}, {:.6})", update.latitude, update.longitude);

    if update.is_speed_known() {
        format!("[{time}]  {position}  {:5.2} m/s", update.speed)
    } else {
        format!("[{time}]  {position}  N/A")
    }
}

fn handle_packet(payload: &[u8]) {
    let message = match std::str::from_utf8(payload) {
        Ok(message) => message,
        Err(err) => {
            let err = PacketError::Encoding(err.valid_up_to());
            warn!(reason = err.reason(), "{err}");
            return;
        }
    };
    match PositionUpdate::parse(message) {
        Ok(update) => println!("{}", render_update(&update)),
        Err(err) => warn!(reason = err.reason(), "{err}"),
    }
}

async fn run_client(args: Args) -> Result<(), String> {
    let local_addr = resolve_address("client", &args.client_host, args.client_port).await?;
    let server_addr = resolve_address("server", &args.server_host, args.server_port).await?;

    let socket = UdpSocket::bind(local_addr).await.map_err(|err| {
        format!("unable to initialize listener on address '{local_addr}': {err}")
    })?;

    info!(
        client = %local_addr,
        server = %server_addr,
        vin = %args.vin,
        "Started fleet_client, exit with Ctrl-C"
    );

    let subscribe = format!("SUBSCRIBE {}", args.vin);
    socket
        .send_to(subscribe.as_bytes(), server_addr)
        .await
        .map_err(|err| format!("failed to send subscription packet: {err}"))?;

    let mut buffer = [0u8; MAX_DATAGRAM_SIZE];
    loop {
        match socket.recv_from(&mut buffer).await {
            Ok((len, _)) => handle_packet(&buffer[..len]),
            Err(err) => warn!(err = %err, "invalid read"),
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    common::init_tracing();

    let args = Args::parse();

    tokio::select! {
        result = run_client(args) => {
            if let Err(err) = result {
                error!("{err}");
                return ExitCode::FAILURE;
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Shutting down fleet_client");
        }
    }

    ExitCode::SUCCESS
}
