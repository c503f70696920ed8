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

use chrono::Utc;
use clap::Parser;
use common::cli::{resolve_address, unspecified_for};
use common::motion::{
    advance, initial_heading, initial_speed, make_vin, next_speed, START_LATITUDE,
    START_LONGITUDE,
};
use fleet_relay::codec::PositionReport;
use fleet_relay::{AgentId, PositionSample};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::net::SocketAddr;
use std::process::ExitCode;
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{error, info, warn};

/// Simulates a fleet of independent vehicles, each reporting its position to the fleet
/// state server once per interval.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Hostname or IP address of the fleet state server
    #[arg(long, default_value = "localhost")]
    host: String,

    /// Port of the fleet state server
    #[arg(long, default_value_t = 8000)]
    port: u16,

    /// Number of vehicles in the simulated fleet
    #[arg(short, long, default_value_t = 20)]
    number: usize,

    /// Milliseconds between reports from each vehicle
    #[arg(long, default_value_t = 1000)]
    interval_ms: u64,
}

async fn simulate_vehicle(server_addr: SocketAddr, serial: usize, tick: Duration) {
    let vin = AgentId::new(make_vin(serial));
    let socket = match UdpSocket::bind(unspecified_for(&server_addr)).await {
        Ok(socket) => socket,
        Err(err) => {
            error!(agent_id = %vin, err = %err, "Unable to bind vehicle socket");
            return;
        }
    };
    info!(agent_id = %vin, "Vehicle started");

    let mut rng = StdRng::from_entropy();
    let mut speed = initial_speed(&mut rng);
    let heading = initial_heading(&mut rng);
    let (mut latitude, mut longitude) = (START_LATITUDE, START_LONGITUDE);

    let mut ticker = interval(tick);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;

        speed = next_speed(speed, &mut rng);
        (latitude, longitude) = advance(latitude, longitude, speed, heading, tick.as_secs_f64());

        let report = PositionReport::new(
            vin.clone(),
            PositionSample::new(Utc::now().into(), latitude, longitude),
        )
        .to_string();

        if let Err(err) = socket.send_to(report.as_bytes(), server_addr).await {
            warn!(agent_id = %vin, target = %server_addr, err = %err, "Failed to send packet");
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    common::init_tracing();

    let args = Args::parse();

    let server_addr = match resolve_address("server", &args.host, args.port).await {
        Ok(address) => address,
        Err(err) => {
            error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    info!(
        vehicles = args.number,
        server = %server_addr,
        interval_ms = args.interval_ms,
        "Started vehicle_simulator, exit with Ctrl-C"
    );

    let tick = Duration::from_millis(args.interval_ms.max(1));
    let vehicles: Vec<_> = (0..args.number)
        .map(|serial| tokio::spawn(simulate_vehicle(server_addr, serial, tick)))
        .collect();

    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(err = %err, "Unable to listen for shutdown signal");
    }

    for vehicle in &vehicles {
        vehicle.abort();
    }
    info!("Shutting down vehicle_simulator");

    ExitCode::SUCCESS
}
