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

mod config;

use crate::config::{Config, Overrides};
use clap::Parser;
use fleet_relay::FleetStateServer;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, Level};

/// Relays vehicle position reports to subscribed clients over UDP.
#[derive(Parser)]
#[command(version, about)]
struct ServerArgs {
    /// Hostname or IP address to listen on [default: localhost]
    #[arg(long)]
    host: Option<String>,

    /// UDP port to listen on [default: 8000]
    #[arg(long)]
    port: Option<u16>,

    /// Log every incoming packet
    #[arg(short, long)]
    verbose: bool,

    /// JSON5 configuration file; command line flags take precedence
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Updates allowed to wait for the egress worker [default: 1024]
    #[arg(long)]
    message_queue_size: Option<usize>,
}

impl ServerArgs {
    fn overrides(&self) -> Overrides {
        Overrides {
            host: self.host.clone(),
            port: self.port,
            verbose: self.verbose,
            message_queue_size: self.message_queue_size,
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let _ = tracing_subscriber::fmt().with_max_level(level).try_init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = ServerArgs::parse();

    let file_config = match &args.config {
        Some(path) => match Config::from_file(path) {
            Ok(config) => config,
            Err(err) => {
                init_tracing(args.verbose);
                error!(err = %err, "Unable to load configuration");
                return ExitCode::FAILURE;
            }
        },
        None => Config::default(),
    };
    let config = file_config.apply(args.overrides());
    init_tracing(config.verbose());

    let relay_config = config.relay_config();
    let server = match FleetStateServer::bind(&relay_config).await {
        Ok(server) => server,
        Err(err) => {
            error!(err = %err, "Unable to start fleet state server");
            return ExitCode::FAILURE;
        }
    };

    info!(
        local_addr = %server.local_addr(),
        message_queue_size = relay_config.message_queue_size,
        verbose = config.verbose(),
        "Started fleet-state-server"
    );

    tokio::select! {
        _ = server.run() => {}
        signal = tokio::signal::ctrl_c() => {
            if let Err(err) = signal {
                error!(err = %err, "Unable to listen for shutdown signal");
                return ExitCode::FAILURE;
            }
            info!("Shutting down fleet-state-server");
        }
    }

    ExitCode::SUCCESS
}
