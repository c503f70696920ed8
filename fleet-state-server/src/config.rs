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

use fleet_relay::{RelayConfig, DEFAULT_HOST, DEFAULT_MESSAGE_QUEUE_SIZE, DEFAULT_PORT};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unable to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: json5::Error,
    },
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub(crate) listen: ListenConfig,
    #[serde(default)]
    pub(crate) verbose: bool,
    #[serde(default)]
    pub(crate) dispatch: DispatchConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ListenConfig {
    #[serde(default = "default_host")]
    pub(crate) host: String,
    #[serde(default = "default_port")]
    pub(crate) port: u16,
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DispatchConfig {
    #[serde(default = "default_message_queue_size")]
    pub(crate) message_queue_size: usize,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            message_queue_size: default_message_queue_size(),
        }
    }
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_message_queue_size() -> usize {
    DEFAULT_MESSAGE_QUEUE_SIZE
}

/// Values given explicitly on the command line. `None` leaves the file value in place.
#[derive(Debug, Default)]
pub struct Overrides {
    pub(crate) host: Option<String>,
    pub(crate) port: Option<u16>,
    pub(crate) verbose: bool,
    pub(crate) message_queue_size: Option<usize>,
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        json5::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn apply(mut self, overrides: Overrides) -> Self {
        if let Some(host) = overrides.host {
            self.listen.host = host;
        }
        if let Some(port) = overrides.port {
            self.listen.port = port;
        }
        if let Some(message_queue_size) = overrides.message_queue_size {
            self.dispatch.message_queue_size = message_queue_size;
        }
        self.verbose |= overrides.verbose;
        self
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn relay_config(&self) -> RelayConfig {
        RelayConfig {
            host: self.listen.host.clone(),
            port: self.listen.port,
            message_queue_size: self.dispatch.message_queue_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Config, ConfigError, Overrides};
    use std::path::Path;

    #[test]
    fn empty_file_yields_defaults() {
        let config: Config = json5::from_str("{}").expect("empty object should parse");

        assert_eq!(config.relay_config(), fleet_relay::RelayConfig::default());
        assert!(!config.verbose());
    }

    #[test]
    fn file_values_are_used() {
        let config: Config = json5::from_str(
            r#"{
                // comments are allowed
                listen: { host: "0.0.0.0", port: 9000 },
                verbose: true,
                dispatch: { message_queue_size: 8 },
            }"#,
        )
        .expect("config should parse");

        let relay = config.relay_config();
        assert_eq!(relay.listen_address(), "0.0.0.0:9000");
        assert_eq!(relay.message_queue_size, 8);
        assert!(config.verbose());
    }

    #[test]
    fn partial_sections_fill_in_defaults() {
        let config: Config =
            json5::from_str("{ listen: { port: 9100 } }").expect("config should parse");

        assert_eq!(config.relay_config().listen_address(), "localhost:9100");
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result = json5::from_str::<Config>("{ listen: { host: \"a\", prot: 1 } }");

        assert!(result.is_err());
    }

    #[test]
    fn command_line_overrides_file() {
        let config: Config = json5::from_str("{ listen: { host: \"0.0.0.0\", port: 9000 } }")
            .expect("config should parse");

        let config = config.apply(Overrides {
            port: Some(9001),
            verbose: true,
            ..Overrides::default()
        });

        assert_eq!(config.relay_config().listen_address(), "0.0.0.0:9001");
        assert!(config.verbose());
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let result = Config::from_file(Path::new("/nonexistent/fleet-state-server.json5"));

        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn bundled_default_config_matches_defaults() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("DEFAULT_CONFIG.json5");
        let config = Config::from_file(&path).expect("bundled config should load");

        assert_eq!(config, Config::default());
    }
}
