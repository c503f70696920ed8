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

//! Extended-precision timestamps: RFC 3339 with explicit offset and nanosecond fraction.

use crate::error::PacketError;
use chrono::{DateTime, FixedOffset, SecondsFormat};

/// Parses an RFC 3339 date-time. The offset is mandatory; any fraction length is accepted.
pub fn parse_timestamp(token: &str) -> Result<DateTime<FixedOffset>, PacketError> {
    DateTime::parse_from_rfc3339(token).map_err(|_| PacketError::Timestamp(token.to_string()))
}

/// Renders a timestamp with nine fractional digits, `Z` for a zero offset.
pub fn format_timestamp(timestamp: &DateTime<FixedOffset>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Nanos, true)
}
