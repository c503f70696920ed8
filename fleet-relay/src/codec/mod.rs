//! Wire codec for the three datagram kinds.
//!
//! Every message is ASCII, one message per datagram, tokens separated by whitespace:
//!
//! | direction             | format                                    |
//! |-----------------------|-------------------------------------------|
//! | subscriber -> server  | `SUBSCRIBE <agentId>`                     |
//! | agent -> server       | `<timestamp> <agentId> <lat> <lon>`       |
//! | server -> subscriber  | `<timestamp> <agentId> <lat> <lon> <speed>` |
//!
//! Senders must keep messages within [`MAX_DATAGRAM_SIZE`]; larger datagrams are truncated
//! on receipt and usually fail to parse.
//!
//! ```
//! use fleet_relay::codec::{InboundPacket, PositionUpdate};
//!
//! let packet = InboundPacket::parse("2024-01-01T00:00:00.5Z V1 53.344496 -6.259427").unwrap();
//! let InboundPacket::Position(report) = packet else { panic!("expected a position report") };
//!
//! let update = PositionUpdate::from_history(&report.agent_id, &[report.sample]).unwrap();
//! assert_eq!(
//!     update.to_string(),
//!     "2024-01-01T00:00:00.500000000Z V1 53.344496 -6.259427 -1.000000"
//! );
//! ```

mod packet;
mod timestamp;
mod update;

pub use packet::{classify, InboundPacket, PacketKind, PositionReport, SubscribeRequest};
pub use timestamp::{format_timestamp, parse_timestamp};
pub use update::PositionUpdate;

use crate::error::PacketError;

/// Leading token of a subscription request.
pub const SUBSCRIBE_TOKEN: &str = "SUBSCRIBE";

/// Receive buffer size in bytes; longer datagrams are silently truncated.
pub const MAX_DATAGRAM_SIZE: usize = 256;

fn parse_finite(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|value| value.is_finite())
}

pub(crate) fn parse_latitude(token: &str) -> Result<f64, PacketError> {
    parse_finite(token).ok_or_else(|| PacketError::Latitude(token.to_string()))
}

pub(crate) fn parse_longitude(token: &str) -> Result<f64, PacketError> {
    parse_finite(token).ok_or_else(|| PacketError::Longitude(token.to_string()))
}

pub(crate) fn parse_speed(token: &str) -> Result<f64, PacketError> {
    parse_finite(token).ok_or_else(|| PacketError::Speed(token.to_string()))
}
