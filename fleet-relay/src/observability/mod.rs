//! Structured logging vocabulary.
//!
//! Library code emits `tracing` events using the names in [`events`] and the keys in
//! [`fields`]. It never installs a global subscriber; binaries and tests do that once at
//! the process boundary.

pub mod events;
pub mod fields;
