//! Relay state owned by the ingest path.
//!
//! Both stores are append-only for the life of the process: entries are created on first
//! use and never removed. They are plain owned values, mutated only through `&mut self`
//! by whoever owns the ingest loop.

pub(crate) mod fleet_store;
pub(crate) mod subscriber_registry;

pub use fleet_store::FleetStore;
pub use subscriber_registry::SubscriberRegistry;
