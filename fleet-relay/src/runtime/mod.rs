//! Runtime integration layer.
//!
//! Keeps thread and async-runtime boundaries in one place so the dispatch path does not
//! need to know how its worker is hosted.

pub(crate) mod worker_runtime;
