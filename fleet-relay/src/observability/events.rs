//! Canonical structured event names used across `fleet-relay`.

// Ingress events.
pub const INGRESS_LISTENING: &str = "ingress_listening";
pub const INGRESS_RECEIVE: &str = "ingress_receive";
pub const INGRESS_RECV_FAILED: &str = "ingress_recv_failed";
pub const INGRESS_DROP_INVALID_PACKET: &str = "ingress_drop_invalid_packet";

// State events.
pub const SUBSCRIBER_REGISTERED: &str = "subscriber_registered";
pub const POSITION_RECORDED: &str = "position_recorded";

// Dispatch queue events.
pub const DISPATCH_ENQUEUED: &str = "dispatch_enqueued";
pub const DISPATCH_QUEUE_FULL: &str = "dispatch_queue_full";
pub const DISPATCH_QUEUE_CLOSED: &str = "dispatch_queue_closed";

// Egress worker events.
pub const EGRESS_SEND_ATTEMPT: &str = "egress_send_attempt";
pub const EGRESS_SEND_OK: &str = "egress_send_ok";
pub const EGRESS_SEND_FAILED: &str = "egress_send_failed";
pub const EGRESS_RECV_CLOSED: &str = "egress_recv_closed";
pub const EGRESS_WORKER_JOIN_FAILED: &str = "egress_worker_join_failed";

// Runtime events.
pub const RUNTIME_THREAD_NAME_FALLBACK: &str = "runtime_thread_name_fallback";
pub const RUNTIME_SPAWN_OK: &str = "runtime_spawn_ok";
pub const RUNTIME_SPAWN_FAILED: &str = "runtime_spawn_failed";
