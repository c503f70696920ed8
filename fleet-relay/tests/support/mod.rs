use async_trait::async_trait;
use fleet_relay::{FleetRelay, SubscriberEndpoint, UpdateSink};
use std::io;
use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

static INIT_LOGGING: Once = Once::new();

pub(crate) fn init_logging() {
    INIT_LOGGING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    });
}

/// Captures every delivery in order instead of touching the network.
///
/// A non-zero `delay` makes each send take that long, which keeps the egress worker busy.
#[allow(dead_code)]
#[derive(Default)]
pub(crate) struct RecordingSink {
    delay: Duration,
    delivered: Mutex<Vec<(SubscriberEndpoint, String)>>,
}

impl RecordingSink {
    #[allow(dead_code)]
    pub(crate) fn delivered(&self) -> Vec<(SubscriberEndpoint, String)> {
        self.delivered.lock().expect("sink lock").clone()
    }

    #[allow(dead_code)]
    pub(crate) fn delivered_to(&self, target: SubscriberEndpoint) -> Vec<String> {
        self.delivered()
            .into_iter()
            .filter(|(endpoint, _)| *endpoint == target)
            .map(|(_, payload)| payload)
            .collect()
    }
}

#[async_trait]
impl UpdateSink for RecordingSink {
    async fn send_update(&self, target: SubscriberEndpoint, payload: &str) -> io::Result<()> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.delivered
            .lock()
            .expect("sink lock")
            .push((target, payload.to_string()));
        Ok(())
    }
}

#[allow(dead_code)]
pub(crate) fn make_relay(message_queue_size: usize) -> (FleetRelay, Arc<RecordingSink>) {
    make_slow_relay(message_queue_size, Duration::ZERO)
}

#[allow(dead_code)]
pub(crate) fn make_slow_relay(
    message_queue_size: usize,
    delay: Duration,
) -> (FleetRelay, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink {
        delay,
        ..RecordingSink::default()
    });
    let relay = FleetRelay::new(sink.clone(), message_queue_size)
        .expect("relay creation should succeed");
    (relay, sink)
}

#[allow(dead_code)]
pub(crate) fn endpoint(port: u16) -> SubscriberEndpoint {
    SubscriberEndpoint::from(([127, 0, 0, 1], port))
}
