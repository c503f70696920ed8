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

mod support;

use fleet_relay::{AgentId, DispatchOutcome, Disposition, PacketError};
use std::time::Duration;
use support::{endpoint, init_logging, make_relay, make_slow_relay};

const FIRST_REPORT: &str = "2024-01-01T00:00:00.000000000Z V1 53.344496 -6.259427";

#[tokio::test]
async fn subscribe_then_report_yields_exact_update() {
    init_logging();
    let (mut relay, sink) = make_relay(32);
    let subscriber = endpoint(8001);

    assert_eq!(
        relay.handle_datagram(subscriber, b"SUBSCRIBE V1").await,
        Disposition::Subscribed {
            agent_id: AgentId::from("V1"),
            subscriber_count: 1,
        }
    );
    relay.handle_datagram(endpoint(40000), FIRST_REPORT.as_bytes()).await;
    relay.shutdown();

    assert_eq!(
        sink.delivered(),
        vec![(
            subscriber,
            "2024-01-01T00:00:00.000000000Z V1 53.344496 -6.259427 -1.000000".to_string()
        )]
    );
}

#[tokio::test]
async fn malformed_subscription_leaves_registry_unchanged() {
    init_logging();
    let (mut relay, sink) = make_relay(32);

    assert_eq!(
        relay.handle_datagram(endpoint(8001), b"SUBSCRIBE").await,
        Disposition::Dropped(PacketError::SubscribeTokenCount(1))
    );
    assert_eq!(
        relay.handle_datagram(endpoint(8001), b"SUBSCRIBE V1 extra").await,
        Disposition::Dropped(PacketError::SubscribeTokenCount(3))
    );
    assert_eq!(relay.subscribers().agent_count(), 0);

    relay.handle_datagram(endpoint(40000), FIRST_REPORT.as_bytes()).await;
    relay.shutdown();
    assert!(sink.delivered().is_empty());
}

#[tokio::test]
async fn two_subscribers_receive_identical_updates_in_order() {
    init_logging();
    let (mut relay, sink) = make_relay(32);
    let first = endpoint(8001);
    let second = endpoint(8002);

    relay.handle_datagram(first, b"SUBSCRIBE V1").await;
    relay.handle_datagram(second, b"SUBSCRIBE V1").await;
    for second_offset in 0..5 {
        let report = format!("2024-01-01T00:00:0{second_offset}.000000000Z V1 0.0 0.000{second_offset}");
        relay.handle_datagram(endpoint(40000), report.as_bytes()).await;
    }
    relay.shutdown();

    let to_first = sink.delivered_to(first);
    let to_second = sink.delivered_to(second);
    assert_eq!(to_first.len(), 5);
    assert_eq!(to_first, to_second);
    for (index, update) in to_first.iter().enumerate() {
        assert!(update.starts_with(&format!("2024-01-01T00:00:0{index}.000000000Z V1 ")));
    }
}

#[tokio::test]
async fn report_without_subscribers_records_history_only() {
    init_logging();
    let (mut relay, sink) = make_relay(32);

    let disposition = relay
        .handle_datagram(endpoint(40000), FIRST_REPORT.as_bytes())
        .await;

    assert_eq!(
        disposition,
        Disposition::Recorded {
            agent_id: AgentId::from("V1"),
            dispatch: DispatchOutcome::Skipped,
        }
    );
    let history = relay.fleet().history("V1").expect("history created");
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].latitude, 53.344496);
    relay.shutdown();
    assert!(sink.delivered().is_empty());
}

#[tokio::test]
async fn duplicate_subscription_causes_duplicate_delivery() {
    init_logging();
    let (mut relay, sink) = make_relay(32);
    let subscriber = endpoint(8001);

    relay.handle_datagram(subscriber, b"SUBSCRIBE V1").await;
    assert_eq!(
        relay.handle_datagram(subscriber, b"SUBSCRIBE V1").await,
        Disposition::Subscribed {
            agent_id: AgentId::from("V1"),
            subscriber_count: 2,
        }
    );
    relay.handle_datagram(endpoint(40000), FIRST_REPORT.as_bytes()).await;
    relay.shutdown();

    let delivered = sink.delivered_to(subscriber);
    assert_eq!(delivered.len(), 2);
    assert_eq!(delivered[0], delivered[1]);
}

#[tokio::test]
async fn subscriptions_are_per_agent() {
    init_logging();
    let (mut relay, sink) = make_relay(32);
    let watcher = endpoint(8001);

    relay.handle_datagram(watcher, b"SUBSCRIBE V2").await;
    relay.handle_datagram(endpoint(40000), FIRST_REPORT.as_bytes()).await;
    relay
        .handle_datagram(
            endpoint(40001),
            b"2024-01-01T00:00:00.000000000Z V2 10.0 20.0",
        )
        .await;
    relay.shutdown();

    let delivered = sink.delivered();
    assert_eq!(delivered.len(), 1);
    assert_eq!(
        delivered[0].1,
        "2024-01-01T00:00:00.000000000Z V2 10.000000 20.000000 -1.000000"
    );
}

#[tokio::test]
async fn speed_follows_the_two_second_window() {
    init_logging();
    let (mut relay, sink) = make_relay(32);
    let subscriber = endpoint(8001);

    relay.handle_datagram(subscriber, b"SUBSCRIBE V1").await;
    for report in [
        "2024-01-01T00:00:00Z V1 0.0 0.0",
        "2024-01-01T00:00:01Z V1 0.0 0.0001",
        "2024-01-01T00:00:03Z V1 0.0 0.0002",
        "2024-01-01T00:00:03.5Z V1 0.0 0.0002",
    ] {
        relay.handle_datagram(endpoint(40000), report.as_bytes()).await;
    }
    relay.shutdown();

    let speeds: Vec<String> = sink
        .delivered_to(subscriber)
        .iter()
        .map(|update| update.rsplit(' ').next().unwrap_or_default().to_string())
        .collect();
    assert_eq!(speeds, vec!["-1.000000", "11.119508", "-1.000000", "0.000000"]);
}

#[tokio::test]
async fn truncated_report_is_dropped() {
    init_logging();
    let (mut relay, _sink) = make_relay(32);

    let disposition = relay
        .handle_datagram(endpoint(40000), b"2024-01-01T00:00:00Z V1 53.3")
        .await;

    assert_eq!(
        disposition,
        Disposition::Dropped(PacketError::PositionTokenCount(3))
    );
    assert!(relay.fleet().history("V1").is_none());
    relay.shutdown();
}

#[tokio::test]
async fn full_queue_delays_ingest_instead_of_dropping() {
    init_logging();
    let (mut relay, sink) = make_slow_relay(2, Duration::from_millis(20));
    let subscriber = endpoint(8001);

    relay.handle_datagram(subscriber, b"SUBSCRIBE V1").await;
    for second in 0..10 {
        let report = format!("2024-01-01T00:00:{second:02}Z V1 53.344496 -6.259427");
        let disposition = relay
            .handle_datagram(endpoint(40000), report.as_bytes())
            .await;
        assert_eq!(
            disposition,
            Disposition::Recorded {
                agent_id: AgentId::from("V1"),
                dispatch: DispatchOutcome::Enqueued(1),
            }
        );
    }
    assert_eq!(relay.fleet().history("V1").map(<[_]>::len), Some(10));
    relay.shutdown();

    let delivered = sink.delivered_to(subscriber);
    assert_eq!(delivered.len(), 10);
    for (second, update) in delivered.iter().enumerate() {
        assert!(update.starts_with(&format!("2024-01-01T00:00:{second:02}.000000000Z V1 ")));
    }
}

#[tokio::test]
async fn reordered_report_yields_negative_speed() {
    init_logging();
    let (mut relay, sink) = make_relay(32);
    let subscriber = endpoint(8001);

    relay.handle_datagram(subscriber, b"SUBSCRIBE V1").await;
    relay
        .handle_datagram(endpoint(40000), b"2024-01-01T00:00:01Z V1 0.0 0.0")
        .await;
    relay
        .handle_datagram(endpoint(40000), b"2024-01-01T00:00:00Z V1 0.0 0.0001")
        .await;
    relay.shutdown();

    assert_eq!(
        sink.delivered_to(subscriber)[1],
        "2024-01-01T00:00:00.000000000Z V1 0.000000 0.000100 -11.119508"
    );
}

#[tokio::test]
async fn non_utf8_agent_ids_are_rejected_not_merged() {
    init_logging();
    let (mut relay, _sink) = make_relay(32);

    let first = relay
        .handle_datagram(endpoint(40000), b"2024-01-01T00:00:00Z V\xff1 1.0 2.0")
        .await;
    let second = relay
        .handle_datagram(endpoint(40000), b"2024-01-01T00:00:00Z V\xfe1 1.0 2.0")
        .await;

    assert_eq!(first, Disposition::Dropped(PacketError::Encoding(22)));
    assert_eq!(second, Disposition::Dropped(PacketError::Encoding(22)));
    assert_eq!(relay.fleet().agent_count(), 0);
    relay.shutdown();
}
