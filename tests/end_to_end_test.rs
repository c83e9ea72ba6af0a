mod common;

use common::FakeSidecar;
use generic_sender::client::DaprConnector;
use generic_sender::config::load_config;
use generic_sender::destination::load_destinations;
use generic_sender::sender::{Dispatcher, Driver, clamp_interval};
use serde_json::json;
use std::time::{Duration, Instant};

#[tokio::test]
async fn sends_counter_stamped_messages_to_every_binding() {
    let sidecar = FakeSidecar::start(|_| 204).await;

    let settings = temp_env::with_vars(
        [
            ("OUTPUT_PIPES", Some("q1,kafka://topicA;q2,rabbitmq://topicB")),
            ("INTERVAL", None),
            ("DAPR_HTTP_ENDPOINT", Some(sidecar.endpoint.as_str())),
        ],
        load_config,
    )
    .expect("load_config failed");

    let interval = Duration::from_millis(clamp_interval(settings.interval_ms));
    assert_eq!(interval, Duration::from_millis(1000));

    let destinations = load_destinations(settings.output_pipes.as_deref());
    let connector = DaprConnector::new(settings.sidecar.clone());
    let mut driver = Driver::new(Dispatcher::new(connector, destinations), interval);

    let started = Instant::now();
    let first = driver.tick().await.expect("first dispatch");
    let second = driver.tick().await.expect("second dispatch");
    assert!(started.elapsed() >= Duration::from_millis(2000));

    assert_eq!(first.sent, 2);
    assert_eq!(second.sent, 2);

    let sent: Vec<(String, serde_json::Value)> = sidecar
        .binding_requests()
        .iter()
        .map(|r| (r.path.clone(), r.json()))
        .collect();
    let envelope = |n: u64| {
        json!({
            "data": { "data": format!("Hello from Sender #{}", n) },
            "operation": "create"
        })
    };
    assert_eq!(
        sent,
        vec![
            ("/v1.0/bindings/kafka".to_string(), envelope(0)),
            ("/v1.0/bindings/rabbitmq".to_string(), envelope(0)),
            ("/v1.0/bindings/kafka".to_string(), envelope(1)),
            ("/v1.0/bindings/rabbitmq".to_string(), envelope(1)),
        ]
    );
}

#[tokio::test]
async fn one_failing_binding_does_not_block_the_others() {
    let sidecar = FakeSidecar::start(|r| {
        if r.path.ends_with("/kafka") { 503 } else { 204 }
    })
    .await;

    let mut settings = generic_sender::config::Settings::default();
    settings.sidecar.endpoint = sidecar.endpoint.clone();
    let destinations = load_destinations(Some("q1,kafka://a;q2,redis://b"));
    let dispatcher = Dispatcher::new(DaprConnector::new(settings.sidecar), destinations);

    let report = dispatcher.dispatch("hello").await.expect("dispatch");

    assert_eq!(report.sent, 1);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].destination.name, "q1");
    assert_eq!(sidecar.binding_requests().len(), 2);
}
