use serial_test::serial;

use super::*;

fn create_test_registry() -> Registry {
    let registry = Registry::new_custom(Some("swiftgate".to_string()), None).unwrap();
    register_custom_metrics(&registry);
    registry
}

#[test]
#[serial]
fn test_custom_registry() {
    let registry = create_test_registry();

    REQUEST_TOTAL_METRIC.inc();
    let metrics = registry.gather();
    assert!(!metrics.is_empty());

    let metric_names: Vec<_> = metrics.iter().map(|m| m.get_name()).collect();
    assert!(
        metric_names.contains(&"swiftgate_request_total"),
        "Missing swiftgate_request_total"
    );
    assert!(
        metric_names.contains(&"swiftgate_request_latency_seconds"),
        "Missing swiftgate_request_latency_seconds"
    );
}

#[test]
#[serial]
fn test_probe_counts_when_enabled() {
    let probe = MetricsProbe::new(&MonitoringConfig {
        prometheus_enabled: true,
        prometheus_port: 9090,
    });

    let before = REQUEST_TOTAL_METRIC.get();
    probe.request_inc();
    probe.request_inc();
    assert_eq!(REQUEST_TOTAL_METRIC.get(), before + 2);
}

#[test]
#[serial]
fn test_probe_disabled_is_noop() {
    let probe = MetricsProbe::disabled();

    let before = REQUEST_TOTAL_METRIC.get();
    probe.request_inc();
    assert_eq!(REQUEST_TOTAL_METRIC.get(), before);
    assert!(probe.start_request_timer().is_none());
}

#[test]
#[serial]
fn test_timer_observes_exactly_one_sample() {
    let probe = MetricsProbe::new(&MonitoringConfig {
        prometheus_enabled: true,
        prometheus_port: 9090,
    });

    let before = REQUEST_LATENCY_METRIC.get_sample_count();
    let timer = probe.start_request_timer().unwrap();
    timer.observe_duration();
    assert_eq!(REQUEST_LATENCY_METRIC.get_sample_count(), before + 1);
}

#[test]
#[serial]
fn test_discarded_timer_records_nothing() {
    let probe = MetricsProbe::new(&MonitoringConfig {
        prometheus_enabled: true,
        prometheus_port: 9090,
    });

    let before = REQUEST_LATENCY_METRIC.get_sample_count();
    let timer = probe.start_request_timer().unwrap();
    timer.stop_and_discard();
    assert_eq!(REQUEST_LATENCY_METRIC.get_sample_count(), before);
}
