use temp_env::with_vars;

use super::*;
use crate::Error;
use crate::SchedulerKind;

#[test]
fn test_defaults() {
    let settings = Settings::default();

    assert_eq!(settings.gateway.scheduler, SchedulerKind::Fixed);
    assert!(
        settings.gateway.worker_threads >= 16,
        "fixed pool defaults to max(2*cpu+1, 16)"
    );
    assert!(!settings.monitoring.prometheus_enabled);
    assert!(settings.validate().is_ok());
}

#[test]
fn test_load_without_any_source_yields_defaults() {
    with_vars::<_, &str, _, _>(
        [
            ("GATEWAY__GATEWAY__SCHEDULER", None),
            ("GATEWAY__GATEWAY__WORKER_THREADS", None),
            ("GATEWAY_CONFIG_PATH", None),
        ],
        || {
            let settings = Settings::load(None).unwrap();
            assert_eq!(settings.gateway.scheduler, SchedulerKind::Fixed);
            assert!(!settings.monitoring.prometheus_enabled);
        },
    );
}

#[test]
fn test_env_overrides_take_priority() {
    with_vars(
        [
            ("GATEWAY__GATEWAY__SCHEDULER", Some("elastic")),
            ("GATEWAY__GATEWAY__WORKER_THREADS", Some("4")),
            ("GATEWAY__MONITORING__PROMETHEUS_PORT", Some("9191")),
        ],
        || {
            let settings = Settings::load(None).unwrap();
            assert_eq!(settings.gateway.scheduler, SchedulerKind::Elastic);
            assert_eq!(settings.gateway.worker_threads, 4);
            assert_eq!(settings.monitoring.prometheus_port, 9191);
        },
    );
}

#[test]
fn test_missing_explicit_config_file_is_an_error() {
    let result = Settings::load(Some("/nonexistent/gateway-config"));
    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
fn test_zero_workers_invalid_for_fixed_scheduler() {
    let config = GatewayConfig {
        scheduler: SchedulerKind::Fixed,
        worker_threads: 0,
    };
    assert!(config.validate().is_err());

    let config = GatewayConfig {
        scheduler: SchedulerKind::Elastic,
        worker_threads: 0,
    };
    assert!(config.validate().is_ok());
}

#[test]
fn test_monitoring_port_validation() {
    let config = MonitoringConfig {
        prometheus_enabled: true,
        prometheus_port: 0,
    };
    assert!(config.validate().is_err());

    let config = MonitoringConfig {
        prometheus_enabled: true,
        prometheus_port: 80,
    };
    assert!(config.validate().is_err(), "privileged port rejected");

    let config = MonitoringConfig {
        prometheus_enabled: true,
        prometheus_port: 9090,
    };
    assert!(config.validate().is_ok());
}
