use lazy_static::lazy_static;
use prometheus::exponential_buckets;
use prometheus::Histogram;
use prometheus::HistogramOpts;
use prometheus::HistogramTimer;
use prometheus::IntCounter;
use prometheus::Registry;
use tokio::sync::watch;
use warp::Filter;
use warp::Rejection;
use warp::Reply;

use crate::MonitoringConfig;

#[cfg(test)]
mod metrics_test;

lazy_static! {
    pub static ref REQUEST_TOTAL_METRIC: IntCounter = IntCounter::new(
        "request_total",
        "Total inbound requests accepted by the gateway"
    )
    .expect("metric can not be created");

    pub static ref REQUEST_LATENCY_METRIC: Histogram = Histogram::with_opts(
        HistogramOpts::new(
            "request_latency_seconds",
            "Histogram of whole-chain request latency in seconds"
        )
        .buckets(exponential_buckets(0.001, 2.0, 14).unwrap())
    )
    .expect("metric can not be created");

    pub static ref REGISTRY: Registry = Registry::new();
}

fn register_custom_metrics(registry: &Registry) {
    registry
        .register(Box::new(REQUEST_TOTAL_METRIC.clone()))
        .expect("collector can be registered");
    registry
        .register(Box::new(REQUEST_LATENCY_METRIC.clone()))
        .expect("collector can be registered");
}

/// Serve the `/metrics` scrape endpoint until the shutdown signal fires.
pub async fn start_server(
    port: u16,
    mut shutdown_signal: watch::Receiver<()>,
) {
    register_custom_metrics(&REGISTRY);

    let metrics_route = warp::path!("metrics").and_then(metrics_handler);

    let (_, server) = warp::serve(metrics_route).bind_with_graceful_shutdown(
        ([0, 0, 0, 0], port),
        async move {
            let _ = shutdown_signal.changed().await;
        },
    );
    server.await;
}

async fn metrics_handler() -> Result<impl Reply, Rejection> {
    use prometheus::Encoder;
    let encoder = prometheus::TextEncoder::new();

    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&REGISTRY.gather(), &mut buffer) {
        eprintln!("could not encode custom metrics: {}", e);
    };
    let res = match String::from_utf8(buffer) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("custom metrics could not be from_utf8'd: {}", e);
            String::default()
        }
    };
    Ok(res)
}

/// Counts requests and times whole-chain execution.
///
/// When monitoring is disabled every call degrades to a complete no-op;
/// the absence of a metrics backend is never an error.
#[derive(Debug, Clone)]
pub struct MetricsProbe {
    enabled: bool,
}

impl MetricsProbe {
    pub fn new(config: &MonitoringConfig) -> Self {
        Self {
            enabled: config.prometheus_enabled,
        }
    }

    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    pub fn request_inc(&self) {
        if self.enabled {
            REQUEST_TOTAL_METRIC.inc();
        }
    }

    /// Start the latency timer; None when the backend is disabled. The
    /// caller either observes the timer once or discards it.
    pub fn start_request_timer(&self) -> Option<HistogramTimer> {
        if self.enabled {
            Some(REQUEST_LATENCY_METRIC.start_timer())
        } else {
            None
        }
    }
}
