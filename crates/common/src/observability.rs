//! Prometheus metrics shared by the server and its middleware.

use once_cell::sync::Lazy;
use prometheus::{
    register_histogram_vec, register_int_counter, register_int_counter_vec, Encoder, HistogramVec,
    IntCounter, IntCounterVec, TextEncoder,
};

pub static REQUESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "phonebook_requests_total",
        "Total HTTP requests handled, by method and status",
        &["method", "status"]
    )
    .expect("register requests_total")
});

pub static REQUEST_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    register_histogram_vec!(
        "phonebook_request_duration_seconds",
        "Request duration in seconds",
        &["method"],
        vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5]
    )
    .expect("register request_duration")
});

pub static PERSONS_ADDED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "phonebook_persons_added_total",
        "Total persons added to the directory"
    )
    .expect("register persons_added_total")
});

pub static PERSONS_DELETED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "phonebook_persons_deleted_total",
        "Total persons removed from the directory"
    )
    .expect("register persons_deleted_total")
});

/// Record one finished HTTP request.
pub fn observe_request(method: &str, status: u16, elapsed_secs: f64) {
    REQUESTS_TOTAL
        .with_label_values(&[method, &status.to_string()])
        .inc();
    REQUEST_DURATION
        .with_label_values(&[method])
        .observe(elapsed_secs);
}

/// Render the default registry in the Prometheus text format.
pub fn encode_metrics() -> (axum::http::StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (
        axum::http::StatusCode::OK,
        String::from_utf8(buffer).unwrap_or_default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observed_requests_show_up_in_output() {
        observe_request("GET", 200, 0.002);
        PERSONS_ADDED_TOTAL.inc();
        let (status, body) = encode_metrics();
        assert_eq!(status, axum::http::StatusCode::OK);
        assert!(body.contains("phonebook_requests_total"));
        assert!(body.contains("phonebook_persons_added_total"));
    }
}
