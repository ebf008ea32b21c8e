use once_cell::sync::Lazy;
use prometheus::{
    register_histogram, register_int_counter_vec, Encoder, Histogram, IntCounterVec, TextEncoder,
};

// Prometheus metrics (default registry)
pub static CONTENT_REQUESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "site_content_requests_total",
        "Requests sent to the content store",
        &["collection"]
    )
    .expect("register content_requests_total")
});

pub static CONTENT_FAILURES_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "site_content_failures_total",
        "Content store requests that produced no content",
        &["collection", "kind"]
    )
    .expect("register content_failures_total")
});

pub static CONTENT_REQUEST_DURATION: Lazy<Histogram> = Lazy::new(|| {
    register_histogram!(
        "site_content_request_duration_seconds",
        "Content store request duration in seconds",
        vec![0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0]
    )
    .expect("register content_request_duration")
});

pub static CONTACT_SUBMISSIONS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "site_contact_submissions_total",
        "Contact form submissions by outcome",
        &["outcome"]
    )
    .expect("register contact_submissions_total")
});

/// Render the default registry in the Prometheus text format.
pub fn gather_text() -> String {
    // touch the lazies so series show up before the first request
    Lazy::force(&CONTENT_REQUESTS_TOTAL);
    Lazy::force(&CONTENT_FAILURES_TOTAL);
    Lazy::force(&CONTENT_REQUEST_DURATION);
    Lazy::force(&CONTACT_SUBMISSIONS_TOTAL);

    let encoder = TextEncoder::new();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&prometheus::gather(), &mut buffer) {
        tracing::error!(error = %e, "failed to encode metrics");
        return String::new();
    }
    String::from_utf8(buffer).unwrap_or_default()
}
