use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounterVec, IntGauge, Opts, Registry, TextEncoder,
};

#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    pub guard_decisions_total: IntCounterVec,
    pub status_updates_total: IntCounterVec,
    pub status_updates_in_flight: IntGauge,
    pub upstream_request_seconds: HistogramVec,
}

impl Metrics {
    pub fn new() -> Self {
        let registry = Registry::new();

        let guard_decisions_total = IntCounterVec::new(
            Opts::new(
                "guard_decisions_total",
                "Status update pre-flight decisions by outcome",
            ),
            &["decision"],
        )
        .expect("valid guard_decisions_total metric");

        let status_updates_total = IntCounterVec::new(
            Opts::new(
                "status_updates_total",
                "Status updates forwarded to the ride api by outcome",
            ),
            &["outcome"],
        )
        .expect("valid status_updates_total metric");

        let status_updates_in_flight = IntGauge::new(
            "status_updates_in_flight",
            "Status updates currently awaiting the ride api",
        )
        .expect("valid status_updates_in_flight metric");

        let upstream_request_seconds = HistogramVec::new(
            HistogramOpts::new(
                "upstream_request_seconds",
                "Latency of ride api requests in seconds",
            ),
            &["operation"],
        )
        .expect("valid upstream_request_seconds metric");

        registry
            .register(Box::new(guard_decisions_total.clone()))
            .expect("register guard_decisions_total");
        registry
            .register(Box::new(status_updates_total.clone()))
            .expect("register status_updates_total");
        registry
            .register(Box::new(status_updates_in_flight.clone()))
            .expect("register status_updates_in_flight");
        registry
            .register(Box::new(upstream_request_seconds.clone()))
            .expect("register upstream_request_seconds");

        Self {
            registry,
            guard_decisions_total,
            status_updates_total,
            status_updates_in_flight,
            upstream_request_seconds,
        }
    }

    pub fn encode(&self) -> Result<String, String> {
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();

        TextEncoder::new()
            .encode(&metric_families, &mut buffer)
            .map_err(|err| format!("failed to encode metrics: {err}"))?;

        String::from_utf8(buffer).map_err(|err| format!("metrics are not valid utf8: {err}"))
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
