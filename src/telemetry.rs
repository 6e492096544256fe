use serde_json::{Map, Value};

/// Sink for named timing events.
///
/// Implementations must be fire-and-forget: `record` never blocks the
/// caller and never surfaces errors to it. A slow or failing sink must not
/// affect game-state mutations.
pub trait Telemetry: Send + Sync {
    fn record(&self, event: &str, properties: Map<String, Value>);
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTelemetry;

impl Telemetry for NoopTelemetry {
    fn record(&self, _event: &str, _properties: Map<String, Value>) {}
}

/// Logs events through `tracing` instead of shipping them to a vendor.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingTelemetry;

impl Telemetry for TracingTelemetry {
    fn record(&self, event: &str, properties: Map<String, Value>) {
        tracing::debug!("Telemetry event {}: {}", event, serde_json::Value::Object(properties));
    }
}
