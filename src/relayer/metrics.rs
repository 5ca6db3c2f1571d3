//! Prometheus metrics exposition (SPEC_FULL.md §2.1 ambient stack).
//!
//! Grounded on the `prometheus` crate's registry pattern; exposed over a
//! plain `tiny_http` listener rather than pulling in a full web framework
//! for a single `/metrics` endpoint.

use alloc::string::ToString;
use prometheus::{
    register_histogram_vec_with_registry, register_int_counter_vec_with_registry, Encoder,
    HistogramVec, IntCounterVec, Registry, TextEncoder,
};

pub struct RelayerMetrics {
    registry: Registry,
    pub evidence_emitted_total: IntCounterVec,
    pub evidence_dropped_total: IntCounterVec,
    pub operations_signed_total: IntCounterVec,
    pub xrpl_submit_results_total: IntCounterVec,
    pub contract_rpc_latency_seconds: HistogramVec,
    pub out_of_gas_retries_total: IntCounterVec,
}

impl RelayerMetrics {
    pub fn new() -> Self {
        let registry = Registry::new();

        let evidence_emitted_total = register_int_counter_vec_with_registry!(
            "relayer_evidence_emitted_total",
            "Evidence submissions sent to the contract",
            &["evidence_type"],
            registry
        )
        .expect("metric registration is infallible for unique names");

        let evidence_dropped_total = register_int_counter_vec_with_registry!(
            "relayer_evidence_dropped_total",
            "Observed transactions dropped before evidence was formed",
            &["reason"],
            registry
        )
        .expect("metric registration is infallible for unique names");

        let operations_signed_total = register_int_counter_vec_with_registry!(
            "relayer_operations_signed_total",
            "Pending operations this relayer has signed",
            &["operation_type"],
            registry
        )
        .expect("metric registration is infallible for unique names");

        let xrpl_submit_results_total = register_int_counter_vec_with_registry!(
            "relayer_xrpl_submit_results_total",
            "XRPL submit outcomes by engine result class",
            &["result_class"],
            registry
        )
        .expect("metric registration is infallible for unique names");

        let contract_rpc_latency_seconds = register_histogram_vec_with_registry!(
            "relayer_contract_rpc_latency_seconds",
            "Latency of contract query/execute gRPC calls",
            &["operation"],
            registry
        )
        .expect("metric registration is infallible for unique names");

        let out_of_gas_retries_total = register_int_counter_vec_with_registry!(
            "relayer_out_of_gas_retries_total",
            "Gas-adjustment retries performed by the contract client",
            &["operation"],
            registry
        )
        .expect("metric registration is infallible for unique names");

        Self {
            registry,
            evidence_emitted_total,
            evidence_dropped_total,
            operations_signed_total,
            xrpl_submit_results_total,
            contract_rpc_latency_seconds,
            out_of_gas_retries_total,
        }
    }

    pub fn evidence_emitted(&self) {
        self.evidence_emitted_total
            .with_label_values(&["xrpl_to_coreum_transfer"])
            .inc();
    }

    pub fn evidence_dropped(&self, reason: &str) {
        self.evidence_dropped_total.with_label_values(&[reason]).inc();
    }

    pub fn operation_signed(&self, operation_type: &str) {
        self.operations_signed_total
            .with_label_values(&[operation_type])
            .inc();
    }

    pub fn xrpl_submit_result(&self, engine_result: &str) {
        let class = match engine_result.get(0..3) {
            Some(prefix) => prefix,
            None => "unknown",
        };
        self.xrpl_submit_results_total.with_label_values(&[class]).inc();
    }

    pub fn out_of_gas_retry(&self, operation: &str) {
        self.out_of_gas_retries_total.with_label_values(&[operation]).inc();
    }

    /// Renders the registry in Prometheus text exposition format.
    pub fn encode(&self) -> alloc::string::String {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder
            .encode(&metric_families, &mut buffer)
            .expect("encoding an in-memory buffer cannot fail");
        String::from_utf8(buffer).unwrap_or_default()
    }
}

impl Default for RelayerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

use alloc::string::String;
use alloc::vec::Vec;

/// Serves `/metrics` on a background thread using `tiny_http`, matching the
/// ambient-observability stack called for even though the bridge's own
/// Non-goals exclude richer dashboards.
pub fn spawn_metrics_server(metrics: alloc::sync::Arc<RelayerMetrics>, bind_addr: &str) {
    let server = match tiny_http::Server::http(bind_addr) {
        Ok(server) => server,
        Err(error) => {
            tracing::error!(%error, %bind_addr, "failed to bind metrics listener");
            return;
        }
    };
    std::thread::spawn(move || {
        for request in server.incoming_requests() {
            let body = metrics.encode();
            let response = tiny_http::Response::from_string(body).with_header(
                tiny_http::Header::from_bytes(&b"Content-Type"[..], &b"text/plain; version=0.0.4"[..])
                    .expect("static header is well-formed"),
            );
            let _ = request.respond(response);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_counters_after_increment() {
        let metrics = RelayerMetrics::new();
        metrics.evidence_emitted();
        metrics.evidence_dropped("malformed_memo");
        let text = metrics.encode();
        assert!(text.contains("relayer_evidence_emitted_total"));
        assert!(text.contains("relayer_evidence_dropped_total"));
    }

    #[test]
    fn submit_result_buckets_by_three_letter_prefix() {
        let metrics = RelayerMetrics::new();
        metrics.xrpl_submit_result("tesSUCCESS");
        metrics.xrpl_submit_result("tecPATH_PARTIAL");
        let text = metrics.encode();
        assert!(text.contains("result_class=\"tes\""));
        assert!(text.contains("result_class=\"tec\""));
    }
}
