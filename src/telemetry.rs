use std::{collections::HashMap, io};

use anyhow::{anyhow, Context, Result};
use opentelemetry::{
    global,
    propagation::TextMapPropagator,
    sdk::{
        propagation::{BaggagePropagator, TextMapCompositePropagator, TraceContextPropagator},
        trace as sdktrace, Resource,
    },
    KeyValue,
};
use opentelemetry_otlp::WithExportConfig;
use tracing_subscriber::{
    fmt::{format::FmtSpan, time::UtcTime},
    prelude::__tracing_subscriber_SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};
use url::Url;

const ENDPOINT: &str = "OTLP_ENDPOINT";
const HEADER_PREFIX: &str = "OTLP_";

pub(crate) fn init() -> Result<()> {
    let fmt_env_filter = env_filter_merge_from_environment("info", "EVERMORE_LOG_LEVEL")?;
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_timer(UtcTime::rfc_3339())
        .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
        .with_filter(fmt_env_filter);

    // Export is opt-in: without an endpoint only the fmt layer runs.
    let otel_layer = match std::env::var(ENDPOINT) {
        Ok(endpoint) => {
            global::set_text_map_propagator(new_propagator());
            let tracer = new_tracer(&endpoint).context("Failed to create tracer")?;
            let otel_env_filter =
                env_filter_merge_from_environment("trace,polling=off", "EVERMORE_TRACE_LEVEL")?;
            Some(
                tracing_opentelemetry::layer()
                    .with_tracer(tracer)
                    .with_filter(otel_env_filter),
            )
        },
        Err(_) => None,
    };

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(otel_layer)
        .try_init()
        .context("Failed to set global default tracing subscriber")?;

    Ok(())
}

fn env_filter_merge_from_environment(
    default_directives: &'static str,
    env_var: &'static str,
) -> Result<EnvFilter> {
    let mut filter = EnvFilter::builder()
        .parse(default_directives)
        .with_context(|| anyhow!("Default directives were invalid: {default_directives}"))?;

    if let Ok(env_value) = std::env::var(env_var) {
        for env_directive in env_value.split(',') {
            match env_directive.parse() {
                Ok(directive) => filter = filter.add_directive(directive),
                Err(err) => eprintln!("WARN ignoring log directive: {env_directive:?}: {err}"),
            }
        }
    }

    Ok(filter)
}

fn new_propagator() -> impl TextMapPropagator {
    TextMapCompositePropagator::new(vec![
        Box::new(BaggagePropagator::new()),
        Box::new(TraceContextPropagator::new()),
    ])
}

/// Collects `OTLP_*` variables (other than the endpoint) as exporter headers,
/// `OTLP_X_API_KEY` becoming `x-api-key`.
fn otlp_headers(vars: impl Iterator<Item = (String, String)>) -> HashMap<String, String> {
    vars.filter(|(name, _)| name != ENDPOINT)
        .filter_map(|(name, value)| {
            let header_name = name
                .strip_prefix(HEADER_PREFIX)?
                .replace('_', "-")
                .to_ascii_lowercase();
            Some((header_name, value))
        })
        .collect()
}

fn grpc_target(endpoint: &str) -> Result<String> {
    let url = Url::parse(endpoint).with_context(|| anyhow!("Invalid {ENDPOINT}: {endpoint}"))?;
    let host = url
        .host_str()
        .ok_or_else(|| anyhow!("{ENDPOINT} has no host: {endpoint}"))?;
    let port = url
        .port_or_known_default()
        .ok_or_else(|| anyhow!("{ENDPOINT} has no port: {endpoint}"))?;
    Ok(format!("{}:{}", host, port))
}

fn new_tracer(endpoint: &str) -> Result<sdktrace::Tracer> {
    let target = grpc_target(endpoint)?;
    let headers = otlp_headers(std::env::vars());

    let exporter = opentelemetry_otlp::new_exporter()
        .grpcio()
        .with_endpoint(target)
        .with_headers(headers)
        .with_tls(true);

    let tracer = opentelemetry_otlp::new_pipeline()
        .tracing()
        .with_exporter(exporter)
        .with_trace_config(
            sdktrace::config().with_resource(Resource::new(vec![KeyValue::new(
                opentelemetry_semantic_conventions::resource::SERVICE_NAME,
                "evermore",
            )])),
        )
        .install_batch(opentelemetry::runtime::AsyncStd)?;

    Ok(tracer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_come_from_prefixed_variables() {
        let vars = vec![
            ("OTLP_ENDPOINT".to_string(), "https://collector:4317".to_string()),
            ("OTLP_X_API_KEY".to_string(), "secret".to_string()),
            ("HOME".to_string(), "/root".to_string()),
        ];
        let headers = otlp_headers(vars.into_iter());
        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get("x-api-key").map(String::as_str), Some("secret"));
    }

    #[test]
    fn grpc_target_uses_known_default_port() {
        assert_eq!(grpc_target("https://collector.example").unwrap(), "collector.example:443");
        assert_eq!(grpc_target("http://localhost:4317").unwrap(), "localhost:4317");
        assert!(grpc_target("not a url").is_err());
    }
}
