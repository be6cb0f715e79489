//! Logging subscriber initialisation.

use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::trace::SdkTracerProvider;
use tracing_subscriber::{
    EnvFilter, Registry,
    layer::{Layer, SubscriberExt},
    util::SubscriberInitExt,
};

use crate::config::{ServerConfig, observability::LogFormat};

use super::ObservabilityError;

/// Crates whose chatter is capped at `warn` unless `RUST_LOG` says otherwise.
const QUIET_DEPENDENCIES: &str = "h2=warn,hyper=warn,tonic=warn,opentelemetry=warn,sqlx=warn";

pub(super) fn init_subscriber(
    config: &ServerConfig,
    tracer_provider: Option<&SdkTracerProvider>,
) -> Result<(), ObservabilityError> {
    let filter = build_env_filter(&config.logging.log_level);
    let service_name = &config.observability.otel_service_name;

    match config.logging.log_format {
        LogFormat::Compact => install(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
            filter,
            tracer_provider,
            service_name,
        ),
        LogFormat::Json => install(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(true)
                .with_target(true),
            filter,
            tracer_provider,
            service_name,
        ),
    }
}

fn build_env_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{log_level},{QUIET_DEPENDENCIES}")))
}

fn install<L>(
    fmt_layer: L,
    filter: EnvFilter,
    tracer_provider: Option<&SdkTracerProvider>,
    service_name: &str,
) -> Result<(), ObservabilityError>
where
    L: Layer<Registry> + Send + Sync + 'static,
{
    let subscriber = tracing_subscriber::registry().with(fmt_layer).with(filter);

    if let Some(tracer_provider) = tracer_provider {
        let tracer = tracer_provider.tracer(service_name.to_owned());

        subscriber
            .with(tracing_opentelemetry::layer().with_tracer(tracer))
            .try_init()?;
    } else {
        subscriber.try_init()?;
    }

    Ok(())
}
