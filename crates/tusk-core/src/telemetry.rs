use std::fmt as StdFmt;
use std::sync::OnceLock;

use chrono::Utc;
use serde_json::json;
use thiserror::Error;
use tracing::Subscriber;
use tracing_subscriber::fmt::format::{FormatEvent, FormatFields, Writer};
use tracing_subscriber::fmt::{self, FmtContext};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Registry};

use crate::config::{AppConfig, TelemetryConfig};

static INSTALLED: OnceLock<()> = OnceLock::new();

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("invalid log filter: {0}")]
    Filter(String),
    #[error("failed to set tracing subscriber: {0}")]
    SubscriberInit(String),
}

/// Initialize structured logging. `RUST_LOG` wins over the configured level.
/// JSON output is used outside dev; pretty stderr output for dev. Calling this
/// again after a successful install is a no-op.
pub fn init_telemetry(app: &AppConfig, telemetry: &TelemetryConfig) -> Result<(), TelemetryError> {
    if INSTALLED.get().is_some() {
        return Ok(());
    }

    let env_filter = build_filter(telemetry)?;

    let json_format = !app.env.eq_ignore_ascii_case("dev");
    let result = if json_format {
        let fmt_layer = fmt::layer()
            .event_format(JsonEventFormatter)
            .with_writer(std::io::stderr);
        tracing::subscriber::set_global_default(
            Registry::default().with(fmt_layer).with(env_filter),
        )
    } else {
        let fmt_layer = fmt::layer()
            .with_target(true)
            .pretty()
            .with_writer(std::io::stderr);
        tracing::subscriber::set_global_default(
            Registry::default().with(fmt_layer).with(env_filter),
        )
    };

    match result {
        Ok(()) => {
            let _ = INSTALLED.set(());
            Ok(())
        }
        // Lost a race with a concurrent install of ours.
        Err(_) if INSTALLED.get().is_some() => Ok(()),
        Err(err) => Err(TelemetryError::SubscriberInit(err.to_string())),
    }
}

fn build_filter(telemetry: &TelemetryConfig) -> Result<EnvFilter, TelemetryError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    let level = telemetry.level.as_deref().unwrap_or("info");
    EnvFilter::try_new(level).map_err(|err| TelemetryError::Filter(err.to_string()))
}

/// Basic logging initializer for binaries and tests that do not load a config file.
pub fn init_logging(env: &str) -> Result<(), TelemetryError> {
    let app = AppConfig {
        service_name: "tusk".to_string(),
        env: env.to_string(),
    };
    init_telemetry(&app, &TelemetryConfig::default())
}

#[derive(Default)]
struct JsonEventFormatter;

impl<S, N> FormatEvent<S, N> for JsonEventFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'writer> FormatFields<'writer> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> StdFmt::Result {
        let mut visitor = JsonVisitor::default();
        event.record(&mut visitor);

        let span_name = ctx.lookup_current().map(|span| span.name().to_string());

        let payload = json!({
            "timestamp": Utc::now().to_rfc3339(),
            "level": event.metadata().level().as_str().to_lowercase(),
            "target": event.metadata().target(),
            "span": span_name,
            "fields": visitor.fields,
        });

        let serialized = serde_json::to_string(&payload).map_err(|_| StdFmt::Error)?;
        writer.write_str(&serialized)?;
        writer.write_str("\n")
    }
}

#[derive(Default)]
struct JsonVisitor {
    fields: serde_json::Map<String, serde_json::Value>,
}

impl tracing_subscriber::field::Visit for JsonVisitor {
    fn record_bool(&mut self, field: &tracing::field::Field, value: bool) {
        self.fields.insert(field.name().to_string(), value.into());
    }

    fn record_i64(&mut self, field: &tracing::field::Field, value: i64) {
        self.fields.insert(field.name().to_string(), value.into());
    }

    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.fields.insert(field.name().to_string(), value.into());
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.fields
            .insert(field.name().to_string(), value.to_string().into());
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn StdFmt::Debug) {
        self.fields
            .insert(field.name().to_string(), format!("{value:?}").into());
    }
}
