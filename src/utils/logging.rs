use chrono::Utc;
use chrono_tz::Tz;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Timestamps in the zone named by `LOG_TZ` (IANA name), UTC by default.
#[derive(Clone, Copy)]
struct ZonedTime(Tz);

impl ZonedTime {
    fn from_env() -> Self {
        Self::named(std::env::var("LOG_TZ").ok().as_deref())
    }

    fn named(name: Option<&str>) -> Self {
        let tz = name
            .and_then(|name| name.trim().parse::<Tz>().ok())
            .unwrap_or(Tz::UTC);
        Self(tz)
    }
}

impl FormatTime for ZonedTime {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        let now = Utc::now().with_timezone(&self.0);
        write!(w, "{}", now.format("%Y-%m-%d %H:%M:%S%.3f %Z"))
    }
}

pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info,axum=info"));
    let timer = ZonedTime::from_env();

    // console output, always on
    let console_layer = fmt::layer()
        .with_timer(timer)
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true);

    // file output only when LOG_TO_FILE is set (production)
    let log_to_file = std::env::var("LOG_TO_FILE")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false);

    if log_to_file {
        let log_dir = std::env::var("LOG_DIR").unwrap_or_else(|_| "./logs".to_string());

        // one file per day
        let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "stock-analytics.log");

        let file_layer = fmt::layer()
            .with_timer(timer)
            .with_writer(file_appender)
            .with_ansi(false) // no color codes in files
            .with_target(true)
            .with_thread_ids(true)
            .with_line_number(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(console_layer)
            .with(file_layer)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(console_layer)
            .init();
    }
}
