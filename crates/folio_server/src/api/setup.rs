use anyhow::Context;
use folio_settings::LoggingSettings;
use std::io;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;

const DEFAULT_TIME_PATTERN: &str =
    "[year]-[month]-[day]T[hour repr:24]:[minute]:[second]::[subsecond digits:4]";

pub async fn setup_logging(settings: &LoggingSettings) -> Result<(), anyhow::Error> {
    let time_format = time::format_description::parse(DEFAULT_TIME_PATTERN)
        .with_context(|| "Invalid log time format")?;

    let filter = EnvFilter::try_new(&settings.level).unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(true)
        .with_timer(UtcTime::new(time_format))
        .with_writer(io::stdout);

    let result = if settings.json {
        builder.json().flatten_event(true).try_init()
    } else {
        builder.with_ansi(true).try_init()
    };

    result.map_err(|e| anyhow::anyhow!("Failed to setup logging: {e}"))
}
