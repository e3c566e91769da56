use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt};

const FALLBACK_LEVEL: &str = "warn";

/// `RUST_LOG` важнее настройки; некорректный уровень заменяется на `warn`.
fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new(FALLBACK_LEVEL))
}

/// Логи идут в stderr, stdout остаётся за выводом команд (в том числе `--json`).
pub(crate) fn init_logging(level: &str) -> Result<()> {
    fmt()
        .with_env_filter(build_filter(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .compact()
        .try_init()
        .map_err(|e| anyhow!("failed to init logging: {e}"))
}
