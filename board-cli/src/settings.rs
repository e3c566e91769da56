use anyhow::{Result, anyhow};

pub(crate) const DEFAULT_API_URL: &str = "http://127.0.0.1:4000";
pub(crate) const DEFAULT_TOKEN_FILE: &str = ".board_token";
const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone)]
pub(crate) struct Settings {
    pub(crate) api_url: String,
    pub(crate) token_file: String,
    pub(crate) log_level: String,
}

impl Settings {
    pub(crate) fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_url = get_or_default(&lookup, "BOARD_API_URL", DEFAULT_API_URL)?;
        let token_file = get_or_default(&lookup, "BOARD_TOKEN_FILE", DEFAULT_TOKEN_FILE)?;
        let log_level = lookup("LOG_LEVEL")
            .or_else(|| lookup("RUST_LOG"))
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Ok(Self {
            api_url,
            token_file,
            log_level,
        })
    }
}

fn get_or_default(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: &str,
) -> Result<String> {
    let Some(value) = lookup(key) else {
        return Ok(default.to_string());
    };
    let value = value.trim().to_string();
    if value.is_empty() {
        return Err(anyhow!("{key} must not be empty"));
    }
    Ok(value)
}
