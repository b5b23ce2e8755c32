use std::env;

use crate::error::BotError;

#[derive(Debug)]
pub struct Config {
    pub token: String,
    pub db_url: Option<String>,
    pub sentry_url: Option<String>,
}

fn read_from_env(name: &str) -> Result<String, BotError> {
    env::var(name).map_err(|_| BotError::Config(format!("Can't read {} from env", name)))
}

fn read_optional(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

impl Config {
    pub fn init() -> Result<Self, BotError> {
        let token = read_from_env("TELOXIDE_TOKEN")?;
        let db_url = read_optional("DB_URL");
        let sentry_url = read_optional("SENTRY_URL");

        Ok(Config {
            token,
            db_url,
            sentry_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_variable_is_a_config_error() {
        let err = read_from_env("ZABOTA_BOT_SURELY_UNSET_VARIABLE").unwrap_err();
        assert!(matches!(err, BotError::Config(_)));
    }

    #[test]
    fn unset_optional_is_none() {
        assert_eq!(read_optional("ZABOTA_BOT_SURELY_UNSET_VARIABLE"), None);
    }
}
