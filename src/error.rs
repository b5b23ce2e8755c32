use sea_orm::DbErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    #[error("Send error: {0}")]
    Send(String),

    #[error("Storage error: {0}")]
    Storage(#[from] DbErr),

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    #[error("Config error: {0}")]
    Config(String),
}

/// A failure inside one rule handler, tagged with the handler that raised it.
#[derive(Error, Debug)]
#[error("{handler}: {source}")]
pub struct DispatchError {
    pub handler: &'static str,
    #[source]
    pub source: BotError,
}

impl DispatchError {
    pub fn new(handler: &'static str, source: BotError) -> Self {
        Self { handler, source }
    }
}
