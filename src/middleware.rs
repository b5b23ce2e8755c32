use std::time::Instant;

use async_trait::async_trait;

use crate::{
    error::DispatchError,
    types::{IncomingEvent, Reply},
};

#[async_trait]
pub trait EventHandler: Send + Sync {
    async fn handle(&self, event: &IncomingEvent) -> Result<Reply, DispatchError>;
}

/// Logs every event handled by the inner handler and reports failures to Sentry.
pub struct Instrumented<H> {
    inner: H,
}

impl<H> Instrumented<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<H: EventHandler> EventHandler for Instrumented<H> {
    async fn handle(&self, event: &IncomingEvent) -> Result<Reply, DispatchError> {
        if event.is_callback {
            log::info!(
                "[{}][{}] Callback: {}",
                event.user_name,
                event.user_id.0,
                event.text
            );
        } else {
            log::info!("[{}][{}] {}", event.user_name, event.user_id.0, event.text);
        }

        let started = Instant::now();
        let result = self.inner.handle(event).await;
        let elapsed = started.elapsed();

        match &result {
            Ok(reply) => log::info!(
                "[{}] replied with {:?} in {:?}",
                event.user_id.0,
                reply,
                elapsed
            ),
            Err(err) => {
                log::error!(
                    "[{}] error processing event in {:?}: {}",
                    event.user_id.0,
                    elapsed,
                    err
                );
                sentry::capture_error(err);
            }
        }

        result
    }
}
