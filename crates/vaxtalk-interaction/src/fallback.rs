//! Timeout and degrade-to-pool wrapper around an optional primary provider.

use crate::pool_responder::PoolResponder;
use crate::provider::{ReplyRequest, ResponseProvider};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;
use vaxtalk_core::Result;

pub const DEFAULT_PRIMARY_TIMEOUT: Duration = Duration::from_secs(10);

/// The provider the engine holds.
///
/// When a primary provider is configured it is tried first, bounded by
/// `timeout`. An error, a timeout or a blank reply falls back to the
/// scripted pool, so a turn never fails because of the primary.
pub struct FallbackResponder {
    primary: Option<Arc<dyn ResponseProvider>>,
    pool: PoolResponder,
    timeout: Duration,
}

impl FallbackResponder {
    /// Pool-only responder.
    pub fn pool_only(pool: PoolResponder) -> Self {
        Self {
            primary: None,
            pool,
            timeout: DEFAULT_PRIMARY_TIMEOUT,
        }
    }

    pub fn with_primary(primary: Arc<dyn ResponseProvider>, pool: PoolResponder, timeout: Duration) -> Self {
        Self {
            primary: Some(primary),
            pool,
            timeout,
        }
    }

    pub fn has_primary(&self) -> bool {
        self.primary.is_some()
    }
}

impl Default for FallbackResponder {
    fn default() -> Self {
        Self::pool_only(PoolResponder::new())
    }
}

#[async_trait]
impl ResponseProvider for FallbackResponder {
    async fn generate_reply(&self, request: &ReplyRequest<'_>) -> Result<String> {
        if let Some(primary) = &self.primary {
            match tokio::time::timeout(self.timeout, primary.generate_reply(request)).await {
                Ok(Ok(reply)) if !reply.trim().is_empty() => return Ok(reply.trim().to_string()),
                Ok(Ok(_)) => warn!("Primary responder returned a blank reply, using scripted pool"),
                Ok(Err(e)) => warn!("Primary responder failed, using scripted pool: {}", e),
                Err(_) => warn!(
                    "Primary responder timed out after {:?}, using scripted pool",
                    self.timeout
                ),
            }
        }

        self.pool.generate_reply(request).await
    }
}
