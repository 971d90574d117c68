use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use vaxtalk_core::config::{AppConfig, ResponderBackend};
use vaxtalk_infrastructure::SecretStorage;
use vaxtalk_interaction::{FallbackResponder, OpenAiResponder, PoolResponder};

/// Builds the responder the engine will use.
///
/// Missing credentials or an unreadable secret file never stop the CLI;
/// the scripted pool is always available.
pub fn build(config: &AppConfig, seed: Option<u64>) -> FallbackResponder {
    let pool = match seed {
        Some(seed) => PoolResponder::with_seed(seed),
        None => PoolResponder::new(),
    };

    if config.responder.backend != ResponderBackend::OpenAi {
        return FallbackResponder::pool_only(pool);
    }

    let credentials = SecretStorage::new().and_then(|storage| storage.openai_credentials());
    match credentials {
        Ok(Some(creds)) => {
            let primary = OpenAiResponder::from_config(&config.responder, creds.api_key, creds.model_name);
            info!("Using OpenAI responder with model {}", primary.model());
            FallbackResponder::with_primary(
                Arc::new(primary),
                pool,
                Duration::from_secs(config.responder.timeout_secs),
            )
        }
        Ok(None) => {
            warn!("OpenAI backend configured but no API key found, using scripted replies");
            FallbackResponder::pool_only(pool)
        }
        Err(e) => {
            warn!("Failed to read secrets, using scripted replies: {}", e);
            FallbackResponder::pool_only(pool)
        }
    }
}
