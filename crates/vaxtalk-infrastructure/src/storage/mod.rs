//! Loading of `config.toml` and `secret.json`.

mod config_loader;
mod secret_storage;

pub use config_loader::ConfigLoader;
pub use secret_storage::{OpenAiCredentials, SecretStorage, resolve_openai};
