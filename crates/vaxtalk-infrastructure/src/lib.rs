//! Filesystem concerns for VaxTalk: where configuration lives and how it
//! is loaded.

pub mod paths;
pub mod storage;

pub use crate::paths::VaxtalkPaths;
pub use crate::storage::{ConfigLoader, OpenAiCredentials, SecretStorage};
