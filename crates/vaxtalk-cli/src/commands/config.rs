use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use vaxtalk_core::config::AppConfig;
use vaxtalk_infrastructure::{ConfigLoader, SecretStorage};

pub fn run(config: &AppConfig, override_path: Option<&Path>) -> Result<()> {
    let loader = match override_path {
        Some(path) => ConfigLoader::with_path(path),
        None => ConfigLoader::new()?,
    };
    let secrets = SecretStorage::new()?;

    println!("{} {}", "config:".bright_black(), loader.path().display());
    println!("{} {}", "secrets:".bright_black(), secrets.path().display());
    println!();
    print!("{}", ConfigLoader::render(config)?);
    Ok(())
}
