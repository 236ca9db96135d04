//! Command implementations.

pub mod auth;
pub mod records;

use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};

use registra_core::auth::default_store;
use registra_core::{ApiClient, Config, PhotoUpload, SessionManager};

/// Everything a command needs: the shared client, the session manager
/// over the platform credential store, and the loaded config.
pub struct Ctx {
    pub client: ApiClient,
    pub manager: SessionManager,
    pub config: Config,
}

impl Ctx {
    /// Assemble the pipeline and restore any persisted session.
    pub fn build(api_url_override: Option<&str>) -> Result<Self> {
        let config = Config::load().unwrap_or_default();
        let api_url = api_url_override
            .map(str::to_string)
            .unwrap_or_else(|| config.api_url());

        let client = ApiClient::new(&api_url).context("Failed to build API client")?;
        let mut manager = SessionManager::new(client.clone(), default_store());
        manager.bootstrap();

        Ok(Self {
            client,
            manager,
            config,
        })
    }
}

/// Ask for confirmation before a destructive call.
pub fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt} [y/N] ");
    io::stdout().flush()?;
    confirm_from(io::stdin().lock())
}

fn confirm_from(mut reader: impl io::BufRead) -> Result<bool> {
    let mut answer = String::new();
    reader.read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}

/// Read a photo attachment from disk.
pub fn load_photo(path: &Path) -> Result<PhotoUpload> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read photo {}", path.display()))?;
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("photo.jpg");
    Ok(PhotoUpload::new(file_name, bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_accepts_yes_variants() {
        assert!(confirm_from("y\n".as_bytes()).unwrap());
        assert!(confirm_from("Y\n".as_bytes()).unwrap());
        assert!(confirm_from("yes\n".as_bytes()).unwrap());
    }

    #[test]
    fn test_confirm_defaults_to_no() {
        assert!(!confirm_from("n\n".as_bytes()).unwrap());
        assert!(!confirm_from("\n".as_bytes()).unwrap());
        assert!(!confirm_from("si\n".as_bytes()).unwrap());
        assert!(!confirm_from("".as_bytes()).unwrap());
    }
}
