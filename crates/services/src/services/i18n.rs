//! Localized UI text resolved by key, optionally scoped to a context.

use std::collections::HashMap;

use rust_embed::RustEmbed;
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_LANG: &str = "en";

#[derive(RustEmbed)]
#[folder = "assets/i18n"]
struct I18nAssets;

#[derive(Debug, Clone, Error)]
pub enum I18nError {
    #[error("no literal bundle for {0}")]
    MissingBundle(String),
    #[error("malformed literal bundle {0}: {1}")]
    Malformed(String, String),
}

/// Resolver for the embedded literal bundles. General literals live in
/// `{lang}.json`; context-scoped ones in `{context}.{lang}.json`.
pub struct I18nService;

impl I18nService {
    pub fn literals(
        lang: &str,
        context: Option<&str>,
    ) -> Result<HashMap<String, String>, I18nError> {
        let file = match context {
            Some(ctx) => format!("{ctx}.{lang}.json"),
            None => format!("{lang}.json"),
        };

        let asset =
            I18nAssets::get(&file).ok_or_else(|| I18nError::MissingBundle(file.clone()))?;
        let literals: HashMap<String, String> = serde_json::from_slice(&asset.data)
            .map_err(|e| I18nError::Malformed(file.clone(), e.to_string()))?;

        debug!(bundle = %file, keys = literals.len(), "resolved literal bundle");
        Ok(literals)
    }
}
