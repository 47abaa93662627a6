//! Localized text for a form, resolved once before the form is built.

use std::collections::HashMap;

use utils::text::interpolate;

use crate::api::{ApiClient, ClientError};

/// Immutable literal mapping. The general and context-scoped bundles are
/// fetched concurrently and merged, contextual keys winning; if either fetch
/// fails the whole resolution fails.
#[derive(Debug, Clone, Default)]
pub struct Literals {
    entries: HashMap<String, String>,
}

impl Literals {
    pub async fn resolve(
        api: &ApiClient,
        lang: &str,
        context: &str,
    ) -> Result<Self, ClientError> {
        let (general, scoped) =
            tokio::try_join!(api.literals(lang, None), api.literals(lang, Some(context)))?;

        let mut entries = general;
        entries.extend(scoped);
        Ok(Self { entries })
    }

    pub fn from_entries(entries: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Look up a literal. Missing keys come back as the key itself so a
    /// gap in a bundle stays visible instead of blanking the UI.
    pub fn get<'a>(&'a self, key: &'a str) -> &'a str {
        self.entries.get(key).map(String::as_str).unwrap_or(key)
    }

    /// Look up and substitute `{n}` placeholders.
    pub fn format(&self, key: &str, args: &[&str]) -> String {
        interpolate(self.get(key), args)
    }
}
