//! Dictionary-backed guess validation

use super::{WordValidator, plausible};
use crate::core::Word;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::warn;

const DATAMUSE_BASE: &str = "https://api.datamuse.com";
const DICTIONARY_BASE: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

/// One entry of a Datamuse spelling query
#[derive(Debug, Deserialize)]
struct SpellingEntry {
    word: String,
}

/// Validates guesses against online dictionaries
///
/// Lookup order: an exact-spelling query on Datamuse, then a definition
/// lookup on dictionaryapi.dev for words Datamuse does not list. When a
/// lookup fails outright the validator degrades to the local plausibility
/// heuristic, so a verdict is always produced.
pub struct DictionaryValidator {
    client: reqwest::Client,
    word_length: usize,
}

impl DictionaryValidator {
    #[must_use]
    pub fn new(word_length: usize) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(10))
                .connect_timeout(Duration::from_secs(5))
                .build()
                .expect("Failed to build HTTP client"),
            word_length,
        }
    }

    /// Exact-spelling lookup: does Datamuse know this precise word?
    async fn exact_lookup(&self, candidate: &Word) -> Result<bool, reqwest::Error> {
        let url = format!(
            "{DATAMUSE_BASE}/words?sp={}&max=1",
            candidate.text().to_lowercase()
        );

        let entries: Vec<SpellingEntry> = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(entries
            .first()
            .is_some_and(|entry| entry.word.eq_ignore_ascii_case(candidate.text())))
    }

    /// Definition lookup against dictionaryapi.dev
    ///
    /// The API answers with an array of entries for a known word, and with
    /// an object carrying a `title` field (over a 404) for an unknown one,
    /// so the status code is not consulted.
    async fn definition_lookup(&self, candidate: &Word) -> Result<bool, reqwest::Error> {
        let url = format!("{DICTIONARY_BASE}/{}", candidate.text().to_lowercase());

        let body: serde_json::Value = self.client.get(&url).send().await?.json().await?;
        Ok(definition_found(&body))
    }
}

fn definition_found(body: &serde_json::Value) -> bool {
    body.get("title").is_none()
}

#[async_trait]
impl WordValidator for DictionaryValidator {
    async fn is_acceptable(&self, candidate: &Word) -> bool {
        match self.exact_lookup(candidate).await {
            Ok(true) => return true,
            Ok(false) => {}
            Err(err) => {
                warn!("spelling lookup unavailable, using degraded acceptance: {err}");
                return plausible(self.word_length, candidate);
            }
        }

        match self.definition_lookup(candidate).await {
            Ok(found) => found,
            Err(err) => {
                warn!("definition lookup unavailable, using degraded acceptance: {err}");
                plausible(self.word_length, candidate)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spelling_response_parses() {
        let body = r#"[{"word":"garden","score":3141}]"#;
        let entries: Vec<SpellingEntry> = serde_json::from_str(body).unwrap();

        assert_eq!(entries.len(), 1);
        assert!(entries[0].word.eq_ignore_ascii_case("GARDEN"));
    }

    #[test]
    fn definition_found_for_entry_array() {
        let body: serde_json::Value = serde_json::from_str(
            r#"[{"word":"garden","meanings":[{"partOfSpeech":"noun"}]}]"#,
        )
        .unwrap();

        assert!(definition_found(&body));
    }

    #[test]
    fn definition_missing_when_title_present() {
        let body: serde_json::Value = serde_json::from_str(
            r#"{"title":"No Definitions Found","message":"Sorry pal","resolution":"Try again"}"#,
        )
        .unwrap();

        assert!(!definition_found(&body));
    }
}
