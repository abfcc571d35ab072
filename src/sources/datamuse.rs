//! Remote word source backed by the Datamuse API

use super::{ListSource, WordSource};
use crate::core::Word;
use async_trait::async_trait;
use rand::Rng;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

const DATAMUSE_BASE: &str = "https://api.datamuse.com";

/// The random pick draws from at most this many of the returned candidates
const PICK_POOL: usize = 50;

/// One entry of a Datamuse `/words` response
#[derive(Debug, Deserialize)]
struct DatamuseEntry {
    word: String,
}

#[derive(Debug, Error)]
enum FetchError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("no candidate words in response")]
    EmptyResponse,

    #[error("unusable candidate {0:?}")]
    Malformed(String),
}

/// Asks Datamuse for a random word of the configured length
///
/// On any failure (network error, empty result, or a candidate that is not
/// a clean word of the right length) the source logs a warning and falls
/// back to its local list. Callers never see the failure.
pub struct DatamuseSource {
    client: reqwest::Client,
    word_length: usize,
    fallback: ListSource,
}

impl DatamuseSource {
    #[must_use]
    pub fn new(word_length: usize, fallback: ListSource) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(10))
                .connect_timeout(Duration::from_secs(5))
                .build()
                .expect("Failed to build HTTP client"),
            word_length,
            fallback,
        }
    }

    async fn fetch_remote(&self) -> Result<Word, FetchError> {
        // sp=?????? matches any word of exactly word_length letters
        let pattern = "?".repeat(self.word_length);
        let url = format!("{DATAMUSE_BASE}/words?sp={pattern}&max=100");

        let entries: Vec<DatamuseEntry> = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if entries.is_empty() {
            return Err(FetchError::EmptyResponse);
        }

        let pick = rand::rng().random_range(0..entries.len().min(PICK_POOL));
        let text = entries[pick].word.clone();

        // Datamuse can return hyphenated or multi-word entries; those fail
        // word validation and count as a miss.
        Word::new(&text, self.word_length).map_err(|_| FetchError::Malformed(text))
    }
}

#[async_trait]
impl WordSource for DatamuseSource {
    async fn fetch_word(&self) -> Word {
        match self.fetch_remote().await {
            Ok(word) => word,
            Err(err) => {
                warn!("word lookup degraded to the built-in list: {err}");
                self.fallback.fetch_word().await
            }
        }
    }
}
