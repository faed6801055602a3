use std::time::Duration;

use dictionary_api::{get_definition, DICTIONARY_API_URL};

mod dictionary;
mod dictionary_api;

pub use dictionary::{WordDefinition, WordMeaning};
pub use dictionary_api::interpret_body;

#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("failed to fetch the definition: {0}")]
    Fetch(reqwest::Error),
    #[error("failed to parse the response body: {0}")]
    Deserialize(serde_json::Error),
    #[error("no definitions found: {0}")]
    NotFound(NotFoundError),
    #[error("the response matched no known shape")]
    UnexpectedResponse,
    #[error("invalid dictionary api url {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct NotFoundError {
    message: String,
}

impl NotFoundError {
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Debug, Clone, Default)]
pub struct DictionaryConfig {
    /// Entries endpoint without the language segment, defaults to the public api
    pub base_url: Option<String>,
    /// Whole-request timeout, `None` leaves the transport default in place
    pub timeout: Option<Duration>,
}

/// Anything that can turn a word into its meanings.
#[async_trait::async_trait]
pub trait DefinitionProvider: Send + Sync {
    async fn define(&self, word: &str) -> Result<Vec<WordMeaning>, DictionaryError>;
}

pub struct Dictionary {
    client: reqwest::Client,
    base_url: String,
}

impl Dictionary {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: DICTIONARY_API_URL.to_owned(),
        }
    }

    pub fn from_config(config: DictionaryConfig) -> Result<Self, DictionaryError> {
        let base_url = config
            .base_url
            .unwrap_or_else(|| DICTIONARY_API_URL.to_owned());
        let parsed = reqwest::Url::parse(&base_url).map_err(|error| DictionaryError::InvalidBaseUrl {
            url: base_url.clone(),
            reason: error.to_string(),
        })?;
        if parsed.cannot_be_a_base() || !matches!(parsed.scheme(), "http" | "https") {
            return Err(DictionaryError::InvalidBaseUrl {
                url: base_url,
                reason: "expected an http(s) url".to_owned(),
            });
        }
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(DictionaryError::Fetch)?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get_definition(&self, word: &str) -> Result<Vec<WordMeaning>, DictionaryError> {
        get_definition(&self.client, &self.base_url, word).await
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl DefinitionProvider for Dictionary {
    async fn define(&self, word: &str) -> Result<Vec<WordMeaning>, DictionaryError> {
        self.get_definition(word).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_the_public_api() {
        let dict = Dictionary::from_config(DictionaryConfig::default()).unwrap();
        assert_eq!(dict.base_url(), "https://api.dictionaryapi.dev/api/v2/entries");
        assert_eq!(Dictionary::new().base_url(), dict.base_url());
    }

    #[test]
    fn accepts_an_alternate_base_url() {
        let dict = Dictionary::from_config(DictionaryConfig {
            base_url: Some("http://127.0.0.1:8080/api/v2/entries/".to_owned()),
            timeout: Some(Duration::from_secs(5)),
        })
        .unwrap();
        assert_eq!(dict.base_url(), "http://127.0.0.1:8080/api/v2/entries/");
    }

    #[test]
    fn rejects_unusable_base_urls() {
        for url in ["not a url", "mailto:someone@example.com", "ftp://example.com/entries"] {
            let result = Dictionary::from_config(DictionaryConfig {
                base_url: Some(url.to_owned()),
                timeout: None,
            });
            assert!(
                matches!(result, Err(DictionaryError::InvalidBaseUrl { .. })),
                "{url}"
            );
        }
    }
}
