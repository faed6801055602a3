use std::env;
use std::time::Duration;

use dictionary::DictionaryConfig;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Entries endpoint of the dictionary provider, `None` uses the public api
    pub api_url: Option<String>,
    /// Request timeout in seconds, `None` keeps the transport default
    pub timeout_secs: Option<u64>,
}

impl Config {
    pub fn from_env() -> Self {
        let api_url = env::var("DICTIONARY_API_URL")
            .ok()
            .filter(|url| !url.trim().is_empty());

        let timeout_secs = env::var("DICTIONARY_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.trim().parse().ok())
            .filter(|secs| *secs > 0);

        Config {
            api_url,
            timeout_secs,
        }
    }

    /// Command line values win over the environment.
    pub fn with_overrides(mut self, api_url: Option<String>, timeout_secs: Option<u64>) -> Self {
        if api_url.is_some() {
            self.api_url = api_url;
        }
        if timeout_secs.is_some() {
            self.timeout_secs = timeout_secs;
        }
        self
    }

    pub fn dictionary(&self) -> DictionaryConfig {
        DictionaryConfig {
            base_url: self.api_url.clone(),
            timeout: self.timeout_secs.map(Duration::from_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_only_given_values() {
        let config = Config {
            api_url: Some("http://env.example/entries".to_owned()),
            timeout_secs: Some(10),
        };
        let config = config.with_overrides(None, Some(3));
        assert_eq!(config.api_url.as_deref(), Some("http://env.example/entries"));
        assert_eq!(config.timeout_secs, Some(3));

        let config = config.with_overrides(Some("http://cli.example/entries".to_owned()), None);
        assert_eq!(config.api_url.as_deref(), Some("http://cli.example/entries"));
        assert_eq!(config.timeout_secs, Some(3));
    }

    #[test]
    fn maps_to_dictionary_config() {
        let dictionary = Config::default().dictionary();
        assert!(dictionary.base_url.is_none());
        assert!(dictionary.timeout.is_none());

        let dictionary = Config {
            api_url: None,
            timeout_secs: Some(7),
        }
        .dictionary();
        assert_eq!(dictionary.timeout, Some(Duration::from_secs(7)));
    }
}
