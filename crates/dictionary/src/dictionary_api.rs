// https://dictionaryapi.dev/ - free dictionary api, english entries only
// a missing word answers 404 with a json body, so the status code is never consulted

use serde::Deserialize;
use serde_json::Value;

use crate::{DictionaryError, NotFoundError, WordMeaning};

pub(crate) const DICTIONARY_API_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries";
const LANGUAGE: &str = "en";
const NOT_FOUND_TITLE: &str = "No Definitions Found";

#[derive(Deserialize)]
struct EntryPayload {
    meanings: Vec<WordMeaning>,
}

type Matcher = fn(&Value) -> Option<Result<Vec<WordMeaning>, DictionaryError>>;

// order matters, the first matcher that recognizes the payload wins
const MATCHERS: &[Matcher] = &[match_entries, match_not_found];

pub(crate) fn entry_url(base_url: &str, word: &str) -> String {
    format!(
        "{}/{LANGUAGE}/{}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(word)
    )
}

pub(crate) async fn get_definition(
    client: &reqwest::Client,
    base_url: &str,
    word: &str,
) -> Result<Vec<WordMeaning>, DictionaryError> {
    let url = entry_url(base_url, word);
    tracing::debug!(%url, "requesting definition");
    let res: reqwest::Response = client.get(&url).send().await.map_err(DictionaryError::Fetch)?;
    let status = res.status();
    let body = res.bytes().await.map_err(DictionaryError::Fetch)?;
    tracing::debug!(%status, bytes = body.len(), "received dictionary response");
    interpret_body(&body)
}

/// Classifies a raw response body into meanings or one of the lookup errors.
pub fn interpret_body(body: &[u8]) -> Result<Vec<WordMeaning>, DictionaryError> {
    let payload: Value = serde_json::from_slice(body).map_err(DictionaryError::Deserialize)?;
    MATCHERS
        .iter()
        .find_map(|matcher| matcher(&payload))
        .unwrap_or(Err(DictionaryError::UnexpectedResponse))
}

fn match_entries(payload: &Value) -> Option<Result<Vec<WordMeaning>, DictionaryError>> {
    let first = payload.as_array()?.first()?;
    let entry = EntryPayload::deserialize(first).ok()?;
    let complete = !entry.meanings.is_empty()
        && entry
            .meanings
            .iter()
            .all(|meaning| !meaning.definitions.is_empty());
    complete.then(|| Ok(entry.meanings))
}

fn match_not_found(payload: &Value) -> Option<Result<Vec<WordMeaning>, DictionaryError>> {
    let object = payload.as_object()?;
    if object.get("title").and_then(Value::as_str) != Some(NOT_FOUND_TITLE) {
        return None;
    }
    // message and resolution are informational, anything but text is skipped
    let message = ["message", "resolution"]
        .into_iter()
        .filter_map(|key| object.get(key).and_then(Value::as_str))
        .collect::<Vec<&str>>()
        .join(" ");
    Some(Err(DictionaryError::NotFound(NotFoundError { message })))
}
