use dictionary::{DictionaryError, WordMeaning};

/// The three failures a user can see. Each one is recovered by searching again.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("Error fetching definition.")]
    Fetch,
    #[error("Definition not found.")]
    NotFound,
    #[error("Unexpected response from API.")]
    UnexpectedResponse,
}

impl From<&DictionaryError> for LookupError {
    fn from(error: &DictionaryError) -> Self {
        match error {
            DictionaryError::NotFound(_) => LookupError::NotFound,
            DictionaryError::UnexpectedResponse => LookupError::UnexpectedResponse,
            DictionaryError::Fetch(_)
            | DictionaryError::Deserialize(_)
            | DictionaryError::InvalidBaseUrl { .. } => LookupError::Fetch,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LookupState {
    #[default]
    Idle,
    Loading,
    Success(Vec<WordMeaning>),
    Failure(LookupError),
}

impl LookupState {
    pub fn meanings(&self) -> Option<&[WordMeaning]> {
        match self {
            LookupState::Success(meanings) => Some(meanings),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&LookupError> {
        match self {
            LookupState::Failure(error) => Some(error),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_messages_are_fixed() {
        assert_eq!(LookupError::Fetch.to_string(), "Error fetching definition.");
        assert_eq!(LookupError::NotFound.to_string(), "Definition not found.");
        assert_eq!(
            LookupError::UnexpectedResponse.to_string(),
            "Unexpected response from API."
        );
    }

    #[test]
    fn maps_dictionary_errors_to_user_errors() {
        let not_json = dictionary::interpret_body(b"nope").unwrap_err();
        assert_eq!(LookupError::from(&not_json), LookupError::Fetch);

        let missing = dictionary::interpret_body(br#"{"title":"No Definitions Found"}"#).unwrap_err();
        assert_eq!(LookupError::from(&missing), LookupError::NotFound);

        let odd = dictionary::interpret_body(b"{}").unwrap_err();
        assert_eq!(LookupError::from(&odd), LookupError::UnexpectedResponse);

        let bad_url = DictionaryError::InvalidBaseUrl {
            url: "x".to_owned(),
            reason: "relative".to_owned(),
        };
        assert_eq!(LookupError::from(&bad_url), LookupError::Fetch);
    }

    #[test]
    fn panels_are_mutually_exclusive() {
        assert!(LookupState::Idle.meanings().is_none() && LookupState::Idle.error().is_none());
        assert!(LookupState::Loading.meanings().is_none() && LookupState::Loading.error().is_none());

        let failed = LookupState::Failure(LookupError::NotFound);
        assert_eq!(failed.error(), Some(&LookupError::NotFound));
        assert!(failed.meanings().is_none());

        let found = LookupState::Success(Vec::new());
        assert!(found.error().is_none());
        assert_eq!(found.meanings().map(<[_]>::len), Some(0));
    }
}
