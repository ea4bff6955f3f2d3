use thiserror::Error;

/// Shown when the request never produced a usable answer.
pub const FALLBACK_MESSAGE: &str = "Failed to fetch weather data. Please try again.";

/// Shown for an error response whose body carries no message.
pub const API_FALLBACK_MESSAGE: &str = "Failed to fetch weather data";

pub const EMPTY_CITY_MESSAGE: &str = "Please enter a city name";

/// Every way a search can end without something to render.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The city field was empty after trimming.
    #[error("Please enter a city name")]
    EmptyCity,

    /// The request could not be sent or its body could not be read.
    #[error("Weather request failed: {0}")]
    Transport(String),

    /// The backend answered with a non-2xx status.
    #[error("Weather service returned HTTP {status}")]
    Api { status: u16, message: Option<String> },

    /// A 2xx body that is not a weather snapshot.
    #[error("Failed to parse weather response: {0}")]
    Parse(String),
}

impl SearchError {
    /// The single line written into the error region.
    pub fn user_message(&self) -> String {
        match self {
            SearchError::EmptyCity => EMPTY_CITY_MESSAGE.to_string(),
            SearchError::Api { message: Some(message), .. } if !message.is_empty() => {
                message.clone()
            }
            SearchError::Api { .. } => API_FALLBACK_MESSAGE.to_string(),
            SearchError::Transport(_) | SearchError::Parse(_) => FALLBACK_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_surfaces_server_message() {
        let err = SearchError::Api { status: 404, message: Some("City not found".into()) };
        assert_eq!(err.user_message(), "City not found");
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn api_error_without_message_falls_back() {
        let err = SearchError::Api { status: 500, message: None };
        assert_eq!(err.user_message(), API_FALLBACK_MESSAGE);

        let err = SearchError::Api { status: 500, message: Some(String::new()) };
        assert_eq!(err.user_message(), API_FALLBACK_MESSAGE);
    }

    #[test]
    fn transport_and_parse_hide_details() {
        let err = SearchError::Transport("connection refused".into());
        assert_eq!(err.user_message(), FALLBACK_MESSAGE);
        assert!(err.to_string().contains("connection refused"));

        let err = SearchError::Parse("expected value at line 1".into());
        assert_eq!(err.user_message(), FALLBACK_MESSAGE);
    }

    #[test]
    fn empty_city_message() {
        assert_eq!(SearchError::EmptyCity.user_message(), "Please enter a city name");
    }
}
