use reqwest::StatusCode;

/// Shown when the provider rejects a request without saying why.
pub const GENERIC_API_MESSAGE: &str = "Something went wrong";
pub const NETWORK_MESSAGE: &str = "Network error, please try again.";

/// Failure while fetching from the weather provider.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Provider returned {status}: {message}")]
    Api { status: StatusCode, message: String },
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Failed to parse provider response: {0}")]
    Parse(#[from] serde_json::Error),
}

impl FetchError {
    /// Text for the dashboard's error line.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::Api { message, .. } => message.clone(),
            FetchError::Network(_) | FetchError::Parse(_) => NETWORK_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_surfaces_provider_message() {
        let err = FetchError::Api {
            status: StatusCode::NOT_FOUND,
            message: "city not found".to_string(),
        };
        assert_eq!(err.user_message(), "city not found");
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn parse_error_reads_as_network_error() {
        let err: FetchError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert_eq!(err.user_message(), NETWORK_MESSAGE);
    }
}
