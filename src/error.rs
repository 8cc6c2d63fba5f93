//! Error types shared by the client components.

use thiserror::Error;

/// Failure of a request against the recipe API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Non-success response. Holds the server's `error` text or a fallback.
    #[error("{0}")]
    Rejected(String),

    /// The response body was not the JSON we expected.
    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The request never produced a response.
    #[error("{0}")]
    Network(String),

    #[error(transparent)]
    Form(#[from] FormError),
}

/// Add-recipe form input rejected before any request is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please fill title, category and description.")]
    MissingRequired,
}

/// Invalid `data-*` configuration value on the page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid number for {key}: {value:?}")]
    InvalidNumber { key: &'static str, value: String },

    #[error("invalid log level: {0:?}")]
    InvalidLogLevel(String),
}

/// A component's markup is not on the page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{component} is missing element #{id}")]
pub struct MissingMarkup {
    pub component: &'static str,
    pub id: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_displays_bare_message() {
        let err = ClientError::Rejected("Category required".to_string());
        assert_eq!(err.to_string(), "Category required");
    }

    #[test]
    fn test_form_error_is_transparent() {
        let err = ClientError::from(FormError::MissingRequired);
        assert_eq!(
            err.to_string(),
            "Please fill title, category and description."
        );
    }

    #[test]
    fn test_missing_markup_message() {
        let err = MissingMarkup {
            component: "search",
            id: "searchInput",
        };
        assert_eq!(err.to_string(), "search is missing element #searchInput");
    }
}
