//! Errors from the generation client layer

use thiserror::Error;

/// Result alias for generation client operations
pub type GenAiResult<T> = std::result::Result<T, GenAiError>;

/// Errors from the Gemini REST layer.
#[derive(Debug, Error)]
pub enum GenAiError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Gemini returned a non-2xx status code.
    #[error("Gemini API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The model's reply did not match the requested two-field schema.
    #[error("malformed generation response: {message}")]
    MalformedResponse { message: String },

    /// The image model's reply contained no inline image part.
    #[error("no image data returned by the model")]
    NoImageData,

    /// No API key was configured via environment or config file.
    #[error("no API credential configured (set GEMINI_API_KEY)")]
    MissingCredential,
}

impl GenAiError {
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = GenAiError::Api {
            status: 429,
            body: "quota exceeded".to_string(),
        };
        assert!(err.to_string().contains("429"));
        assert!(err.to_string().contains("quota exceeded"));

        let err = GenAiError::malformed("missing field `title`");
        assert!(err.to_string().contains("missing field `title`"));

        assert!(GenAiError::MissingCredential
            .to_string()
            .contains("GEMINI_API_KEY"));
    }
}
