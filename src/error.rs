use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    #[error("base url '{0}' cannot carry path segments")]
    InvalidBaseUrl(String),

    #[error("secret key contains characters that are not valid in an HTTP header")]
    InvalidSecretKey,

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to encode query string: {0}")]
    Query(#[from] serde_urlencoded::ser::Error),

    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("failed to decode response body: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    #[error("paystack returned {status}: {message}")]
    Api {
        status: StatusCode,
        message: String,
        body: String,
    },

    #[error("response did not include data")]
    MissingData,
}

impl Error {
    /// HTTP status of a rejected call, if Paystack answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(err) => err.status(),
            _ => None,
        }
    }
}
