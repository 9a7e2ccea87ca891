use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Request to {endpoint} failed with status {status}")]
    Request { endpoint: String, status: u16 },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Non-2xx responses and transport failures both count as request errors.
    pub fn is_request_error(&self) -> bool {
        matches!(self, Error::Request { .. } | Error::Http(_))
    }

    pub fn is_parse_error(&self) -> bool {
        matches!(self, Error::Parse(_))
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::InvalidUrl(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
