use std::fmt;

#[derive(Debug)]
pub enum ComError {
    Http(reqwest::Error),
    Status {
        code: u16,
        reason: String,
        detail: Option<String>,
    },
    Decode(serde_json::Error),
    Url(String),
}

impl fmt::Display for ComError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComError::Http(err) => write!(f, "http error: {err}"),
            ComError::Status {
                code,
                reason,
                detail,
            } => {
                write!(f, "server error: {code} {reason}")?;
                if let Some(detail) = detail {
                    write!(f, " ({detail})")?;
                }
                Ok(())
            }
            ComError::Decode(err) => write!(f, "decode error: {err}"),
            ComError::Url(msg) => write!(f, "invalid url: {msg}"),
        }
    }
}

impl std::error::Error for ComError {}

impl From<reqwest::Error> for ComError {
    fn from(err: reqwest::Error) -> Self {
        ComError::Http(err)
    }
}

impl From<serde_json::Error> for ComError {
    fn from(err: serde_json::Error) -> Self {
        ComError::Decode(err)
    }
}
