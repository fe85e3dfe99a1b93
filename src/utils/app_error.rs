use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid stop data: {0}")]
    DataFormat(String),

    #[error("Failed to fetch feed {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to decode feed {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: prost::DecodeError,
    },

    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input ended before a line was chosen")]
    NoSelection,
}

impl AppError {
    pub fn fetch(url: &str, source: reqwest::Error) -> Self {
        AppError::Fetch {
            url: url.to_string(),
            source,
        }
    }

    pub fn decode(url: &str, source: prost::DecodeError) -> Self {
        AppError::Decode {
            url: url.to_string(),
            source,
        }
    }
}
