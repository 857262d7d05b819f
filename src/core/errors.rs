use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConsultaError {
    #[error("{0}")]
    OptionsFetchFailed(String),

    #[error("{0}")]
    QuerySubmitFailed(String),

    #[error("Missing selection: {}", .missing.join(", "))]
    IncompleteSelection { missing: Vec<&'static str> },

    #[error("A query is already in flight")]
    SubmitInFlight,

    #[error("Cannot select a {0} right now")]
    SelectionLocked(&'static str),

    #[error("Career '{0}' is not offered by the selected university")]
    UnknownCareer(String),

    #[error("Year out of range: {0}")]
    InvalidYear(String),

    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Reqwest error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("ConsultaError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for ConsultaError {
    fn from(error: std::io::Error) -> Self {
        ConsultaError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for ConsultaError {
    fn from(error: reqwest::Error) -> Self {
        ConsultaError::Reqwest(Box::new(error))
    }
}
