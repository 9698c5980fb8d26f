use lambda_http::http::StatusCode;
use thiserror::Error;

/// Failure modes of the spaces resource. Each variant maps to exactly one
/// HTTP status; the translation to a wire response happens once, at the
/// dispatcher boundary.
#[derive(Debug, Error)]
pub enum SpaceError {
    /// The request body or a required request parameter was not usable.
    #[error("{0}")]
    MalformedInput(String),

    /// A required field was absent from a create payload.
    #[error("Value for '{0}' expected.")]
    MissingField(String),

    #[error("Item with id {0} was not found!")]
    NotFound(String),

    #[error("Unauthorized!")]
    Unauthorized,

    #[error("{0} is not supported.")]
    UnsupportedMethod(String),

    /// A DynamoDB call failed. The SDK message is passed through to the
    /// caller verbatim; store-layer errors carry no sensitive data here.
    #[error("{0}")]
    Infrastructure(String),
}

impl SpaceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            SpaceError::MalformedInput(_) | SpaceError::MissingField(_) => StatusCode::BAD_REQUEST,
            SpaceError::Unauthorized => StatusCode::UNAUTHORIZED,
            SpaceError::NotFound(_) => StatusCode::NOT_FOUND,
            SpaceError::UnsupportedMethod(_) | SpaceError::Infrastructure(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}
