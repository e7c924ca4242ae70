use actix_web::{
    http::{header::ContentType, StatusCode},
    HttpResponse, ResponseError,
};
use recordstore::database::store::StoreError;
use thiserror::Error;

/// Errors surfaced by the record endpoints, each maps onto a single status code.
///
/// `BadRequest` and `Internal` carry the underlying error text, which is returned to the client as-is.
#[derive(Error, Debug, PartialEq)]
pub enum RecordError {
    #[error("not found")]
    NotFound,

    #[error("method not allowed")]
    MethodNotAllowed,

    #[error("need content-type 'application/json', but got '{0}'")]
    UnsupportedMediaType(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Internal(String),
}

impl ResponseError for RecordError {
    fn status_code(&self) -> StatusCode {
        match self {
            RecordError::NotFound => StatusCode::NOT_FOUND,
            RecordError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            RecordError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            RecordError::BadRequest(_) => StatusCode::BAD_REQUEST,
            RecordError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type(ContentType::plaintext())
            .body(self.to_string())
    }
}

impl From<StoreError> for RecordError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound(_) | StoreError::Empty => RecordError::NotFound,
        }
    }
}

impl From<serde_json::Error> for RecordError {
    fn from(error: serde_json::Error) -> Self {
        RecordError::Internal(error.to_string())
    }
}
