//! HTTP adapter mapping for domain errors.
//!
//! Keeps the domain error type HTTP-agnostic while letting Actix handlers
//! turn domain failures into the shared JSON error envelope and the status
//! code declared by the error kind.

use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use tracing::{debug, error};

use crate::domain::{Error, ErrorKind};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// JSON body for failed requests: `{"success":false,"code":...,"message":...}`.
#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    pub success: bool,
    pub code: u32,
    pub message: String,
}

impl ApiErrorBody {
    #[must_use]
    pub fn from_error(error: &Error) -> Self {
        Self {
            success: false,
            code: error.code(),
            message: error.message(),
        }
    }
}

fn status_for(kind: ErrorKind) -> StatusCode {
    StatusCode::from_u16(kind.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.kind())
    }

    fn error_response(&self) -> HttpResponse {
        if self.kind().is_server_error() {
            error!(code = self.code(), message = %self.message(), "request failed");
        } else {
            debug!(code = self.code(), message = %self.message(), "request rejected");
        }
        HttpResponse::build(self.status_code()).json(ApiErrorBody::from_error(self))
    }
}

/// Rejected JSON bodies surface as framework-level bad requests rather than
/// Actix's default plain-text response.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    Error::from_cause(ErrorKind::FrameworkBadRequest, err).into()
}

/// Rejected query strings surface as framework-level bad requests.
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    Error::from_cause(ErrorKind::FrameworkBadRequest, err).into()
}

/// Rejected path segments surface as framework-level bad requests.
pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    Error::from_cause(ErrorKind::FrameworkBadRequest, err).into()
}
