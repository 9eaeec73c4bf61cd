//! Catch-all handler for unmatched routes.
//!
//! The transport status is 404, but the envelope code is derived by mapping
//! that status back through the error table, which collapses any 4xx without
//! an exact entry to the generic bad-request kind.

use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse};

use crate::domain::{Error, ErrorKind};
use crate::inbound::http::error::ApiErrorBody;

fn wants_html(request: &HttpRequest) -> bool {
    request
        .headers()
        .get(header::ACCEPT)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

fn error_page(body: &ApiErrorBody) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\"><title>Error {code}</title></head>\n<body>\n<h1>Error {code}</h1>\n<p>{message}</p>\n</body>\n</html>\n",
        code = body.code,
        message = body.message,
    )
}

/// Answer every request no other route matched.
pub async fn unmatched_route(request: HttpRequest) -> HttpResponse {
    let kind = ErrorKind::from_http_status(404);
    let body = ApiErrorBody::from_error(&Error::new(kind));
    if wants_html(&request) {
        HttpResponse::NotFound()
            .content_type("text/html; charset=utf-8")
            .body(error_page(&body))
    } else {
        HttpResponse::NotFound().json(body)
    }
}
