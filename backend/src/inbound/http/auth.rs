//! Account API stubs.
//!
//! Sign-up and login accept well-formed requests and answer the empty
//! success envelope; no account state is kept yet.
//!
//! TODO: back these with a credentials store once the account model lands.

use actix_web::{HttpResponse, post, web};

use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope::ApiDataResponse;
use crate::inbound::http::schemas::{LoginRequest, SignUpRequest};

/// Accept a sign-up request.
#[utoipa::path(
    post,
    path = "/api/sign-up",
    request_body = SignUpRequest,
    responses(
        (status = 200, description = "Sign-up accepted", body = ApiDataResponse<String>),
        (status = 400, description = "Malformed request body")
    ),
    tags = ["auth"],
    operation_id = "signUp"
)]
#[post("/sign-up")]
pub async fn sign_up(payload: web::Json<SignUpRequest>) -> ApiResult<HttpResponse> {
    let _ = payload.into_inner();
    Ok(HttpResponse::Ok().json(ApiDataResponse::<String>::empty()))
}

/// Accept a login request.
#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login accepted", body = ApiDataResponse<String>),
        (status = 400, description = "Malformed request body")
    ),
    tags = ["auth"],
    operation_id = "login"
)]
#[post("/login")]
pub async fn login(payload: web::Json<LoginRequest>) -> ApiResult<HttpResponse> {
    let _ = payload.into_inner();
    Ok(HttpResponse::Ok().json(ApiDataResponse::<String>::empty()))
}
