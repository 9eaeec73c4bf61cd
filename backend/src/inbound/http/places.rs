//! Places API handlers.
//!
//! ```text
//! GET    /api/places
//! POST   /api/places
//! GET    /api/places/{placeId}
//! PUT    /api/places/{placeId}
//! DELETE /api/places/{placeId}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope::ApiDataResponse;
use crate::inbound::http::schemas::{PlaceRequest, PlaceResponse};
use crate::inbound::http::state::HttpState;

/// List every known place.
#[utoipa::path(
    get,
    path = "/api/places",
    responses(
        (status = 200, description = "All places", body = ApiDataResponse<Vec<PlaceResponse>>),
        (status = 500, description = "Storage failure")
    ),
    tags = ["places"],
    operation_id = "listPlaces"
)]
#[get("/places")]
pub async fn list_places(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let places = state.places.get_places().await?;
    let data: Vec<PlaceResponse> = places.into_iter().map(PlaceResponse::from_place).collect();
    Ok(HttpResponse::Ok().json(ApiDataResponse::of(data)))
}

/// Fetch one place. A missing id is not an error: the envelope reports
/// success with a `null` payload.
#[utoipa::path(
    get,
    path = "/api/places/{placeId}",
    params(("placeId" = i64, Path, description = "Place identifier")),
    responses(
        (status = 200, description = "The place, or null when unknown", body = ApiDataResponse<PlaceResponse>),
        (status = 500, description = "Storage failure")
    ),
    tags = ["places"],
    operation_id = "getPlace"
)]
#[get("/places/{place_id}")]
pub async fn get_place(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let place = state.places.get_place(path.into_inner()).await?;
    let envelope = match place {
        Some(place) => ApiDataResponse::of(PlaceResponse::from_place(place)),
        None => ApiDataResponse::empty(),
    };
    Ok(HttpResponse::Ok().json(envelope))
}

/// Create a place. The envelope's payload is the textual outcome flag.
#[utoipa::path(
    post,
    path = "/api/places",
    request_body = PlaceRequest,
    responses(
        (status = 201, description = "Place created", body = ApiDataResponse<String>),
        (status = 400, description = "Malformed request body"),
        (status = 500, description = "Storage failure")
    ),
    tags = ["places"],
    operation_id = "createPlace"
)]
#[post("/places")]
pub async fn create_place(
    state: web::Data<HttpState>,
    payload: web::Json<PlaceRequest>,
) -> ApiResult<HttpResponse> {
    let created = state
        .places
        .create_place(Some(payload.into_inner().into_payload()))
        .await?;
    Ok(HttpResponse::Created().json(ApiDataResponse::of(created.to_string())))
}

/// Replace a place's mutable fields. Updating an unknown id reports success
/// without touching storage.
#[utoipa::path(
    put,
    path = "/api/places/{placeId}",
    params(("placeId" = i64, Path, description = "Place identifier")),
    request_body = PlaceRequest,
    responses(
        (status = 200, description = "Update accepted", body = ApiDataResponse<String>),
        (status = 400, description = "Malformed request body"),
        (status = 500, description = "Storage failure")
    ),
    tags = ["places"],
    operation_id = "modifyPlace"
)]
#[put("/places/{place_id}")]
pub async fn modify_place(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<PlaceRequest>,
) -> ApiResult<HttpResponse> {
    let modified = state
        .places
        .modify_place(
            Some(path.into_inner()),
            Some(payload.into_inner().into_payload()),
        )
        .await?;
    Ok(HttpResponse::Ok().json(ApiDataResponse::of(modified.to_string())))
}

/// Delete a place.
#[utoipa::path(
    delete,
    path = "/api/places/{placeId}",
    params(("placeId" = i64, Path, description = "Place identifier")),
    responses(
        (status = 200, description = "Delete accepted", body = ApiDataResponse<String>),
        (status = 500, description = "Storage failure")
    ),
    tags = ["places"],
    operation_id = "removePlace"
)]
#[delete("/places/{place_id}")]
pub async fn remove_place(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let removed = state.places.remove_place(Some(path.into_inner())).await?;
    Ok(HttpResponse::Ok().json(ApiDataResponse::of(removed.to_string())))
}
