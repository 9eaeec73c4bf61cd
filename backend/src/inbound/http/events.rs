//! Events API handlers.
//!
//! ```text
//! GET    /api/events                     (paged search over the places join)
//! GET    /api/places/{placeId}/events    (unpaginated listing for one place)
//! POST   /api/events
//! GET    /api/events/{eventId}
//! PUT    /api/events/{eventId}
//! DELETE /api/events/{eventId}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope::ApiDataResponse;
use crate::inbound::http::schemas::{
    EventDetailResponse, EventRequest, EventResponse, EventSearchParams, EventViewResponse,
    PageResponse, PlaceEventsParams,
};
use crate::inbound::http::state::HttpState;

/// Paged search over events joined with their place. Absent criteria impose
/// no constraint; blank name terms count as absent.
#[utoipa::path(
    get,
    path = "/api/events",
    params(EventSearchParams),
    responses(
        (status = 200, description = "One page of matches", body = ApiDataResponse<PageResponse<EventViewResponse>>),
        (status = 400, description = "Malformed query or page size out of range"),
        (status = 500, description = "Storage failure")
    ),
    tags = ["events"],
    operation_id = "searchEvents"
)]
#[get("/events")]
pub async fn search_events(
    state: web::Data<HttpState>,
    params: web::Query<EventSearchParams>,
) -> ApiResult<HttpResponse> {
    let request = params.page_request()?;
    let page = state
        .events
        .search_events(&params.criteria(), &request)
        .await?;
    let data = PageResponse::from_page(page, EventViewResponse::from_view);
    Ok(HttpResponse::Ok().json(ApiDataResponse::of(data)))
}

/// List every event held at one place, optionally narrowed by status.
#[utoipa::path(
    get,
    path = "/api/places/{placeId}/events",
    params(
        ("placeId" = i64, Path, description = "Place identifier"),
        PlaceEventsParams,
    ),
    responses(
        (status = 200, description = "Events at the place", body = ApiDataResponse<Vec<EventResponse>>),
        (status = 400, description = "Malformed query"),
        (status = 500, description = "Storage failure")
    ),
    tags = ["events"],
    operation_id = "listPlaceEvents"
)]
#[get("/places/{place_id}/events")]
pub async fn list_place_events(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    params: web::Query<PlaceEventsParams>,
) -> ApiResult<HttpResponse> {
    let filter = params.into_inner().into_filter(path.into_inner());
    let events = state.events.get_events(&filter).await?;
    let data: Vec<EventResponse> = events.into_iter().map(EventResponse::from_event).collect();
    Ok(HttpResponse::Ok().json(ApiDataResponse::of(data)))
}

/// Fetch one event with its place embedded. A missing id is not an error:
/// the envelope reports success with a `null` payload.
#[utoipa::path(
    get,
    path = "/api/events/{eventId}",
    params(("eventId" = i64, Path, description = "Event identifier")),
    responses(
        (status = 200, description = "The event, or null when unknown", body = ApiDataResponse<EventDetailResponse>),
        (status = 500, description = "Storage failure")
    ),
    tags = ["events"],
    operation_id = "getEvent"
)]
#[get("/events/{event_id}")]
pub async fn get_event(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let detail = state.events.get_event(path.into_inner()).await?;
    let envelope = match detail {
        Some(detail) => ApiDataResponse::of(EventDetailResponse::from_detail(detail)),
        None => ApiDataResponse::empty(),
    };
    Ok(HttpResponse::Ok().json(envelope))
}

/// Create an event. The referenced place must exist.
#[utoipa::path(
    post,
    path = "/api/events",
    request_body = EventRequest,
    responses(
        (status = 201, description = "Event created", body = ApiDataResponse<String>),
        (status = 400, description = "Malformed request body"),
        (status = 500, description = "Unknown place or storage failure")
    ),
    tags = ["events"],
    operation_id = "createEvent"
)]
#[post("/events")]
pub async fn create_event(
    state: web::Data<HttpState>,
    payload: web::Json<EventRequest>,
) -> ApiResult<HttpResponse> {
    let created = state
        .events
        .create_event(Some(payload.into_inner().into_payload()))
        .await?;
    Ok(HttpResponse::Created().json(ApiDataResponse::of(created.to_string())))
}

/// Replace an event's mutable fields. Updating an unknown id reports success
/// without touching storage.
#[utoipa::path(
    put,
    path = "/api/events/{eventId}",
    params(("eventId" = i64, Path, description = "Event identifier")),
    request_body = EventRequest,
    responses(
        (status = 200, description = "Update accepted", body = ApiDataResponse<String>),
        (status = 400, description = "Malformed request body"),
        (status = 500, description = "Storage failure")
    ),
    tags = ["events"],
    operation_id = "modifyEvent"
)]
#[put("/events/{event_id}")]
pub async fn modify_event(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<EventRequest>,
) -> ApiResult<HttpResponse> {
    let modified = state
        .events
        .modify_event(
            Some(path.into_inner()),
            Some(payload.into_inner().into_payload()),
        )
        .await?;
    Ok(HttpResponse::Ok().json(ApiDataResponse::of(modified.to_string())))
}

/// Delete an event.
#[utoipa::path(
    delete,
    path = "/api/events/{eventId}",
    params(("eventId" = i64, Path, description = "Event identifier")),
    responses(
        (status = 200, description = "Delete accepted", body = ApiDataResponse<String>),
        (status = 500, description = "Storage failure")
    ),
    tags = ["events"],
    operation_id = "removeEvent"
)]
#[delete("/events/{event_id}")]
pub async fn remove_event(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let removed = state.events.remove_event(Some(path.into_inner())).await?;
    Ok(HttpResponse::Ok().json(ApiDataResponse::of(removed.to_string())))
}
