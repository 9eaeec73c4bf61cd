//! OpenAPI documentation configuration.
//!
//! The generated document covers every REST endpoint and the wire schemas
//! used by the envelope. Debug builds serve it at `/api-docs/openapi.json`.

use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Venue admin API",
        description = "HTTP interface for managing places, their events, and the paged event search."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::places::list_places,
        crate::inbound::http::places::get_place,
        crate::inbound::http::places::create_place,
        crate::inbound::http::places::modify_place,
        crate::inbound::http::places::remove_place,
        crate::inbound::http::events::list_place_events,
        crate::inbound::http::events::search_events,
        crate::inbound::http::events::get_event,
        crate::inbound::http::events::create_event,
        crate::inbound::http::events::modify_event,
        crate::inbound::http::events::remove_event,
        crate::inbound::http::auth::sign_up,
        crate::inbound::http::auth::login,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        crate::domain::PlaceType,
        crate::domain::EventStatus,
        crate::inbound::http::error::ApiErrorBody,
        crate::inbound::http::schemas::PlaceRequest,
        crate::inbound::http::schemas::PlaceResponse,
        crate::inbound::http::schemas::EventRequest,
        crate::inbound::http::schemas::EventResponse,
        crate::inbound::http::schemas::EventDetailResponse,
        crate::inbound::http::schemas::EventViewResponse,
        crate::inbound::http::schemas::SignUpRequest,
        crate::inbound::http::schemas::LoginRequest,
        crate::inbound::http::schemas::PageResponse<crate::inbound::http::schemas::EventViewResponse>,
        crate::inbound::http::envelope::ApiDataResponse<String>,
        crate::inbound::http::envelope::ApiDataResponse<crate::inbound::http::schemas::PlaceResponse>,
        crate::inbound::http::envelope::ApiDataResponse<Vec<crate::inbound::http::schemas::PlaceResponse>>,
        crate::inbound::http::envelope::ApiDataResponse<Vec<crate::inbound::http::schemas::EventResponse>>,
        crate::inbound::http::envelope::ApiDataResponse<crate::inbound::http::schemas::EventDetailResponse>,
        crate::inbound::http::envelope::ApiDataResponse<crate::inbound::http::schemas::PageResponse<crate::inbound::http::schemas::EventViewResponse>>,
    ))
)]
pub struct ApiDoc;
