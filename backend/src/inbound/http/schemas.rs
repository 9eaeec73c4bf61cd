//! Request and response DTOs for the HTTP API.
//!
//! Handlers convert between these wire shapes and domain types at the edge,
//! so domain structs never grow serde or OpenAPI concerns beyond their enums.

use chrono::NaiveDateTime;
use pagination::{Page, PageRequest};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::search::{EventFilter, EventSearchCriteria, EventView};
use crate::domain::{
    Error, ErrorKind, Event, EventDetail, EventPayload, EventStatus, Place, PlacePayload,
    PlaceType,
};

/// Request body for creating or replacing a place.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlaceRequest {
    pub place_type: PlaceType,
    pub place_name: String,
    pub address: String,
    pub phone_number: String,
    pub capacity: i32,
    pub memo: Option<String>,
}

impl PlaceRequest {
    pub fn into_payload(self) -> PlacePayload {
        PlacePayload {
            place_type: self.place_type,
            place_name: self.place_name,
            address: self.address,
            phone_number: self.phone_number,
            capacity: self.capacity,
            memo: self.memo,
        }
    }
}

/// Place representation returned to clients.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlaceResponse {
    pub id: i64,
    pub place_type: PlaceType,
    pub place_name: String,
    pub address: String,
    pub phone_number: String,
    pub capacity: i32,
    pub memo: Option<String>,
}

impl PlaceResponse {
    #[must_use]
    pub fn from_place(place: Place) -> Self {
        Self {
            id: place.id,
            place_type: place.place_type,
            place_name: place.place_name,
            address: place.address,
            phone_number: place.phone_number,
            capacity: place.capacity,
            memo: place.memo,
        }
    }
}

/// Request body for creating or replacing an event.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventRequest {
    pub place_id: i64,
    pub event_name: String,
    pub event_status: EventStatus,
    pub event_start_datetime: NaiveDateTime,
    pub event_end_datetime: NaiveDateTime,
    pub current_number_of_people: i32,
    pub capacity: i32,
    pub memo: Option<String>,
}

impl EventRequest {
    pub fn into_payload(self) -> EventPayload {
        EventPayload {
            place_id: self.place_id,
            event_name: self.event_name,
            event_status: self.event_status,
            event_start_datetime: self.event_start_datetime,
            event_end_datetime: self.event_end_datetime,
            current_number_of_people: self.current_number_of_people,
            capacity: self.capacity,
            memo: self.memo,
        }
    }
}

/// Event representation for list endpoints, referencing its place by id.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    pub id: i64,
    pub place_id: i64,
    pub event_name: String,
    pub event_status: EventStatus,
    pub event_start_datetime: NaiveDateTime,
    pub event_end_datetime: NaiveDateTime,
    pub current_number_of_people: i32,
    pub capacity: i32,
    pub memo: Option<String>,
}

impl EventResponse {
    #[must_use]
    pub fn from_event(event: Event) -> Self {
        Self {
            id: event.id,
            place_id: event.place_id,
            event_name: event.event_name,
            event_status: event.event_status,
            event_start_datetime: event.event_start_datetime,
            event_end_datetime: event.event_end_datetime,
            current_number_of_people: event.current_number_of_people,
            capacity: event.capacity,
            memo: event.memo,
        }
    }
}

/// Single-event representation with its place embedded.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventDetailResponse {
    pub id: i64,
    pub event_name: String,
    pub event_status: EventStatus,
    pub event_start_datetime: NaiveDateTime,
    pub event_end_datetime: NaiveDateTime,
    pub current_number_of_people: i32,
    pub capacity: i32,
    pub memo: Option<String>,
    pub place: PlaceResponse,
}

impl EventDetailResponse {
    #[must_use]
    pub fn from_detail(detail: EventDetail) -> Self {
        let EventDetail { event, place } = detail;
        Self {
            id: event.id,
            event_name: event.event_name,
            event_status: event.event_status,
            event_start_datetime: event.event_start_datetime,
            event_end_datetime: event.event_end_datetime,
            current_number_of_people: event.current_number_of_people,
            capacity: event.capacity,
            memo: event.memo,
            place: PlaceResponse::from_place(place),
        }
    }
}

/// Projected row returned by the event search.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventViewResponse {
    pub id: i64,
    pub place_name: String,
    pub event_name: String,
    pub event_status: EventStatus,
    pub event_start_datetime: NaiveDateTime,
    pub event_end_datetime: NaiveDateTime,
    pub current_number_of_people: i32,
    pub capacity: i32,
    pub memo: Option<String>,
}

impl EventViewResponse {
    #[must_use]
    pub fn from_view(view: EventView) -> Self {
        Self {
            id: view.id,
            place_name: view.place_name,
            event_name: view.event_name,
            event_status: view.event_status,
            event_start_datetime: view.event_start_datetime,
            event_end_datetime: view.event_end_datetime,
            current_number_of_people: view.current_number_of_people,
            capacity: view.capacity,
            memo: view.memo,
        }
    }
}

/// One page of results, in the shape pagination reports internally.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    pub content: Vec<T>,
    pub page: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u64,
}

impl<T> PageResponse<T> {
    pub fn from_page<S>(page: Page<S>, f: impl FnMut(S) -> T) -> Self {
        let index = page.page();
        let size = page.size();
        let total_elements = page.total_elements();
        let total_pages = page.total_pages();
        Self {
            content: page.into_content().into_iter().map(f).collect(),
            page: index,
            size,
            total_elements,
            total_pages,
        }
    }
}

/// Query parameters for the per-place event listing.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct PlaceEventsParams {
    pub event_status: Option<EventStatus>,
}

impl PlaceEventsParams {
    #[must_use]
    pub fn into_filter(self, place_id: i64) -> EventFilter {
        EventFilter {
            place_id: Some(place_id),
            event_status: self.event_status,
        }
    }
}

/// Query parameters for the paged event search.
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct EventSearchParams {
    pub place_name: Option<String>,
    pub event_name: Option<String>,
    pub event_status: Option<EventStatus>,
    pub event_start_datetime: Option<NaiveDateTime>,
    pub event_end_datetime: Option<NaiveDateTime>,
    #[serde(default)]
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub size: u32,
}

fn default_page_size() -> u32 {
    pagination::DEFAULT_PAGE_SIZE
}

impl EventSearchParams {
    #[must_use]
    pub fn criteria(&self) -> EventSearchCriteria {
        EventSearchCriteria {
            place_name: self.place_name.clone(),
            event_name: self.event_name.clone(),
            event_status: self.event_status,
            event_start_datetime: self.event_start_datetime,
            event_end_datetime: self.event_end_datetime,
        }
    }

    /// Validate the paging portion of the query.
    pub fn page_request(&self) -> Result<PageRequest, Error> {
        PageRequest::new(self.page, self.size)
            .map_err(|err| Error::with_message(ErrorKind::ValidationError, err.to_string()))
    }
}

/// Request body for the sign-up stub.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub email: String,
    pub nickname: String,
    pub password: String,
    pub phone_number: Option<String>,
}

/// Request body for the login stub.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}
