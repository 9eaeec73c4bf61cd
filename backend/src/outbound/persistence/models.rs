//! Row types bridging Diesel results and domain entities.
//!
//! Enum-typed domain fields are stored as uppercase text; `row_to_*`
//! conversions parse them back and surface unknown labels as query errors.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::ports::RepositoryError;
use crate::domain::search::EventView;
use crate::domain::{Event, EventPayload, Place, PlacePayload};

use super::schema::{events, places};

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = places)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct PlaceRow {
    pub id: i64,
    pub place_type: String,
    pub place_name: String,
    pub address: String,
    pub phone_number: String,
    pub capacity: i32,
    pub memo: Option<String>,
    pub created_at: NaiveDateTime,
    pub modified_at: NaiveDateTime,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = places)]
pub struct NewPlaceRow<'a> {
    pub place_type: &'a str,
    pub place_name: &'a str,
    pub address: &'a str,
    pub phone_number: &'a str,
    pub capacity: i32,
    pub memo: Option<&'a str>,
}

#[derive(Debug, AsChangeset)]
#[diesel(table_name = places)]
pub struct PlaceChangeset<'a> {
    pub place_type: &'a str,
    pub place_name: &'a str,
    pub address: &'a str,
    pub phone_number: &'a str,
    pub capacity: i32,
    pub memo: Option<&'a str>,
    pub modified_at: NaiveDateTime,
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = events)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct EventRow {
    pub id: i64,
    pub place_id: i64,
    pub event_name: String,
    pub event_status: String,
    pub event_start_datetime: NaiveDateTime,
    pub event_end_datetime: NaiveDateTime,
    pub current_number_of_people: i32,
    pub capacity: i32,
    pub memo: Option<String>,
    pub created_at: NaiveDateTime,
    pub modified_at: NaiveDateTime,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = events)]
pub struct NewEventRow<'a> {
    pub place_id: i64,
    pub event_name: &'a str,
    pub event_status: &'a str,
    pub event_start_datetime: NaiveDateTime,
    pub event_end_datetime: NaiveDateTime,
    pub current_number_of_people: i32,
    pub capacity: i32,
    pub memo: Option<&'a str>,
}

#[derive(Debug, AsChangeset)]
#[diesel(table_name = events)]
pub struct EventChangeset<'a> {
    pub place_id: i64,
    pub event_name: &'a str,
    pub event_status: &'a str,
    pub event_start_datetime: NaiveDateTime,
    pub event_end_datetime: NaiveDateTime,
    pub current_number_of_people: i32,
    pub capacity: i32,
    pub memo: Option<&'a str>,
    pub modified_at: NaiveDateTime,
}

/// Projected search row: an event joined with its place's name.
#[derive(Debug, Queryable)]
pub struct EventViewRow {
    pub id: i64,
    pub place_name: String,
    pub event_name: String,
    pub event_status: String,
    pub event_start_datetime: NaiveDateTime,
    pub event_end_datetime: NaiveDateTime,
    pub current_number_of_people: i32,
    pub capacity: i32,
    pub memo: Option<String>,
}

impl<'a> NewPlaceRow<'a> {
    pub fn from_payload(payload: &'a PlacePayload) -> Self {
        Self {
            place_type: payload.place_type.as_str(),
            place_name: &payload.place_name,
            address: &payload.address,
            phone_number: &payload.phone_number,
            capacity: payload.capacity,
            memo: payload.memo.as_deref(),
        }
    }
}

impl<'a> PlaceChangeset<'a> {
    pub fn from_place(place: &'a Place, modified_at: NaiveDateTime) -> Self {
        Self {
            place_type: place.place_type.as_str(),
            place_name: &place.place_name,
            address: &place.address,
            phone_number: &place.phone_number,
            capacity: place.capacity,
            memo: place.memo.as_deref(),
            modified_at,
        }
    }
}

impl<'a> NewEventRow<'a> {
    pub fn from_payload(payload: &'a EventPayload) -> Self {
        Self {
            place_id: payload.place_id,
            event_name: &payload.event_name,
            event_status: payload.event_status.as_str(),
            event_start_datetime: payload.event_start_datetime,
            event_end_datetime: payload.event_end_datetime,
            current_number_of_people: payload.current_number_of_people,
            capacity: payload.capacity,
            memo: payload.memo.as_deref(),
        }
    }
}

impl<'a> EventChangeset<'a> {
    pub fn from_event(event: &'a Event, modified_at: NaiveDateTime) -> Self {
        Self {
            place_id: event.place_id,
            event_name: &event.event_name,
            event_status: event.event_status.as_str(),
            event_start_datetime: event.event_start_datetime,
            event_end_datetime: event.event_end_datetime,
            current_number_of_people: event.current_number_of_people,
            capacity: event.capacity,
            memo: event.memo.as_deref(),
            modified_at,
        }
    }
}

/// Convert a place row into a validated domain place.
pub fn row_to_place(row: PlaceRow) -> Result<Place, RepositoryError> {
    let place_type = row
        .place_type
        .parse()
        .map_err(|err: crate::domain::place::ParsePlaceTypeError| {
            RepositoryError::query(err.to_string())
        })?;
    Ok(Place {
        id: row.id,
        place_type,
        place_name: row.place_name,
        address: row.address,
        phone_number: row.phone_number,
        capacity: row.capacity,
        memo: row.memo,
        created_at: row.created_at,
        modified_at: row.modified_at,
    })
}

/// Convert an event row into a validated domain event.
pub fn row_to_event(row: EventRow) -> Result<Event, RepositoryError> {
    let event_status = row
        .event_status
        .parse()
        .map_err(|err: crate::domain::event::ParseEventStatusError| {
            RepositoryError::query(err.to_string())
        })?;
    Ok(Event {
        id: row.id,
        place_id: row.place_id,
        event_name: row.event_name,
        event_status,
        event_start_datetime: row.event_start_datetime,
        event_end_datetime: row.event_end_datetime,
        current_number_of_people: row.current_number_of_people,
        capacity: row.capacity,
        memo: row.memo,
        created_at: row.created_at,
        modified_at: row.modified_at,
    })
}

/// Convert a projected search row into the domain view.
pub fn row_to_event_view(row: EventViewRow) -> Result<EventView, RepositoryError> {
    let event_status = row
        .event_status
        .parse()
        .map_err(|err: crate::domain::event::ParseEventStatusError| {
            RepositoryError::query(err.to_string())
        })?;
    Ok(EventView {
        id: row.id,
        place_name: row.place_name,
        event_name: row.event_name,
        event_status,
        event_start_datetime: row.event_start_datetime,
        event_end_datetime: row.event_end_datetime,
        current_number_of_people: row.current_number_of_people,
        capacity: row.capacity,
        memo: row.memo,
    })
}
