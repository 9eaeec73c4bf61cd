//! Event entity: a scheduled, time-boxed activity bound to a place.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::place::Place;

/// Lifecycle state of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventStatus {
    /// Accepting attendees.
    Opened,
    /// Finished normally.
    Closed,
    /// Cancelled before completion.
    Aborted,
}

/// Raised when a stored status label does not name a known [`EventStatus`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown event status: {0}")]
pub struct ParseEventStatusError(String);

impl EventStatus {
    /// Uppercase label used in storage and on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Opened => "OPENED",
            Self::Closed => "CLOSED",
            Self::Aborted => "ABORTED",
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventStatus {
    type Err = ParseEventStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OPENED" => Ok(Self::Opened),
            "CLOSED" => Ok(Self::Closed),
            "ABORTED" => Ok(Self::Aborted),
            other => Err(ParseEventStatusError(other.to_owned())),
        }
    }
}

/// A persisted event record referencing its hosting place by id.
///
/// Neither `event_start_datetime <= event_end_datetime` nor
/// `current_number_of_people <= capacity` is enforced here; both constraints
/// are pending a product decision and stay documented gaps until then.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: i64,
    pub place_id: i64,
    pub event_name: String,
    pub event_status: EventStatus,
    pub event_start_datetime: NaiveDateTime,
    pub event_end_datetime: NaiveDateTime,
    pub current_number_of_people: i32,
    pub capacity: i32,
    pub memo: Option<String>,
    pub created_at: NaiveDateTime,
    pub modified_at: NaiveDateTime,
}

/// Caller-supplied event fields; the identifier and audit timestamps are
/// owned by storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventPayload {
    pub place_id: i64,
    pub event_name: String,
    pub event_status: EventStatus,
    pub event_start_datetime: NaiveDateTime,
    pub event_end_datetime: NaiveDateTime,
    pub current_number_of_people: i32,
    pub capacity: i32,
    pub memo: Option<String>,
}

impl Event {
    /// Overwrite the mutable fields from an update payload, keeping identity
    /// and creation timestamp.
    pub fn apply(&mut self, payload: &EventPayload) {
        self.place_id = payload.place_id;
        self.event_name.clone_from(&payload.event_name);
        self.event_status = payload.event_status;
        self.event_start_datetime = payload.event_start_datetime;
        self.event_end_datetime = payload.event_end_datetime;
        self.current_number_of_people = payload.current_number_of_people;
        self.capacity = payload.capacity;
        self.memo.clone_from(&payload.memo);
    }
}

/// An event joined with the place hosting it, as returned by detail reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDetail {
    pub event: Event,
    pub place: Place,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(EventStatus::Opened, "OPENED")]
    #[case(EventStatus::Closed, "CLOSED")]
    #[case(EventStatus::Aborted, "ABORTED")]
    fn labels_round_trip(#[case] status: EventStatus, #[case] label: &str) {
        assert_eq!(status.as_str(), label);
        assert_eq!(label.parse::<EventStatus>(), Ok(status));
    }

    #[test]
    fn unknown_label_is_rejected() {
        let result = "PAUSED".parse::<EventStatus>();
        assert_eq!(result, Err(ParseEventStatusError("PAUSED".to_owned())));
    }
}
