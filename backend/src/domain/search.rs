//! Search criteria and the projected row shape for the event listing query.

use chrono::NaiveDateTime;

use super::event::EventStatus;

/// Optional criteria for the event search. Absent criteria impose no
/// constraint; each present criterion contributes exactly one predicate,
/// conjoined with the others.
///
/// Both datetime bounds deliberately apply to the event's **start**
/// timestamp: `event_start_datetime` filters `start >= bound` and
/// `event_end_datetime` filters `start <= bound`, not a range intersection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EventSearchCriteria {
    pub place_name: Option<String>,
    pub event_name: Option<String>,
    pub event_status: Option<EventStatus>,
    pub event_start_datetime: Option<NaiveDateTime>,
    pub event_end_datetime: Option<NaiveDateTime>,
}

impl EventSearchCriteria {
    /// Place-name term, with blank input treated as absent.
    #[must_use]
    pub fn place_name_term(&self) -> Option<&str> {
        non_blank(self.place_name.as_deref())
    }

    /// Event-name term, with blank input treated as absent.
    #[must_use]
    pub fn event_name_term(&self) -> Option<&str> {
        non_blank(self.event_name.as_deref())
    }

    /// Whether no criterion is set, i.e. the search is an unfiltered listing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.place_name_term().is_none()
            && self.event_name_term().is_none()
            && self.event_status.is_none()
            && self.event_start_datetime.is_none()
            && self.event_end_datetime.is_none()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

/// Lightweight projection returned by the search: an event row joined with
/// the name of its place, not the full entities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventView {
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

/// Simple filter for the unpaginated event listing path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventFilter {
    pub place_id: Option<i64>,
    pub event_status: Option<EventStatus>,
}
