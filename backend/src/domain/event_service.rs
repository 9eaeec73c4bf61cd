//! Thin orchestration over event storage and the paginated search port.
//!
//! Mirrors the place service's guard semantics; in addition, creating an
//! event first resolves its place so an event never references a venue that
//! does not exist.

use std::sync::Arc;

use pagination::{Page, PageRequest};

use crate::domain::error::Error;
use crate::domain::event::{Event, EventDetail, EventPayload};
use crate::domain::ports::{EventRepository, EventSearch, PlaceRepository};
use crate::domain::search::{EventFilter, EventSearchCriteria, EventView};

#[derive(Clone)]
pub struct EventService {
    events: Arc<dyn EventRepository>,
    places: Arc<dyn PlaceRepository>,
    search: Arc<dyn EventSearch>,
}

impl EventService {
    pub fn new(
        events: Arc<dyn EventRepository>,
        places: Arc<dyn PlaceRepository>,
        search: Arc<dyn EventSearch>,
    ) -> Self {
        Self {
            events,
            places,
            search,
        }
    }

    /// List events matching the filter, unpaginated.
    pub async fn get_events(&self, filter: &EventFilter) -> Result<Vec<Event>, Error> {
        self.events
            .find_all(filter)
            .await
            .map_err(Error::data_access)
    }

    /// Run the paginated search over events joined with places.
    pub async fn search_events(
        &self,
        criteria: &EventSearchCriteria,
        page: &PageRequest,
    ) -> Result<Page<EventView>, Error> {
        self.search
            .search(criteria, page)
            .await
            .map_err(Error::data_access)
    }

    /// Fetch one event with its hosting place; a missing id yields
    /// `Ok(None)`, not an error. An event whose place reference no longer
    /// resolves indicates an inconsistent store and fails as a data-access
    /// error.
    pub async fn get_event(&self, event_id: i64) -> Result<Option<EventDetail>, Error> {
        let Some(event) = self
            .events
            .find_by_id(event_id)
            .await
            .map_err(Error::data_access)?
        else {
            return Ok(None);
        };
        let place = self
            .places
            .find_by_id(event.place_id)
            .await
            .map_err(Error::data_access)?
            .ok_or_else(|| {
                Error::data_access(format!(
                    "event {event_id} references missing place {}",
                    event.place_id
                ))
            })?;
        Ok(Some(EventDetail { event, place }))
    }

    /// Create an event. An absent payload aborts with `Ok(false)` without
    /// touching storage; a payload referencing a place that does not exist
    /// fails as a data-access error before any insert is attempted.
    pub async fn create_event(&self, payload: Option<EventPayload>) -> Result<bool, Error> {
        let Some(payload) = payload else {
            return Ok(false);
        };
        let place = self
            .places
            .find_by_id(payload.place_id)
            .await
            .map_err(Error::data_access)?;
        if place.is_none() {
            return Err(Error::data_access(format!(
                "place {} does not exist",
                payload.place_id
            )));
        }
        self.events
            .insert(&payload)
            .await
            .map_err(Error::data_access)?;
        Ok(true)
    }

    /// Update an event by overwriting its fields from the payload.
    ///
    /// Absent id or payload aborts with `Ok(false)` and zero storage calls.
    /// An id that resolves to no record is a silent no-op that still reports
    /// `Ok(true)` -- carried-over behaviour awaiting a product decision.
    pub async fn modify_event(
        &self,
        event_id: Option<i64>,
        payload: Option<EventPayload>,
    ) -> Result<bool, Error> {
        let (Some(event_id), Some(payload)) = (event_id, payload) else {
            return Ok(false);
        };
        if let Some(mut event) = self
            .events
            .find_by_id(event_id)
            .await
            .map_err(Error::data_access)?
        {
            event.apply(&payload);
            self.events
                .update(&event)
                .await
                .map_err(Error::data_access)?;
        }
        Ok(true)
    }

    /// Delete an event by id. An absent id aborts with `Ok(false)` without
    /// touching storage.
    pub async fn remove_event(&self, event_id: Option<i64>) -> Result<bool, Error> {
        let Some(event_id) = event_id else {
            return Ok(false);
        };
        self.events
            .delete_by_id(event_id)
            .await
            .map_err(Error::data_access)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::{NaiveDate, NaiveDateTime};

    use super::*;
    use crate::domain::error::ErrorKind;
    use crate::domain::event::EventStatus;
    use crate::domain::place::{Place, PlacePayload, PlaceType};
    use crate::domain::ports::RepositoryError;

    struct StubState<T> {
        stored: Vec<T>,
        failure: Option<RepositoryError>,
        calls: u32,
    }

    // Manual impl so `T` does not need `Default` (derive would add that bound).
    impl<T> Default for StubState<T> {
        fn default() -> Self {
            Self {
                stored: Vec::new(),
                failure: None,
                calls: 0,
            }
        }
    }

    #[derive(Default)]
    struct StubEventRepository {
        state: Mutex<StubState<Event>>,
    }

    #[derive(Default)]
    struct StubPlaceRepository {
        state: Mutex<StubState<Place>>,
    }

    impl StubEventRepository {
        fn with_event(event: Event) -> Self {
            Self {
                state: Mutex::new(StubState {
                    stored: vec![event],
                    ..StubState::default()
                }),
            }
        }

        fn failing() -> Self {
            Self {
                state: Mutex::new(StubState {
                    failure: Some(RepositoryError::query("boom")),
                    ..StubState::default()
                }),
            }
        }

        fn calls(&self) -> u32 {
            self.state.lock().expect("state lock").calls
        }

        fn record_call(&self) -> Result<Vec<Event>, RepositoryError> {
            let mut state = self.state.lock().expect("state lock");
            state.calls += 1;
            match &state.failure {
                Some(failure) => Err(failure.clone()),
                None => Ok(state.stored.clone()),
            }
        }
    }

    impl StubPlaceRepository {
        fn with_place(place: Place) -> Self {
            Self {
                state: Mutex::new(StubState {
                    stored: vec![place],
                    ..StubState::default()
                }),
            }
        }

        fn calls(&self) -> u32 {
            self.state.lock().expect("state lock").calls
        }

        fn record_call(&self) -> Result<Vec<Place>, RepositoryError> {
            let mut state = self.state.lock().expect("state lock");
            state.calls += 1;
            match &state.failure {
                Some(failure) => Err(failure.clone()),
                None => Ok(state.stored.clone()),
            }
        }
    }

    #[async_trait]
    impl EventRepository for StubEventRepository {
        async fn find_all(&self, _filter: &EventFilter) -> Result<Vec<Event>, RepositoryError> {
            self.record_call()
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<Event>, RepositoryError> {
            let stored = self.record_call()?;
            Ok(stored.into_iter().find(|event| event.id == id))
        }

        async fn insert(&self, payload: &EventPayload) -> Result<Event, RepositoryError> {
            self.record_call()?;
            Ok(event_from_payload(1, payload))
        }

        async fn update(&self, _event: &Event) -> Result<(), RepositoryError> {
            self.record_call().map(|_| ())
        }

        async fn delete_by_id(&self, _id: i64) -> Result<(), RepositoryError> {
            self.record_call().map(|_| ())
        }
    }

    #[async_trait]
    impl PlaceRepository for StubPlaceRepository {
        async fn find_all(&self) -> Result<Vec<Place>, RepositoryError> {
            self.record_call()
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<Place>, RepositoryError> {
            let stored = self.record_call()?;
            Ok(stored.into_iter().find(|place| place.id == id))
        }

        async fn insert(&self, _payload: &PlacePayload) -> Result<Place, RepositoryError> {
            unimplemented!("not exercised by event service tests")
        }

        async fn update(&self, _place: &Place) -> Result<(), RepositoryError> {
            unimplemented!("not exercised by event service tests")
        }

        async fn delete_by_id(&self, _id: i64) -> Result<(), RepositoryError> {
            unimplemented!("not exercised by event service tests")
        }
    }

    struct NeverSearch;

    #[async_trait]
    impl EventSearch for NeverSearch {
        async fn search(
            &self,
            _criteria: &EventSearchCriteria,
            _page: &PageRequest,
        ) -> Result<Page<EventView>, RepositoryError> {
            unimplemented!("not exercised by these tests")
        }
    }

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2021, 1, 1)
            .expect("valid date")
            .and_hms_opt(hour, 0, 0)
            .expect("valid time")
    }

    fn place(id: i64) -> Place {
        Place {
            id,
            place_type: PlaceType::Sports,
            place_name: "test place".to_owned(),
            address: "test address".to_owned(),
            phone_number: "010-1234-1234".to_owned(),
            capacity: 10,
            memo: None,
            created_at: at(9),
            modified_at: at(9),
        }
    }

    fn payload(place_id: i64) -> EventPayload {
        EventPayload {
            place_id,
            event_name: "afternoon exercise".to_owned(),
            event_status: EventStatus::Opened,
            event_start_datetime: at(13),
            event_end_datetime: at(16),
            current_number_of_people: 0,
            capacity: 24,
            memo: Some("masks required".to_owned()),
        }
    }

    fn event_from_payload(id: i64, payload: &EventPayload) -> Event {
        Event {
            id,
            place_id: payload.place_id,
            event_name: payload.event_name.clone(),
            event_status: payload.event_status,
            event_start_datetime: payload.event_start_datetime,
            event_end_datetime: payload.event_end_datetime,
            current_number_of_people: payload.current_number_of_people,
            capacity: payload.capacity,
            memo: payload.memo.clone(),
            created_at: at(9),
            modified_at: at(9),
        }
    }

    fn service(
        events: Arc<StubEventRepository>,
        places: Arc<StubPlaceRepository>,
    ) -> EventService {
        EventService::new(events, places, Arc::new(NeverSearch))
    }

    #[tokio::test]
    async fn get_event_composes_event_with_its_place() {
        let stored = event_from_payload(1, &payload(1));
        let events = Arc::new(StubEventRepository::with_event(stored.clone()));
        let places = Arc::new(StubPlaceRepository::with_place(place(1)));

        let detail = service(events, places)
            .get_event(1)
            .await
            .expect("lookup succeeds")
            .expect("event exists");

        assert_eq!(detail.event, stored);
        assert_eq!(detail.place.id, 1);
    }

    #[tokio::test]
    async fn get_event_returns_empty_for_missing_id() {
        let events = Arc::new(StubEventRepository::default());
        let places = Arc::new(StubPlaceRepository::default());

        let detail = service(events, Arc::clone(&places))
            .get_event(2)
            .await
            .expect("lookup succeeds");

        assert!(detail.is_none());
        assert_eq!(places.calls(), 0);
    }

    #[tokio::test]
    async fn create_without_payload_aborts_without_storage_calls() {
        let events = Arc::new(StubEventRepository::default());
        let places = Arc::new(StubPlaceRepository::default());

        let created = service(Arc::clone(&events), Arc::clone(&places))
            .create_event(None)
            .await
            .expect("guard path succeeds");

        assert!(!created);
        assert_eq!(events.calls(), 0);
        assert_eq!(places.calls(), 0);
    }

    #[tokio::test]
    async fn create_with_unknown_place_fails_before_inserting() {
        let events = Arc::new(StubEventRepository::default());
        let places = Arc::new(StubPlaceRepository::default());

        let err = service(Arc::clone(&events), Arc::clone(&places))
            .create_event(Some(payload(7)))
            .await
            .expect_err("create fails");

        assert_eq!(err.kind(), ErrorKind::DataAccessError);
        assert!(err.message().contains("Data access error"));
        assert_eq!(places.calls(), 1);
        assert_eq!(events.calls(), 0);
    }

    #[tokio::test]
    async fn create_with_known_place_inserts_and_reports_success() {
        let events = Arc::new(StubEventRepository::default());
        let places = Arc::new(StubPlaceRepository::with_place(place(1)));

        let created = service(Arc::clone(&events), places)
            .create_event(Some(payload(1)))
            .await
            .expect("create succeeds");

        assert!(created);
        assert_eq!(events.calls(), 1);
    }

    #[tokio::test]
    async fn modify_without_id_or_payload_aborts_without_storage_calls() {
        let events = Arc::new(StubEventRepository::default());
        let places = Arc::new(StubPlaceRepository::default());
        let sut = service(Arc::clone(&events), places);

        assert!(!sut
            .modify_event(None, Some(payload(1)))
            .await
            .expect("guard path succeeds"));
        assert!(!sut
            .modify_event(Some(1), None)
            .await
            .expect("guard path succeeds"));
        assert_eq!(events.calls(), 0);
    }

    #[tokio::test]
    async fn modify_missing_id_is_a_silent_no_op_reporting_success() {
        let events = Arc::new(StubEventRepository::default());
        let places = Arc::new(StubPlaceRepository::default());

        let modified = service(Arc::clone(&events), places)
            .modify_event(Some(99), Some(payload(1)))
            .await
            .expect("lookup succeeds");

        assert!(modified);
        assert_eq!(events.calls(), 1);
    }

    #[tokio::test]
    async fn modify_overwrites_and_persists_existing_record() {
        let events = Arc::new(StubEventRepository::with_event(event_from_payload(
            1,
            &payload(1),
        )));
        let places = Arc::new(StubPlaceRepository::default());
        let mut changed = payload(1);
        changed.event_name = "morning exercise".to_owned();
        changed.event_start_datetime = at(9);
        changed.event_end_datetime = at(12);

        let modified = service(Arc::clone(&events), places)
            .modify_event(Some(1), Some(changed))
            .await
            .expect("update succeeds");

        assert!(modified);
        assert_eq!(events.calls(), 2);
    }

    #[tokio::test]
    async fn remove_without_id_aborts_without_storage_calls() {
        let events = Arc::new(StubEventRepository::default());
        let places = Arc::new(StubPlaceRepository::default());

        let removed = service(Arc::clone(&events), places)
            .remove_event(None)
            .await
            .expect("guard path succeeds");

        assert!(!removed);
        assert_eq!(events.calls(), 0);
    }

    #[tokio::test]
    async fn storage_failures_are_wrapped_as_data_access_errors() {
        let events = Arc::new(StubEventRepository::failing());
        let places = Arc::new(StubPlaceRepository::default());
        let sut = service(Arc::clone(&events), places);

        let err = sut
            .get_events(&EventFilter::default())
            .await
            .expect_err("listing fails");
        assert_eq!(err.kind(), ErrorKind::DataAccessError);
        assert!(err.message().contains("Data access error"));

        let err = sut.get_event(1).await.expect_err("lookup fails");
        assert_eq!(err.kind(), ErrorKind::DataAccessError);

        let err = sut.remove_event(Some(1)).await.expect_err("delete fails");
        assert_eq!(err.kind(), ErrorKind::DataAccessError);
    }
}
