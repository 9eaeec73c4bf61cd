//! In-memory port implementations and an application builder for HTTP tests.
//!
//! The doubles mirror the storage contracts closely enough to drive full
//! request/response cycles: ids are assigned sequentially, the search honours
//! every criterion, and both datetime bounds constrain the event's start
//! timestamp.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use pagination::{Page, PageRequest};

use backend::domain::ports::{EventRepository, EventSearch, PlaceRepository, RepositoryError};
use backend::domain::search::{EventFilter, EventSearchCriteria, EventView};
use backend::domain::{Event, EventPayload, Place, PlacePayload};
use backend::inbound::http::state::HttpState;

#[derive(Default)]
struct StoreState {
    places: BTreeMap<i64, Place>,
    events: BTreeMap<i64, Event>,
    next_place_id: i64,
    next_event_id: i64,
}

/// Shared in-memory backing store implementing all three storage ports.
#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<StoreState>,
}

impl InMemoryStore {
    #[must_use]
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

fn lock_poisoned() -> RepositoryError {
    RepositoryError::connection("store lock poisoned")
}

#[async_trait]
impl PlaceRepository for InMemoryStore {
    async fn find_all(&self) -> Result<Vec<Place>, RepositoryError> {
        let state = self.state.lock().map_err(|_| lock_poisoned())?;
        Ok(state.places.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Place>, RepositoryError> {
        let state = self.state.lock().map_err(|_| lock_poisoned())?;
        Ok(state.places.get(&id).cloned())
    }

    async fn insert(&self, payload: &PlacePayload) -> Result<Place, RepositoryError> {
        let mut state = self.state.lock().map_err(|_| lock_poisoned())?;
        state.next_place_id += 1;
        let now = Utc::now().naive_utc();
        let place = Place {
            id: state.next_place_id,
            place_type: payload.place_type,
            place_name: payload.place_name.clone(),
            address: payload.address.clone(),
            phone_number: payload.phone_number.clone(),
            capacity: payload.capacity,
            memo: payload.memo.clone(),
            created_at: now,
            modified_at: now,
        };
        state.places.insert(place.id, place.clone());
        Ok(place)
    }

    async fn update(&self, place: &Place) -> Result<(), RepositoryError> {
        let mut state = self.state.lock().map_err(|_| lock_poisoned())?;
        state.places.insert(place.id, place.clone());
        Ok(())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError> {
        let mut state = self.state.lock().map_err(|_| lock_poisoned())?;
        state.places.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl EventRepository for InMemoryStore {
    async fn find_all(&self, filter: &EventFilter) -> Result<Vec<Event>, RepositoryError> {
        let state = self.state.lock().map_err(|_| lock_poisoned())?;
        let mut events: Vec<Event> = state
            .events
            .values()
            .filter(|event| {
                filter.place_id.is_none_or(|id| event.place_id == id)
                    && filter
                        .event_status
                        .is_none_or(|status| event.event_status == status)
            })
            .cloned()
            .collect();
        events.sort_by_key(|event| (event.event_start_datetime, event.id));
        Ok(events)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Event>, RepositoryError> {
        let state = self.state.lock().map_err(|_| lock_poisoned())?;
        Ok(state.events.get(&id).cloned())
    }

    async fn insert(&self, payload: &EventPayload) -> Result<Event, RepositoryError> {
        let mut state = self.state.lock().map_err(|_| lock_poisoned())?;
        state.next_event_id += 1;
        let now = Utc::now().naive_utc();
        let event = Event {
            id: state.next_event_id,
            place_id: payload.place_id,
            event_name: payload.event_name.clone(),
            event_status: payload.event_status,
            event_start_datetime: payload.event_start_datetime,
            event_end_datetime: payload.event_end_datetime,
            current_number_of_people: payload.current_number_of_people,
            capacity: payload.capacity,
            memo: payload.memo.clone(),
            created_at: now,
            modified_at: now,
        };
        state.events.insert(event.id, event.clone());
        Ok(event)
    }

    async fn update(&self, event: &Event) -> Result<(), RepositoryError> {
        let mut state = self.state.lock().map_err(|_| lock_poisoned())?;
        state.events.insert(event.id, event.clone());
        Ok(())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError> {
        let mut state = self.state.lock().map_err(|_| lock_poisoned())?;
        state.events.remove(&id);
        Ok(())
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[async_trait]
impl EventSearch for InMemoryStore {
    async fn search(
        &self,
        criteria: &EventSearchCriteria,
        page: &PageRequest,
    ) -> Result<Page<EventView>, RepositoryError> {
        let state = self.state.lock().map_err(|_| lock_poisoned())?;
        let mut matches: Vec<EventView> = state
            .events
            .values()
            .filter_map(|event| {
                let place = state.places.get(&event.place_id)?;
                let matched = criteria
                    .place_name_term()
                    .is_none_or(|term| contains_ignore_case(&place.place_name, term))
                    && criteria
                        .event_name_term()
                        .is_none_or(|term| contains_ignore_case(&event.event_name, term))
                    && criteria
                        .event_status
                        .is_none_or(|status| event.event_status == status)
                    && criteria
                        .event_start_datetime
                        .is_none_or(|start| event.event_start_datetime >= start)
                    && criteria
                        .event_end_datetime
                        .is_none_or(|end| event.event_start_datetime <= end);
                matched.then(|| EventView {
                    id: event.id,
                    place_name: place.place_name.clone(),
                    event_name: event.event_name.clone(),
                    event_status: event.event_status,
                    event_start_datetime: event.event_start_datetime,
                    event_end_datetime: event.event_end_datetime,
                    current_number_of_people: event.current_number_of_people,
                    capacity: event.capacity,
                    memo: event.memo.clone(),
                })
            })
            .collect();
        matches.sort_by_key(|view| (view.event_start_datetime, view.id));

        let total = matches.len() as u64;
        let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(page.limit()).unwrap_or(0);
        let content: Vec<EventView> = matches.into_iter().skip(offset).take(limit).collect();
        Ok(Page::new(content, page, total))
    }
}

/// HTTP state over a fresh in-memory store, returned alongside the store so
/// tests can seed or inspect it through the port traits.
#[must_use]
pub fn in_memory_state() -> (Arc<InMemoryStore>, HttpState) {
    let store = InMemoryStore::new();
    let state = HttpState::new(
        Arc::clone(&store) as Arc<dyn PlaceRepository>,
        Arc::clone(&store) as Arc<dyn EventRepository>,
        Arc::clone(&store) as Arc<dyn EventSearch>,
    );
    (store, state)
}
