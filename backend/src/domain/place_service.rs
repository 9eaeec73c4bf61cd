//! Thin orchestration over the place repository.
//!
//! Guard logic only: absent identifiers or payloads abort with `Ok(false)`
//! before storage is touched, and every storage failure is wrapped into the
//! data-access error kind.

use std::sync::Arc;

use crate::domain::error::Error;
use crate::domain::place::{Place, PlacePayload};
use crate::domain::ports::PlaceRepository;

#[derive(Clone)]
pub struct PlaceService {
    places: Arc<dyn PlaceRepository>,
}

impl PlaceService {
    pub fn new(places: Arc<dyn PlaceRepository>) -> Self {
        Self { places }
    }

    /// List every place.
    pub async fn get_places(&self) -> Result<Vec<Place>, Error> {
        self.places.find_all().await.map_err(Error::data_access)
    }

    /// Fetch one place; a missing id yields `Ok(None)`, not an error.
    pub async fn get_place(&self, place_id: i64) -> Result<Option<Place>, Error> {
        self.places
            .find_by_id(place_id)
            .await
            .map_err(Error::data_access)
    }

    /// Create a place. An absent payload aborts with `Ok(false)` without
    /// touching storage.
    pub async fn create_place(&self, payload: Option<PlacePayload>) -> Result<bool, Error> {
        let Some(payload) = payload else {
            return Ok(false);
        };
        self.places
            .insert(&payload)
            .await
            .map_err(Error::data_access)?;
        Ok(true)
    }

    /// Update a place by overwriting its fields from the payload.
    ///
    /// Absent id or payload aborts with `Ok(false)` and zero storage calls.
    /// An id that resolves to no record is a silent no-op that still reports
    /// `Ok(true)` -- a carried-over behaviour awaiting a product decision.
    pub async fn modify_place(
        &self,
        place_id: Option<i64>,
        payload: Option<PlacePayload>,
    ) -> Result<bool, Error> {
        let (Some(place_id), Some(payload)) = (place_id, payload) else {
            return Ok(false);
        };
        if let Some(mut place) = self
            .places
            .find_by_id(place_id)
            .await
            .map_err(Error::data_access)?
        {
            place.apply(&payload);
            self.places
                .update(&place)
                .await
                .map_err(Error::data_access)?;
        }
        Ok(true)
    }

    /// Delete a place by id. An absent id aborts with `Ok(false)` without
    /// touching storage.
    pub async fn remove_place(&self, place_id: Option<i64>) -> Result<bool, Error> {
        let Some(place_id) = place_id else {
            return Ok(false);
        };
        self.places
            .delete_by_id(place_id)
            .await
            .map_err(Error::data_access)?;
        Ok(true)
    }
}
