//! PostgreSQL-backed `PlaceRepository` implementation using Diesel.

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{PlaceRepository, RepositoryError};
use crate::domain::{Place, PlacePayload};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewPlaceRow, PlaceChangeset, PlaceRow, row_to_place};
use super::pool::DbPool;
use super::schema::places;

/// Diesel-backed implementation of the place repository port.
#[derive(Clone)]
pub struct DieselPlaceRepository {
    pool: DbPool,
}

impl DieselPlaceRepository {
    /// Create a new repository over the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlaceRepository for DieselPlaceRepository {
    async fn find_all(&self) -> Result<Vec<Place>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<PlaceRow> = places::table
            .order(places::id.asc())
            .select(PlaceRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        rows.into_iter().map(row_to_place).collect()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Place>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<PlaceRow> = places::table
            .find(id)
            .select(PlaceRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        row.map(row_to_place).transpose()
    }

    async fn insert(&self, payload: &PlacePayload) -> Result<Place, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: PlaceRow = diesel::insert_into(places::table)
            .values(NewPlaceRow::from_payload(payload))
            .returning(PlaceRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        row_to_place(row)
    }

    async fn update(&self, place: &Place) -> Result<(), RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::update(places::table.find(place.id))
            .set(PlaceChangeset::from_place(place, Utc::now().naive_utc()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::delete(places::table.find(id))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(())
    }
}
