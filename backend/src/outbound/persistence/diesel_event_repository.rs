//! PostgreSQL-backed `EventRepository` implementation using Diesel.

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{EventRepository, RepositoryError};
use crate::domain::{Event, EventFilter, EventPayload};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{EventChangeset, EventRow, NewEventRow, row_to_event};
use super::pool::DbPool;
use super::schema::events;

/// Diesel-backed implementation of the event repository port.
#[derive(Clone)]
pub struct DieselEventRepository {
    pool: DbPool,
}

impl DieselEventRepository {
    /// Create a new repository over the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventRepository for DieselEventRepository {
    async fn find_all(&self, filter: &EventFilter) -> Result<Vec<Event>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let mut query = events::table
            .select(EventRow::as_select())
            .into_boxed();
        if let Some(place_id) = filter.place_id {
            query = query.filter(events::place_id.eq(place_id));
        }
        if let Some(status) = filter.event_status {
            query = query.filter(events::event_status.eq(status.as_str()));
        }
        let rows: Vec<EventRow> = query
            .order((events::event_start_datetime.asc(), events::id.asc()))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        rows.into_iter().map(row_to_event).collect()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Event>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<EventRow> = events::table
            .find(id)
            .select(EventRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        row.map(row_to_event).transpose()
    }

    async fn insert(&self, payload: &EventPayload) -> Result<Event, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: EventRow = diesel::insert_into(events::table)
            .values(NewEventRow::from_payload(payload))
            .returning(EventRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        row_to_event(row)
    }

    async fn update(&self, event: &Event) -> Result<(), RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::update(events::table.find(event.id))
            .set(EventChangeset::from_event(event, Utc::now().naive_utc()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::delete(events::table.find(id))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(())
    }
}
