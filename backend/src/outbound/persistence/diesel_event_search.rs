//! Dynamic event search over the events/places join.
//!
//! Criteria are compiled into a boxed Diesel query: each present criterion
//! adds one `WHERE` predicate, all conjoined. Name terms match with a
//! case-insensitive contains (`ILIKE '%term%'`), and both datetime bounds
//! constrain the event's start timestamp. The page of projected rows and the
//! matching-row count are fetched with two separate queries sharing the same
//! predicate set.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use pagination::{Page, PageRequest};

use crate::domain::ports::{EventSearch, RepositoryError};
use crate::domain::search::{EventSearchCriteria, EventView};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{EventViewRow, row_to_event_view};
use super::pool::DbPool;
use super::schema::{events, places};

/// Column tuple for the projected search row, in `EventViewRow` order.
macro_rules! event_view_columns {
    () => {
        (
            events::id,
            places::place_name,
            events::event_name,
            events::event_status,
            events::event_start_datetime,
            events::event_end_datetime,
            events::current_number_of_people,
            events::capacity,
            events::memo,
        )
    };
}

/// Apply the present search criteria to a boxed query. Used for both the row
/// query and the count query so the two cannot drift apart.
macro_rules! apply_criteria {
    ($query:expr, $criteria:expr) => {{
        let mut query = $query;
        if let Some(term) = $criteria.place_name_term() {
            query = query.filter(places::place_name.ilike(like_pattern(term)));
        }
        if let Some(term) = $criteria.event_name_term() {
            query = query.filter(events::event_name.ilike(like_pattern(term)));
        }
        if let Some(status) = $criteria.event_status {
            query = query.filter(events::event_status.eq(status.as_str()));
        }
        if let Some(start) = $criteria.event_start_datetime {
            query = query.filter(events::event_start_datetime.ge(start));
        }
        if let Some(end) = $criteria.event_end_datetime {
            query = query.filter(events::event_start_datetime.le(end));
        }
        query
    }};
}

/// Wrap a search term for a contains match, escaping `LIKE` metacharacters
/// so user input matches literally.
fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

/// Diesel-backed implementation of the event search port.
#[derive(Clone)]
pub struct DieselEventSearch {
    pool: DbPool,
}

impl DieselEventSearch {
    /// Create a new search adapter over the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventSearch for DieselEventSearch {
    async fn search(
        &self,
        criteria: &EventSearchCriteria,
        page: &PageRequest,
    ) -> Result<Page<EventView>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows_query = events::table
            .inner_join(places::table)
            .select(event_view_columns!())
            .into_boxed();
        let rows: Vec<EventViewRow> = apply_criteria!(rows_query, criteria)
            .order((events::event_start_datetime.asc(), events::id.asc()))
            .offset(page.offset())
            .limit(page.limit())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        let count_query = events::table
            .inner_join(places::table)
            .count()
            .into_boxed();
        let total: i64 = apply_criteria!(count_query, criteria)
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        let views = rows
            .into_iter()
            .map(row_to_event_view)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Page::new(views, page, u64::try_from(total).unwrap_or(0)))
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use diesel::debug_query;
    use diesel::pg::Pg;
    use rstest::rstest;

    use crate::domain::EventStatus;

    use super::*;

    fn rows_sql(criteria: &EventSearchCriteria) -> String {
        let query = events::table
            .inner_join(places::table)
            .select(event_view_columns!())
            .into_boxed::<Pg>();
        let query = apply_criteria!(query, criteria);
        debug_query::<Pg, _>(&query).to_string()
    }

    fn count_sql(criteria: &EventSearchCriteria) -> String {
        let query = events::table.inner_join(places::table).count().into_boxed::<Pg>();
        let query = apply_criteria!(query, criteria);
        debug_query::<Pg, _>(&query).to_string()
    }

    #[test]
    fn empty_criteria_add_no_predicates() {
        let sql = rows_sql(&EventSearchCriteria::default());
        assert!(!sql.contains("WHERE"), "unexpected WHERE in: {sql}");
    }

    #[test]
    fn name_terms_become_ilike_contains() {
        let criteria = EventSearchCriteria {
            place_name: Some("gym".to_owned()),
            event_name: Some("morning".to_owned()),
            ..EventSearchCriteria::default()
        };
        let sql = rows_sql(&criteria);
        assert_eq!(sql.matches("ILIKE").count(), 2, "sql: {sql}");
        assert!(sql.contains("%gym%"), "sql: {sql}");
        assert!(sql.contains("%morning%"), "sql: {sql}");
    }

    #[test]
    fn both_datetime_bounds_constrain_the_start_timestamp() {
        let criteria = EventSearchCriteria {
            event_start_datetime: NaiveDate::from_ymd_opt(2021, 1, 1)
                .and_then(|d| d.and_hms_opt(12, 0, 0)),
            event_end_datetime: NaiveDate::from_ymd_opt(2021, 1, 1)
                .and_then(|d| d.and_hms_opt(14, 0, 0)),
            ..EventSearchCriteria::default()
        };
        let sql = rows_sql(&criteria);
        assert_eq!(
            sql.matches("\"events\".\"event_start_datetime\" >=").count(),
            1,
            "sql: {sql}",
        );
        assert_eq!(
            sql.matches("\"events\".\"event_start_datetime\" <=").count(),
            1,
            "sql: {sql}",
        );
        assert!(
            !sql.contains("\"event_end_datetime\" <="),
            "end column must not be constrained: {sql}",
        );
    }

    #[test]
    fn status_criterion_filters_on_its_label() {
        let criteria = EventSearchCriteria {
            event_status: Some(EventStatus::Opened),
            ..EventSearchCriteria::default()
        };
        let sql = rows_sql(&criteria);
        assert!(sql.contains("\"events\".\"event_status\" ="), "sql: {sql}");
        assert!(sql.contains("OPENED"), "sql: {sql}");
    }

    #[test]
    fn count_query_carries_the_same_predicates() {
        let criteria = EventSearchCriteria {
            event_name: Some("badminton".to_owned()),
            event_status: Some(EventStatus::Closed),
            ..EventSearchCriteria::default()
        };
        let sql = count_sql(&criteria);
        assert!(sql.contains("count(*)"), "sql: {sql}");
        assert!(sql.contains("ILIKE"), "sql: {sql}");
        assert!(sql.contains("%badminton%"), "sql: {sql}");
        assert!(sql.contains("CLOSED"), "sql: {sql}");
    }

    #[rstest]
    #[case("plain", "%plain%")]
    #[case("50%", "%50\\%%")]
    #[case("a_b", "%a\\_b%")]
    #[case("back\\slash", "%back\\\\slash%")]
    fn like_patterns_escape_metacharacters(#[case] term: &str, #[case] expected: &str) {
        assert_eq!(like_pattern(term), expected);
    }
}
