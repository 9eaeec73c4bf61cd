//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the migrations exactly; regenerate with
//! `diesel print-schema` when the schema changes.

diesel::table! {
    /// Venues that can host events.
    places (id) {
        id -> Int8,
        place_type -> Varchar,
        place_name -> Varchar,
        address -> Varchar,
        phone_number -> Varchar,
        capacity -> Int4,
        memo -> Nullable<Text>,
        created_at -> Timestamp,
        modified_at -> Timestamp,
    }
}

diesel::table! {
    /// Time-slotted bookings at a place.
    events (id) {
        id -> Int8,
        place_id -> Int8,
        event_name -> Varchar,
        event_status -> Varchar,
        event_start_datetime -> Timestamp,
        event_end_datetime -> Timestamp,
        current_number_of_people -> Int4,
        capacity -> Int4,
        memo -> Nullable<Text>,
        created_at -> Timestamp,
        modified_at -> Timestamp,
    }
}

diesel::joinable!(events -> places (place_id));

diesel::allow_tables_to_appear_in_same_query!(events, places);
