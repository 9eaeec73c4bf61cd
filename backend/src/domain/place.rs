//! Place entity: a physical venue that can host events.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Enumerated venue category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlaceType {
    Common,
    Restaurant,
    Cafe,
    Sports,
    Party,
}

/// Raised when a stored category label does not name a known [`PlaceType`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown place type: {0}")]
pub struct ParsePlaceTypeError(String);

impl PlaceType {
    /// Uppercase label used in storage and on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Common => "COMMON",
            Self::Restaurant => "RESTAURANT",
            Self::Cafe => "CAFE",
            Self::Sports => "SPORTS",
            Self::Party => "PARTY",
        }
    }
}

impl fmt::Display for PlaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlaceType {
    type Err = ParsePlaceTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "COMMON" => Ok(Self::Common),
            "RESTAURANT" => Ok(Self::Restaurant),
            "CAFE" => Ok(Self::Cafe),
            "SPORTS" => Ok(Self::Sports),
            "PARTY" => Ok(Self::Party),
            other => Err(ParsePlaceTypeError(other.to_owned())),
        }
    }
}

/// A persisted venue record. Identity is the storage-assigned `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Place {
    pub id: i64,
    pub place_type: PlaceType,
    pub place_name: String,
    pub address: String,
    pub phone_number: String,
    pub capacity: i32,
    pub memo: Option<String>,
    pub created_at: NaiveDateTime,
    pub modified_at: NaiveDateTime,
}

/// Caller-supplied place fields; the identifier and audit timestamps are
/// owned by storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacePayload {
    pub place_type: PlaceType,
    pub place_name: String,
    pub address: String,
    pub phone_number: String,
    pub capacity: i32,
    pub memo: Option<String>,
}

impl Place {
    /// Overwrite the mutable fields from an update payload, keeping identity
    /// and creation timestamp.
    pub fn apply(&mut self, payload: &PlacePayload) {
        self.place_type = payload.place_type;
        self.place_name.clone_from(&payload.place_name);
        self.address.clone_from(&payload.address);
        self.phone_number.clone_from(&payload.phone_number);
        self.capacity = payload.capacity;
        self.memo.clone_from(&payload.memo);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(PlaceType::Common, "COMMON")]
    #[case(PlaceType::Sports, "SPORTS")]
    #[case(PlaceType::Party, "PARTY")]
    fn labels_round_trip(#[case] place_type: PlaceType, #[case] label: &str) {
        assert_eq!(place_type.as_str(), label);
        assert_eq!(label.parse::<PlaceType>(), Ok(place_type));
    }

    #[test]
    fn unknown_label_is_rejected() {
        let result = "ARENA".parse::<PlaceType>();
        assert_eq!(result, Err(ParsePlaceTypeError("ARENA".to_owned())));
    }
}
