//! Success envelope shared by every JSON endpoint.

use serde::Serialize;

use crate::domain::ErrorKind;

/// JSON body for successful requests:
/// `{"success":true,"code":0,"message":"OK","data":...}`.
///
/// `data` is always present, serialised as `null` when the operation has
/// nothing to return (for example a lookup that found no row).
#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiDataResponse<T> {
    pub success: bool,
    pub code: u32,
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiDataResponse<T> {
    /// Envelope wrapping a payload.
    pub fn of(data: T) -> Self {
        Self {
            success: true,
            code: ErrorKind::Ok.code(),
            message: ErrorKind::Ok.default_message().to_owned(),
            data: Some(data),
        }
    }

    /// Envelope with a `null` payload.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            success: true,
            code: ErrorKind::Ok.code(),
            message: ErrorKind::Ok.default_message().to_owned(),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn of_wraps_the_payload() {
        let envelope = ApiDataResponse::of(vec![1, 2]);
        let value = serde_json::to_value(&envelope).expect("serialise");
        assert_eq!(
            value,
            json!({"success": true, "code": 0, "message": "OK", "data": [1, 2]}),
        );
    }

    #[test]
    fn empty_serialises_data_as_null() {
        let envelope = ApiDataResponse::<String>::empty();
        let value = serde_json::to_value(&envelope).expect("serialise");
        assert_eq!(
            value,
            json!({"success": true, "code": 0, "message": "OK", "data": null}),
        );
    }
}
