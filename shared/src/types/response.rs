//! Uniform response envelope returned by every request handler

use serde::{Deserialize, Serialize};

use crate::errors::FieldErrors;

/// Classification of a failed request, used by the HTTP layer to pick a status code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Malformed input or a business rule violation
    Validation,
    /// Referenced entity absent or soft-deleted
    NotFound,
    /// Bad credentials or invalid/expired token
    Unauthorized,
    /// Authenticated but not allowed
    Forbidden,
    /// Caller abandoned the request
    Cancelled,
    /// Anything unexpected
    Internal,
}

impl FailureKind {
    /// HTTP status code for this failure class
    pub fn status_code(&self) -> u16 {
        match self {
            FailureKind::Validation => 400,
            FailureKind::Unauthorized => 401,
            FailureKind::Forbidden => 403,
            FailureKind::NotFound => 404,
            FailureKind::Cancelled => 499,
            FailureKind::Internal => 500,
        }
    }
}

/// `{isSuccess, data, message}` envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    /// Whether the request was successful
    pub is_success: bool,

    /// Response data (present on success)
    pub data: Option<T>,

    /// Human-readable outcome
    pub message: String,

    /// Field-keyed validation messages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,

    /// Failure class, never serialized
    #[serde(skip)]
    pub failure: Option<FailureKind>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            is_success: true,
            data: Some(data),
            message: message.into(),
            errors: None,
            failure: None,
        }
    }

    /// Create a failed response
    pub fn failure(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            is_success: false,
            data: None,
            message: message.into(),
            errors: None,
            failure: Some(kind),
        }
    }

    /// Create a validation failure carrying field errors
    pub fn validation(errors: FieldErrors) -> Self {
        Self {
            errors: Some(errors),
            ..Self::failure(FailureKind::Validation, "One or more validation errors occurred")
        }
    }

    /// Extract the data, consuming the response
    pub fn into_data(self) -> Option<T> {
        self.data
    }

    /// Map the data to a different type
    pub fn map<U, F>(self, f: F) -> ApiResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        ApiResponse {
            is_success: self.is_success,
            data: self.data.map(f),
            message: self.message,
            errors: self.errors,
            failure: self.failure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope() {
        let response = ApiResponse::success(5, "ok");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["isSuccess"], true);
        assert_eq!(json["data"], 5);
        assert_eq!(json["message"], "ok");
        assert!(json.get("errors").is_none());
        assert!(json.get("failure").is_none());
    }

    #[test]
    fn test_failure_envelope_has_null_data() {
        let response: ApiResponse<u8> = ApiResponse::failure(FailureKind::NotFound, "Product not found");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["isSuccess"], false);
        assert!(json["data"].is_null());
        assert_eq!(response.failure.map(|kind| kind.status_code()), Some(404));
    }

    #[test]
    fn test_validation_envelope() {
        let mut errors = FieldErrors::new();
        errors.insert("name".to_string(), vec!["Name is required".to_string()]);
        let response: ApiResponse<()> = ApiResponse::validation(errors);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["errors"]["name"][0], "Name is required");
        assert_eq!(response.failure, Some(FailureKind::Validation));
    }
}
