use http::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::codes::{ErrorCode, ResponseStatus};
use super::detail::ErrorDetail;
use super::error::ApiError;
use crate::models::envelope::RestResponse;

/// Error response of the PowerAuth Standard RESTful API
///
/// Built once when a call completes and read by whatever handles the failure.
/// Nothing here mutates the fields after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Status from the response envelope
    status: ResponseStatus,
    /// Transport-level HTTP status
    http_status_code: u16,
    /// Error payload, absent when the server sent none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    response_object: Option<ErrorDetail>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(
        status: ResponseStatus,
        http_status_code: u16,
        response_object: Option<ErrorDetail>,
    ) -> Self {
        Self {
            status,
            http_status_code,
            response_object,
        }
    }

    /// Join a decoded envelope with the HTTP status it arrived with
    pub fn from_envelope(http_status_code: u16, envelope: RestResponse<ErrorDetail>) -> Self {
        let (status, response_object) = envelope.into_parts();
        Self::new(status, http_status_code, response_object)
    }

    /// HTTP status implied by an envelope that arrived without one
    ///
    /// `OK` maps to 200 and a known error code to the status the server pairs
    /// with it. Anything else gets `fallback`.
    pub fn implied_http_status(envelope: &RestResponse<ErrorDetail>, fallback: u16) -> u16 {
        if envelope.status().is_ok() {
            return 200;
        }
        envelope
            .response_object()
            .and_then(ErrorDetail::known_code)
            .map(|code| code.default_http_status())
            .unwrap_or(fallback)
    }

    /// Status from the response envelope
    pub fn status(&self) -> ResponseStatus {
        self.status
    }

    /// HTTP status code of the response
    pub fn http_status_code(&self) -> u16 {
        self.http_status_code
    }

    /// Error payload, if any
    pub fn response_object(&self) -> Option<&ErrorDetail> {
        self.response_object.as_ref()
    }

    /// Typed HTTP status, `None` when the integer is not a valid status code
    pub fn status_code(&self) -> Option<StatusCode> {
        StatusCode::from_u16(self.http_status_code).ok()
    }

    /// True only for an `OK` envelope delivered with a 2xx status
    pub fn is_success(&self) -> bool {
        self.status.is_ok() && (200..300).contains(&self.http_status_code)
    }

    /// Known error code of the payload
    pub fn error_code(&self) -> Option<ErrorCode> {
        self.response_object.as_ref().and_then(ErrorDetail::known_code)
    }

    /// Take the error payload
    pub fn into_response_object(self) -> Option<ErrorDetail> {
        self.response_object
    }

    /// Split into status, HTTP status and payload
    pub fn into_parts(self) -> (ResponseStatus, u16, Option<ErrorDetail>) {
        (self.status, self.http_status_code, self.response_object)
    }

    /// Convert into a `Result` so callers can propagate failures with `?`
    pub fn into_result(self) -> Result<(), ApiError> {
        match ApiError::try_from(self) {
            Ok(error) => {
                warn!(http_status = error.http_status(), "PowerAuth call failed: {}", error);
                Err(error)
            }
            Err(response) => {
                debug!(http_status = response.http_status_code, "PowerAuth call succeeded");
                Ok(())
            }
        }
    }
}
