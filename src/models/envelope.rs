use serde::{Deserialize, Serialize};

use crate::errors::codes::ResponseStatus;

/// Generic PowerAuth response body: `{"status": ..., "responseObject": ...}`
///
/// Success and error bodies share this envelope. For errors the payload is an
/// [`ErrorDetail`](crate::errors::ErrorDetail).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestResponse<T> {
    status: ResponseStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_object: Option<T>,
}

impl<T> RestResponse<T> {
    /// Create an envelope with an explicit status
    pub fn new(status: ResponseStatus, response_object: Option<T>) -> Self {
        Self {
            status,
            response_object,
        }
    }

    /// Create a successful envelope around a payload
    pub fn ok(response_object: T) -> Self {
        Self::new(ResponseStatus::Ok, Some(response_object))
    }

    /// Create an error envelope around a payload
    pub fn error(response_object: T) -> Self {
        Self::new(ResponseStatus::Error, Some(response_object))
    }

    /// Envelope status
    pub fn status(&self) -> ResponseStatus {
        self.status
    }

    /// Payload, if the body carried one
    pub fn response_object(&self) -> Option<&T> {
        self.response_object.as_ref()
    }

    /// Split into status and payload
    pub fn into_parts(self) -> (ResponseStatus, Option<T>) {
        (self.status, self.response_object)
    }
}
