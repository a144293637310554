use anyhow::{Context, Result};
use serde_json::Value;
use tracing::{debug, info};

use crate::errors::{ErrorDetail, ErrorResponse};
use crate::models::envelope::RestResponse;

const HTTP_STATUS_FIELD: &str = "httpStatusCode";

/// Decode an error document
///
/// A document carrying `httpStatusCode` must be a valid `ErrorResponse`. A raw
/// envelope without it gets the status its body implies, else
/// `fallback_http_status`.
pub fn parse_document(input: &str, fallback_http_status: u16) -> Result<ErrorResponse> {
    let document: Value = serde_json::from_str(input).context("Input is not valid JSON")?;

    let response = if document.get(HTTP_STATUS_FIELD).is_some() {
        serde_json::from_value::<ErrorResponse>(document)
            .context("Input is not a valid ErrorResponse")?
    } else {
        let envelope: RestResponse<ErrorDetail> = serde_json::from_value(document)
            .context("Input is not a valid PowerAuth response envelope")?;
        let http_status = ErrorResponse::implied_http_status(&envelope, fallback_http_status);
        debug!("No {} in document, using {}", HTTP_STATUS_FIELD, http_status);
        ErrorResponse::from_envelope(http_status, envelope)
    };

    info!(
        status = %response.status(),
        http_status = response.http_status_code(),
        code = response.response_object().map(ErrorDetail::code).unwrap_or("-"),
        known = response.error_code().is_some(),
        "Decoded PowerAuth error response"
    );

    Ok(response)
}

/// Render the normalized response as JSON
pub fn render(response: &ErrorResponse, pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(response)
    } else {
        serde_json::to_string(response)
    };
    rendered.context("Failed to serialize ErrorResponse")
}
