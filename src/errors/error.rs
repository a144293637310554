use thiserror::Error;

use super::codes::ErrorCode;
use super::detail::ErrorDetail;
use super::response::ErrorResponse;

/// Failed PowerAuth call, ready to be propagated with `?`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("authentication rejected (HTTP {http_status}): {detail}")]
    Authentication { http_status: u16, detail: ErrorDetail },

    #[error("server error (HTTP {http_status}): {detail}")]
    Server { http_status: u16, detail: ErrorDetail },

    #[error("unexpected response without error detail (HTTP {http_status})")]
    Unexpected { http_status: u16 },
}

impl ApiError {
    /// HTTP status the failed call arrived with
    pub fn http_status(&self) -> u16 {
        match self {
            Self::Authentication { http_status, .. }
            | Self::Server { http_status, .. }
            | Self::Unexpected { http_status } => *http_status,
        }
    }

    /// Error payload sent by the server, if any
    pub fn detail(&self) -> Option<&ErrorDetail> {
        match self {
            Self::Authentication { detail, .. } | Self::Server { detail, .. } => Some(detail),
            Self::Unexpected { .. } => None,
        }
    }

    /// Known error code of the payload
    pub fn code(&self) -> Option<ErrorCode> {
        self.detail().and_then(ErrorDetail::known_code)
    }
}

fn is_authentication_failure(http_status: u16, detail: &ErrorDetail) -> bool {
    match detail.known_code() {
        Some(ErrorCode::Authentication | ErrorCode::SecureVault | ErrorCode::Signature) => true,
        Some(_) => false,
        None => http_status == 401,
    }
}

/// Successful responses are handed back unchanged as the error value
impl TryFrom<ErrorResponse> for ApiError {
    type Error = ErrorResponse;

    fn try_from(response: ErrorResponse) -> Result<Self, Self::Error> {
        if response.is_success() {
            return Err(response);
        }

        let (_, http_status, detail) = response.into_parts();
        Ok(match detail {
            Some(detail) if is_authentication_failure(http_status, &detail) => {
                Self::Authentication {
                    http_status,
                    detail,
                }
            }
            Some(detail) => Self::Server {
                http_status,
                detail,
            },
            None => Self::Unexpected { http_status },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ResponseStatus;

    #[test]
    fn test_known_auth_code_maps_to_authentication() {
        let response = ErrorResponse::new(
            ResponseStatus::Error,
            401,
            Some(ErrorDetail::from_code(ErrorCode::SecureVault, "POWER_AUTH_VAULT_INVALID")),
        );
        let err = ApiError::try_from(response).unwrap();
        assert!(matches!(err, ApiError::Authentication { .. }));
        assert_eq!(err.code(), Some(ErrorCode::SecureVault));
        assert_eq!(err.http_status(), 401);
    }

    #[test]
    fn test_unknown_code_uses_http_status() {
        let err = ApiError::try_from(ErrorResponse::new(
            ResponseStatus::Error,
            401,
            Some(ErrorDetail::new("AUTH_FAIL", "invalid signature")),
        ))
        .unwrap();
        assert!(matches!(err, ApiError::Authentication { .. }));
        assert_eq!(err.code(), None);
        assert_eq!(
            err.to_string(),
            "authentication rejected (HTTP 401): AUTH_FAIL: invalid signature"
        );

        let err = ApiError::try_from(ErrorResponse::new(
            ResponseStatus::Error,
            503,
            Some(ErrorDetail::new("MAINTENANCE", "try later")),
        ))
        .unwrap();
        assert!(matches!(err, ApiError::Server { http_status: 503, .. }));
    }

    #[test]
    fn test_known_non_auth_code_wins_over_401() {
        let err = ApiError::try_from(ErrorResponse::new(
            ResponseStatus::Error,
            401,
            Some(ErrorDetail::from_code(ErrorCode::Activation, "POWER_AUTH_ACTIVATION_INVALID")),
        ))
        .unwrap();
        assert!(matches!(err, ApiError::Server { .. }));
    }

    #[test]
    fn test_missing_detail_is_unexpected() {
        let err = ApiError::try_from(ErrorResponse::new(ResponseStatus::Ok, 502, None)).unwrap();
        assert_eq!(err, ApiError::Unexpected { http_status: 502 });
        assert!(err.detail().is_none());
        assert_eq!(
            err.to_string(),
            "unexpected response without error detail (HTTP 502)"
        );
    }

    #[test]
    fn test_success_is_not_an_error() {
        let response = ErrorResponse::new(ResponseStatus::Ok, 200, None);
        let returned = ApiError::try_from(response.clone()).unwrap_err();
        assert_eq!(returned, response);
    }
}
