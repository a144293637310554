use serde::{Deserialize, Serialize};
use std::fmt;

/// Response status carried in every PowerAuth REST envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResponseStatus {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "ERROR")]
    Error,
}

impl ResponseStatus {
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }
}

impl fmt::Display for ResponseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => write!(f, "OK"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// Error codes the PowerAuth server puts into `responseObject.code`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Unspecified server failure
    #[serde(rename = "ERROR_GENERIC")]
    Generic,

    /// Signature or token verification failed
    #[serde(rename = "ERR_AUTHENTICATION")]
    Authentication,

    /// Activation is missing, blocked or in the wrong state
    #[serde(rename = "ERR_ACTIVATION")]
    Activation,

    /// Vault unlock rejected
    #[serde(rename = "ERR_SECURE_VAULT")]
    SecureVault,

    /// Protocol upgrade could not be started or committed
    #[serde(rename = "ERR_UPGRADE")]
    Upgrade,

    /// Recovery code or PUK rejected
    #[serde(rename = "ERR_RECOVERY")]
    Recovery,

    /// Request could not be prepared on the server
    #[serde(rename = "ERR_PREPARE")]
    Prepare,

    /// Signature type not allowed for the endpoint
    #[serde(rename = "ERR_SIGNATURE")]
    Signature,

    /// Token creation or removal failed
    #[serde(rename = "ERR_TOKEN")]
    Token,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 9] = [
        Self::Generic,
        Self::Authentication,
        Self::Activation,
        Self::SecureVault,
        Self::Upgrade,
        Self::Recovery,
        Self::Prepare,
        Self::Signature,
        Self::Token,
    ];

    /// Wire representation of the code
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Generic => "ERROR_GENERIC",
            Self::Authentication => "ERR_AUTHENTICATION",
            Self::Activation => "ERR_ACTIVATION",
            Self::SecureVault => "ERR_SECURE_VAULT",
            Self::Upgrade => "ERR_UPGRADE",
            Self::Recovery => "ERR_RECOVERY",
            Self::Prepare => "ERR_PREPARE",
            Self::Signature => "ERR_SIGNATURE",
            Self::Token => "ERR_TOKEN",
        }
    }

    /// Look up a known code. Unknown codes yield `None`.
    pub fn parse(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == code)
    }

    /// HTTP status the server normally pairs with this code
    pub fn default_http_status(&self) -> u16 {
        match self {
            Self::Authentication | Self::SecureVault | Self::Signature => 401,
            Self::Generic => 500,
            Self::Activation
            | Self::Upgrade
            | Self::Recovery
            | Self::Prepare
            | Self::Token => 400,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_status_wire_values() {
        assert_eq!(serde_json::to_string(&ResponseStatus::Ok).unwrap(), "\"OK\"");
        assert_eq!(
            serde_json::from_str::<ResponseStatus>("\"ERROR\"").unwrap(),
            ResponseStatus::Error
        );
        assert!(serde_json::from_str::<ResponseStatus>("\"ok\"").is_err());
    }

    #[test]
    fn test_response_status_predicates() {
        assert!(ResponseStatus::Ok.is_ok());
        assert!(!ResponseStatus::Ok.is_error());
        assert!(ResponseStatus::Error.is_error());
        assert_eq!(ResponseStatus::Error.to_string(), "ERROR");
    }

    #[test]
    fn test_error_code_parse_matches_serde() {
        for code in ErrorCode::ALL {
            assert_eq!(ErrorCode::parse(code.as_str()), Some(code));
            let json = serde_json::to_string(&code).unwrap();
            assert_eq!(json, format!("\"{}\"", code));
        }
        assert_eq!(ErrorCode::parse("AUTH_FAIL"), None);
    }

    #[test]
    fn test_error_code_http_status() {
        assert_eq!(ErrorCode::Authentication.default_http_status(), 401);
        assert_eq!(ErrorCode::Activation.default_http_status(), 400);
        assert_eq!(ErrorCode::Generic.default_http_status(), 500);
    }
}
