//! PowerAuth error responses and their typed views

pub mod codes;
pub mod detail;
pub mod error;
pub mod response;

pub use codes::{ErrorCode, ResponseStatus};
pub use detail::ErrorDetail;
pub use error::ApiError;
pub use response::ErrorResponse;
