// Library exports for testing
pub mod config;
pub mod errors;
pub mod inspect;
pub mod models;

pub use errors::{ApiError, ErrorCode, ErrorDetail, ErrorResponse, ResponseStatus};
pub use models::envelope::RestResponse;
