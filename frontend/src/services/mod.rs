pub mod api;
pub mod logging;

pub use api::{ApiClient, ApiError};
pub use logging::Logger;
