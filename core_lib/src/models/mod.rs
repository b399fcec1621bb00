pub mod provider;
pub mod request;

pub use provider::{NewProvider, Provider};
pub use request::ApiResponse;
