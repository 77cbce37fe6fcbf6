//! Portal client module for HTTP communication

mod http;
mod payload;
mod submit;
mod traits;

pub use http::PortalClient;
pub use submit::{submit, SubmitError};
