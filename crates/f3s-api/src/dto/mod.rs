//! Request and response bodies of the HTTP API.

pub mod request;
pub mod response;
