//! Typed client core for the todo API.
//!
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network; the host runs the actual HTTP round-trip. Keeping
//! I/O out of the core makes it deterministic to test and usable from any
//! HTTP stack.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::TodoClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{FieldErrors, Todo, TodoPayload};
