//! API client core for the expense service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). `ExpenseApi` pairs the
//! stateless `ExpenseClient` with a caller-supplied `Transport` to expose
//! every operation as an async call.
//!
//! # Design
//! - `ExpenseClient` is stateless and holds only `base_url`.
//! - Each operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - Failures are surfaced raw: no retries, no status classification.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use client::ExpenseClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{ExpenseApi, Transport};
pub use types::{Expense, ExpenseId, ExpenseRequest};
