//! Domain DTOs for the expense API.
//!
//! # Design
//! These types mirror the backend's JSON schema but are defined independently
//! of the mock-server crate. Dates stay as the ISO-8601 strings the backend
//! sent; only the view interprets them.

use serde::{Deserialize, Serialize};

/// Server-assigned identifier of an expense.
pub type ExpenseId = i64;

/// A single expense record returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: ExpenseId,
    pub description: String,
    pub category: String,
    pub amount: f64,
    pub expense_date: String,
    pub date_added: String,
}

/// Request payload for creating or replacing an expense.
///
/// Carries no identifier: create and update are told apart by the operation
/// and URL, never by the payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRequest {
    pub description: String,
    pub category: String,
    pub amount: f64,
    pub expense_date: String,
}
