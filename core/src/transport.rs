//! Async execution of client requests.
//!
//! # Design
//! `Transport` is the seam where I/O happens: it turns an `HttpRequest` into
//! an `HttpResponse`. `ExpenseApi` composes it with `ExpenseClient` so each
//! operation reads as build, execute, parse. There is no retry, caching or
//! de-duplication; every call is exactly one round-trip.

use std::future::Future;

use crate::client::ExpenseClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{Expense, ExpenseId, ExpenseRequest};

/// Executes plain-data HTTP requests.
///
/// Implementations return non-2xx responses as data and reserve `Err` for
/// requests that never produced a response.
pub trait Transport {
    fn execute(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, ApiError>> + Send;
}

/// Async API surface for the expense service.
#[derive(Debug, Clone)]
pub struct ExpenseApi<T> {
    client: ExpenseClient,
    transport: T,
}

impl<T: Transport + Sync> ExpenseApi<T> {
    pub fn new(client: ExpenseClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch the full collection in backend order.
    pub async fn list(&self) -> Result<Vec<Expense>, ApiError> {
        let response = self.send(self.client.build_list_expenses()).await?;
        self.client.parse_list_expenses(response)
    }

    pub async fn get_by_id(&self, id: ExpenseId) -> Result<Expense, ApiError> {
        let response = self.send(self.client.build_get_expense(id)).await?;
        self.client.parse_get_expense(response)
    }

    pub async fn create(&self, input: &ExpenseRequest) -> Result<Expense, ApiError> {
        let response = self.send(self.client.build_create_expense(input)?).await?;
        self.client.parse_create_expense(response)
    }

    /// Replace every client-owned field of the expense with `input`.
    pub async fn update(&self, id: ExpenseId, input: &ExpenseRequest) -> Result<Expense, ApiError> {
        let response = self
            .send(self.client.build_update_expense(id, input)?)
            .await?;
        self.client.parse_update_expense(response)
    }

    pub async fn delete(&self, id: ExpenseId) -> Result<(), ApiError> {
        let response = self.send(self.client.build_delete_expense(id)).await?;
        self.client.parse_delete_expense(response)
    }

    pub async fn total_amount(&self) -> Result<f64, ApiError> {
        let response = self.send(self.client.build_total_amount()).await?;
        self.client.parse_total_amount(response)
    }

    pub async fn total_amount_by_category(&self, category: &str) -> Result<f64, ApiError> {
        let response = self
            .send(self.client.build_total_amount_by_category(category))
            .await?;
        self.client.parse_total_amount_by_category(response)
    }

    pub async fn expenses_by_category(&self, category: &str) -> Result<Vec<Expense>, ApiError> {
        let response = self
            .send(self.client.build_expenses_by_category(category))
            .await?;
        self.client.parse_expenses_by_category(response)
    }

    pub async fn average_amount_by_category(&self, category: &str) -> Result<f64, ApiError> {
        let response = self
            .send(self.client.build_average_amount_by_category(category))
            .await?;
        self.client.parse_average_amount_by_category(response)
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let method = request.method;
        let url = request.path.clone();
        tracing::debug!(method = method.as_str(), %url, "sending request");

        let result = self.transport.execute(request).await;
        match &result {
            Ok(response) => {
                tracing::debug!(method = method.as_str(), %url, status = response.status, "received response")
            }
            Err(error) => tracing::debug!(method = method.as_str(), %url, %error, "request failed"),
        }
        result
    }
}
