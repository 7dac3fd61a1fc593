//! Stateless HTTP request builder and response parser for the expense API.
//!
//! # Design
//! `ExpenseClient` holds only a `base_url` and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. The caller executes the actual HTTP round-trip.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Expense, ExpenseId, ExpenseRequest};

/// Stateless request builder and response parser for the expense API.
///
/// Performs no I/O; `ExpenseApi` pairs it with a `Transport` for async calls.
#[derive(Debug, Clone)]
pub struct ExpenseClient {
    base_url: String,
}

impl ExpenseClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_expenses(&self) -> HttpRequest {
        self.get("/expenses/".to_string())
    }

    pub fn build_get_expense(&self, id: ExpenseId) -> HttpRequest {
        self.get(format!("/expenses/{id}"))
    }

    pub fn build_create_expense(&self, input: &ExpenseRequest) -> Result<HttpRequest, ApiError> {
        self.with_json_body(HttpMethod::Post, "/expenses/".to_string(), input)
    }

    pub fn build_update_expense(
        &self,
        id: ExpenseId,
        input: &ExpenseRequest,
    ) -> Result<HttpRequest, ApiError> {
        self.with_json_body(HttpMethod::Put, format!("/expenses/{id}"), input)
    }

    pub fn build_delete_expense(&self, id: ExpenseId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: self.url(&format!("/expenses/{id}")),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_total_amount(&self) -> HttpRequest {
        self.get("/expenses/total-amount/".to_string())
    }

    pub fn build_total_amount_by_category(&self, category: &str) -> HttpRequest {
        self.get(format!("/expenses/total-amount/{}", urlencoding::encode(category)))
    }

    pub fn build_expenses_by_category(&self, category: &str) -> HttpRequest {
        self.get(format!("/expenses/category/{}", urlencoding::encode(category)))
    }

    pub fn build_average_amount_by_category(&self, category: &str) -> HttpRequest {
        self.get(format!("/expenses/average-amount/{}", urlencoding::encode(category)))
    }

    pub fn parse_list_expenses(&self, response: HttpResponse) -> Result<Vec<Expense>, ApiError> {
        parse_json(response)
    }

    pub fn parse_get_expense(&self, response: HttpResponse) -> Result<Expense, ApiError> {
        parse_json(response)
    }

    pub fn parse_create_expense(&self, response: HttpResponse) -> Result<Expense, ApiError> {
        parse_json(response)
    }

    pub fn parse_update_expense(&self, response: HttpResponse) -> Result<Expense, ApiError> {
        parse_json(response)
    }

    /// The response body is ignored; only the status matters.
    pub fn parse_delete_expense(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(response).map(|_| ())
    }

    pub fn parse_total_amount(&self, response: HttpResponse) -> Result<f64, ApiError> {
        parse_json(response)
    }

    pub fn parse_total_amount_by_category(&self, response: HttpResponse) -> Result<f64, ApiError> {
        parse_json(response)
    }

    pub fn parse_expenses_by_category(
        &self,
        response: HttpResponse,
    ) -> Result<Vec<Expense>, ApiError> {
        parse_json(response)
    }

    pub fn parse_average_amount_by_category(
        &self,
        response: HttpResponse,
    ) -> Result<f64, ApiError> {
        parse_json(response)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn get(&self, path: String) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.url(&path),
            headers: Vec::new(),
            body: None,
        }
    }

    fn with_json_body<B: Serialize>(
        &self,
        method: HttpMethod,
        path: String,
        input: &B,
    ) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method,
            path: self.url(&path),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }
}

/// Pass 2xx responses through; everything else becomes `ApiError::Status`
/// with the body left as-is.
fn check_status(response: HttpResponse) -> Result<HttpResponse, ApiError> {
    if response.is_success() {
        return Ok(response);
    }
    Err(ApiError::Status {
        status: response.status,
        body: response.body,
    })
}

fn parse_json<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    let response = check_status(response)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ExpenseClient {
        ExpenseClient::new("http://localhost:8080")
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    fn coffee_request() -> ExpenseRequest {
        ExpenseRequest {
            description: "Coffee".to_string(),
            category: "Food".to_string(),
            amount: 4.5,
            expense_date: "2024-01-01".to_string(),
        }
    }

    const COFFEE_JSON: &str = r#"{"id":1,"description":"Coffee","category":"Food","amount":4.5,"expenseDate":"2024-01-01","dateAdded":"2024-01-01T08:00:00Z"}"#;

    #[test]
    fn build_list_expenses_produces_correct_request() {
        let req = client().build_list_expenses();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:8080/expenses/");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_get_expense_produces_correct_request() {
        let req = client().build_get_expense(42);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:8080/expenses/42");
        assert!(req.body.is_none());
    }

    #[test]
    fn build_create_expense_produces_correct_request() {
        let req = client().build_create_expense(&coffee_request()).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:8080/expenses/");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["description"], "Coffee");
        assert_eq!(body["category"], "Food");
        assert_eq!(body["amount"], 4.5);
        assert_eq!(body["expenseDate"], "2024-01-01");
    }

    #[test]
    fn build_update_expense_targets_id_with_full_payload() {
        let req = client().build_update_expense(9, &coffee_request()).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.path, "http://localhost:8080/expenses/9");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body.as_object().unwrap().len(), 4);
        assert!(body.get("id").is_none());
    }

    #[test]
    fn build_delete_expense_produces_correct_request() {
        let req = client().build_delete_expense(3);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "http://localhost:8080/expenses/3");
        assert!(req.body.is_none());
    }

    #[test]
    fn aggregate_paths() {
        let c = client();
        assert_eq!(
            c.build_total_amount().path,
            "http://localhost:8080/expenses/total-amount/"
        );
        assert_eq!(
            c.build_total_amount_by_category("Food").path,
            "http://localhost:8080/expenses/total-amount/Food"
        );
        assert_eq!(
            c.build_expenses_by_category("Food").path,
            "http://localhost:8080/expenses/category/Food"
        );
        assert_eq!(
            c.build_average_amount_by_category("Food").path,
            "http://localhost:8080/expenses/average-amount/Food"
        );
    }

    #[test]
    fn category_segment_is_percent_encoded() {
        let req = client().build_expenses_by_category("Eating Out/Bars");
        assert_eq!(
            req.path,
            "http://localhost:8080/expenses/category/Eating%20Out%2FBars"
        );
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = ExpenseClient::new("http://localhost:8080/api/");
        assert_eq!(client.base_url(), "http://localhost:8080/api");
        assert_eq!(
            client.build_list_expenses().path,
            "http://localhost:8080/api/expenses/"
        );
    }

    #[test]
    fn parse_list_expenses_keeps_backend_order() {
        let body = r#"[
            {"id":3,"description":"c","category":"x","amount":3,"expenseDate":"2024-01-03","dateAdded":"2024-01-03"},
            {"id":1,"description":"a","category":"x","amount":1,"expenseDate":"2024-01-01","dateAdded":"2024-01-01"},
            {"id":2,"description":"b","category":"x","amount":2,"expenseDate":"2024-01-02","dateAdded":"2024-01-02"}
        ]"#;
        let expenses = client().parse_list_expenses(response(200, body)).unwrap();
        let ids: Vec<ExpenseId> = expenses.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn parse_get_expense_success() {
        let expense = client().parse_get_expense(response(200, COFFEE_JSON)).unwrap();
        assert_eq!(expense.id, 1);
        assert_eq!(expense.description, "Coffee");
        assert_eq!(expense.amount, 4.5);
    }

    #[test]
    fn parse_get_expense_not_found_is_a_plain_status_error() {
        let err = client().parse_get_expense(response(404, "")).unwrap_err();
        assert_eq!(
            err,
            ApiError::Status {
                status: 404,
                body: String::new()
            }
        );
    }

    #[test]
    fn parse_create_expense_accepts_200_and_201() {
        let c = client();
        assert!(c.parse_create_expense(response(200, COFFEE_JSON)).is_ok());
        assert!(c.parse_create_expense(response(201, COFFEE_JSON)).is_ok());
    }

    #[test]
    fn parse_create_expense_server_error_keeps_body() {
        let err = client()
            .parse_create_expense(response(500, "internal error"))
            .unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 500, ref body } if body == "internal error"));
    }

    #[test]
    fn parse_update_expense_success() {
        let expense = client()
            .parse_update_expense(response(200, COFFEE_JSON))
            .unwrap();
        assert_eq!(expense.category, "Food");
    }

    #[test]
    fn parse_delete_expense_ignores_body() {
        let c = client();
        assert!(c.parse_delete_expense(response(204, "")).is_ok());
        assert!(c.parse_delete_expense(response(200, "deleted")).is_ok());
    }

    #[test]
    fn parse_delete_expense_failure() {
        let err = client().parse_delete_expense(response(404, "")).unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 404, .. }));
    }

    #[test]
    fn parse_aggregates_accept_bare_numbers() {
        let c = client();
        assert_eq!(c.parse_total_amount(response(200, "42.75")).unwrap(), 42.75);
        assert_eq!(
            c.parse_total_amount_by_category(response(200, "10")).unwrap(),
            10.0
        );
        assert_eq!(
            c.parse_average_amount_by_category(response(200, "2.5"))
                .unwrap(),
            2.5
        );
    }

    #[test]
    fn parse_list_expenses_bad_json() {
        let err = client()
            .parse_list_expenses(response(200, "not json"))
            .unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }
}
