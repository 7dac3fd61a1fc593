use std::{
    future::Future,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
};

use expense_core::{ApiError, Expense, ExpenseApi, ExpenseClient, HttpRequest, HttpResponse, Transport};
use scraper::{ElementRef, Html, Selector};

/// Replays one canned outcome for every request and counts the calls.
#[derive(Debug, Clone)]
pub(crate) struct StubTransport {
    outcome: Result<HttpResponse, ApiError>,
    calls: Arc<AtomicUsize>,
}

impl StubTransport {
    pub(crate) fn with_expenses(expenses: &[Expense]) -> Self {
        let body = serde_json::to_string(expenses).unwrap();
        Self::responding(200, &body)
    }

    pub(crate) fn responding(status: u16, body: &str) -> Self {
        Self {
            outcome: Ok(HttpResponse {
                status,
                headers: Vec::new(),
                body: body.to_string(),
            }),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub(crate) fn failing(error: ApiError) -> Self {
        Self {
            outcome: Err(error),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Transport for StubTransport {
    fn execute(
        &self,
        _request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, ApiError>> + Send {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let outcome = self.outcome.clone();
        async move { outcome }
    }
}

/// Never answers, like a backend that hangs.
#[derive(Debug, Clone, Default)]
pub(crate) struct PendingTransport;

impl Transport for PendingTransport {
    fn execute(
        &self,
        _request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, ApiError>> + Send {
        std::future::pending()
    }
}

pub(crate) fn api<T: Transport + Sync>(transport: T) -> ExpenseApi<T> {
    ExpenseApi::new(ExpenseClient::new("http://api.test"), transport)
}

pub(crate) fn expense(id: i64, description: &str, category: &str, amount: f64, expense_date: &str) -> Expense {
    Expense {
        id,
        description: description.to_string(),
        category: category.to_string(),
        amount,
        expense_date: expense_date.to_string(),
        date_added: expense_date.to_string(),
    }
}

#[track_caller]
pub(crate) fn assert_valid_html(html: &Html) {
    assert!(
        html.errors.is_empty(),
        "Got HTML parsing errors: {:?}",
        html.errors
    );
}

pub(crate) fn select<'a>(html: &'a Html, selector: &str) -> Vec<ElementRef<'a>> {
    let selector = Selector::parse(selector).unwrap();
    html.select(&selector).collect()
}

/// Text of an element with whitespace runs collapsed to single spaces.
pub(crate) fn text_of(element: &ElementRef) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
