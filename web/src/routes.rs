//! Router and handlers for the web front end.

use std::sync::Arc;

use axum::{
    extract::{MatchedPath, Request, State},
    http::header::CONTENT_TYPE,
    response::IntoResponse,
    routing::get,
    Router,
};
use expense_core::{ExpenseApi, Transport};
use maud::Markup;
use tower_http::trace::TraceLayer;

use crate::{endpoints, format::DisplayOptions, page, view::ExpenseList};

/// Shared, read-only state handed to every handler.
#[derive(Debug)]
pub struct AppState<T> {
    api: Arc<ExpenseApi<T>>,
    display: DisplayOptions,
}

impl<T> Clone for AppState<T> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            display: self.display,
        }
    }
}

impl<T> AppState<T> {
    pub fn new(api: ExpenseApi<T>, display: DisplayOptions) -> Self {
        Self {
            api: Arc::new(api),
            display,
        }
    }
}

pub fn build_router<T>(state: AppState<T>) -> Router
where
    T: Transport + Send + Sync + 'static,
{
    Router::new()
        .route(endpoints::INDEX, get(index::<T>))
        .route(endpoints::EXPENSE_LIST_FRAGMENT, get(expense_list::<T>))
        .route(endpoints::APP_SCRIPT, get(app_script))
        .layer(
            TraceLayer::new_for_http().make_span_with(|req: &Request| {
                let matched_path = req
                    .extensions()
                    .get::<MatchedPath>()
                    .map(MatchedPath::as_str);

                tracing::info_span!(
                    "http_request",
                    method = %req.method(),
                    uri = %req.uri(),
                    matched_path,
                )
            }),
        )
        .with_state(state)
}

async fn index<T>(State(state): State<AppState<T>>) -> Markup {
    page::index(&state.display)
}

async fn app_script() -> impl IntoResponse {
    ([(CONTENT_TYPE, "text/javascript; charset=utf-8")], page::APP_SCRIPT)
}

/// Mount a fresh list against the API and render whatever state it ends in.
///
/// Always 200: a failed fetch is a rendered state, not an HTTP error.
async fn expense_list<T>(State(state): State<AppState<T>>) -> Markup
where
    T: Transport + Sync,
{
    let mut list = ExpenseList::new();
    list.mount(&state.api).await;
    list.render(&state.display)
}
