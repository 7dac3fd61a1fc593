use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use time::{format_description::well_known::Rfc3339, OffsetDateTime};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: i64,
    pub description: String,
    pub category: String,
    pub amount: f64,
    pub expense_date: String,
    pub date_added: String,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRequest {
    pub description: String,
    pub category: String,
    pub amount: f64,
    pub expense_date: String,
}

/// In-memory expense table. Ids are never reused.
#[derive(Debug)]
pub struct Store {
    next_id: i64,
    expenses: BTreeMap<i64, Expense>,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            next_id: 1,
            expenses: BTreeMap::new(),
        }
    }
}

impl Store {
    fn in_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Expense> + 'a {
        self.expenses.values().filter(move |e| e.category == category)
    }
}

pub type Db = Arc<RwLock<Store>>;

/// Kept apart from the web front end's `PORT` so both can share one `.env`.
pub const PORT_VAR: &str = "MOCK_SERVER_PORT";
pub const DEFAULT_PORT: u16 = 3000;

/// Address the binary binds, with the port taken from [PORT_VAR].
pub fn listen_addr(lookup: impl Fn(&str) -> Option<String>) -> String {
    let port = lookup(PORT_VAR).unwrap_or_else(|| DEFAULT_PORT.to_string());
    format!("127.0.0.1:{port}")
}

pub fn app() -> Router {
    router(Db::default())
}

pub fn router(db: Db) -> Router {
    Router::new()
        .route("/expenses/", get(list_expenses).post(create_expense))
        .route(
            "/expenses/{id}",
            get(get_expense).put(update_expense).delete(delete_expense),
        )
        .route("/expenses/total-amount/", get(total_amount))
        .route("/expenses/total-amount/{category}", get(total_amount_by_category))
        .route("/expenses/category/{category}", get(expenses_by_category))
        .route(
            "/expenses/average-amount/{category}",
            get(average_amount_by_category),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_expenses(State(db): State<Db>) -> Json<Vec<Expense>> {
    let store = db.read().await;
    Json(store.expenses.values().cloned().collect())
}

async fn create_expense(
    State(db): State<Db>,
    Json(input): Json<ExpenseRequest>,
) -> Result<(StatusCode, Json<Expense>), StatusCode> {
    let date_added = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    let mut store = db.write().await;
    let expense = Expense {
        id: store.next_id,
        description: input.description,
        category: input.category,
        amount: input.amount,
        expense_date: input.expense_date,
        date_added,
    };
    store.next_id += 1;
    store.expenses.insert(expense.id, expense.clone());
    tracing::debug!(id = expense.id, "created expense");
    Ok((StatusCode::CREATED, Json(expense)))
}

async fn get_expense(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<Expense>, StatusCode> {
    let store = db.read().await;
    store
        .expenses
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn update_expense(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<ExpenseRequest>,
) -> Result<Json<Expense>, StatusCode> {
    let mut store = db.write().await;
    let expense = store.expenses.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    expense.description = input.description;
    expense.category = input.category;
    expense.amount = input.amount;
    expense.expense_date = input.expense_date;
    Ok(Json(expense.clone()))
}

async fn delete_expense(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    store
        .expenses
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn total_amount(State(db): State<Db>) -> Json<f64> {
    let store = db.read().await;
    Json(store.expenses.values().map(|e| e.amount).sum())
}

async fn total_amount_by_category(
    State(db): State<Db>,
    Path(category): Path<String>,
) -> Json<f64> {
    let store = db.read().await;
    Json(store.in_category(&category).map(|e| e.amount).sum())
}

async fn expenses_by_category(
    State(db): State<Db>,
    Path(category): Path<String>,
) -> Json<Vec<Expense>> {
    let store = db.read().await;
    Json(store.in_category(&category).cloned().collect())
}

async fn average_amount_by_category(
    State(db): State<Db>,
    Path(category): Path<String>,
) -> Json<f64> {
    let store = db.read().await;
    let (sum, count) = store
        .in_category(&category)
        .fold((0.0, 0u32), |(sum, count), e| (sum + e.amount, count + 1));
    if count == 0 {
        return Json(0.0);
    }
    Json(sum / f64::from(count))
}
