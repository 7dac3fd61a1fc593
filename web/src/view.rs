//! The expense list component: fetch the collection once, then render it.
//!
//! The component starts out loading. Mounting it issues exactly one `list`
//! call and moves it to either a success or an error state; there is no way
//! back to loading. If the mount future is dropped before the call resolves,
//! the response is discarded and the state is left untouched.

use expense_core::{Expense, ExpenseApi, Transport};
use maud::{html, Markup};

use crate::format::{format_amount, format_expense_date, DisplayOptions};

/// Shown in place of the list whenever fetching fails, whatever the cause.
pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch expenses. Is the backend running?";
pub const LOADING_MESSAGE: &str = "Loading expenses...";
pub const EMPTY_MESSAGE: &str = "No expenses found. Create one to get started!";

/// Element id of the list container; fragment swaps target it.
pub const LIST_CONTAINER_ID: &str = "expense-list";

const ITEM_STYLE: &str = "margin-bottom: 20px; padding: 10px; border: 1px solid #ccc; border-radius: 5px";
const LIST_STYLE: &str = "text-align: left; max-width: 600px; margin: 0 auto";

/// View-owned state, mirroring what the page needs to decide what to show.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseListState {
    pub expenses: Vec<Expense>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for ExpenseListState {
    fn default() -> Self {
        Self {
            expenses: Vec::new(),
            loading: true,
            error: None,
        }
    }
}

/// The mutually exclusive things the view can show.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase<'a> {
    Loading,
    Failed(&'a str),
    Empty,
    Loaded(&'a [Expense]),
}

#[derive(Debug, Default)]
pub struct ExpenseList {
    state: ExpenseListState,
    mounted: bool,
}

impl ExpenseList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ExpenseListState {
        &self.state
    }

    /// Fetch the expenses and settle into the success or error state.
    ///
    /// Only the first call does anything.
    pub async fn mount<T: Transport + Sync>(&mut self, api: &ExpenseApi<T>) {
        if self.mounted {
            tracing::debug!("expense list already mounted, not fetching again");
            return;
        }
        self.mounted = true;
        self.state.loading = true;

        match api.list().await {
            Ok(expenses) => {
                tracing::debug!(count = expenses.len(), "fetched expenses");
                self.state.expenses = expenses;
                self.state.error = None;
            }
            Err(error) => {
                tracing::error!(%error, "Error fetching expenses");
                self.state.error = Some(FETCH_ERROR_MESSAGE.to_string());
            }
        }

        self.state.loading = false;
    }

    pub fn phase(&self) -> Phase<'_> {
        if self.state.loading {
            return Phase::Loading;
        }
        if let Some(message) = &self.state.error {
            return Phase::Failed(message);
        }
        if self.state.expenses.is_empty() {
            Phase::Empty
        } else {
            Phase::Loaded(&self.state.expenses)
        }
    }

    pub fn render(&self, options: &DisplayOptions) -> Markup {
        let content = match self.phase() {
            Phase::Loading => html! {
                p class="loading" { (LOADING_MESSAGE) }
            },
            Phase::Failed(message) => html! {
                p class="error" style="color: red" { (message) }
            },
            Phase::Empty => html! {
                p class="expense-count" { "Total Expenses: 0" }
                p class="empty" { (EMPTY_MESSAGE) }
            },
            Phase::Loaded(expenses) => html! {
                p class="expense-count" { "Total Expenses: " (expenses.len()) }
                ul class="expenses" style=(LIST_STYLE) {
                    @for expense in expenses {
                        (expense_item(expense, options))
                    }
                }
            },
        };

        html! {
            div id=(LIST_CONTAINER_ID) { (content) }
        }
    }
}

fn expense_item(expense: &Expense, options: &DisplayOptions) -> Markup {
    html! {
        li class="expense" data-expense-id=(expense.id) style=(ITEM_STYLE) {
            strong class="description" { (expense.description) }
            " - "
            span class="amount" { (format_amount(expense.amount)) }
            br;
            small class="category" { "Category: " (expense.category) }
            br;
            small class="date" {
                "Date: " (format_expense_date(&expense.expense_date, options.utc_offset))
            }
        }
    }
}
