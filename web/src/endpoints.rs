//! Route paths served by the web front end.

pub const INDEX: &str = "/";
pub const EXPENSE_LIST_FRAGMENT: &str = "/fragments/expenses";
pub const APP_SCRIPT: &str = "/static/app.js";
