//! Server-rendered front end for the expense API.
//!
//! # Overview
//! Serves one page that shows the expense collection. The page arrives in
//! its loading state and asks for the list fragment once it has loaded;
//! rendering that fragment mounts an [`ExpenseList`], which performs the
//! single fetch and settles into a success or error state.

pub mod config;
pub mod endpoints;
mod error;
pub mod format;
pub mod page;
pub mod routes;
pub mod transport;
pub mod view;

#[cfg(test)]
mod test_utils;

pub use config::AppConfig;
pub use error::Error;
pub use format::DisplayOptions;
pub use routes::{build_router, AppState};
pub use transport::ReqwestTransport;
pub use view::{ExpenseList, ExpenseListState, Phase};
