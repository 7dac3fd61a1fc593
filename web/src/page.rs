//! Full-page document shell.

use maud::{html, Markup, DOCTYPE};

use crate::{
    endpoints,
    format::DisplayOptions,
    view::{ExpenseList, FETCH_ERROR_MESSAGE},
};

pub const APP_TITLE: &str = "Expense Tracker";

/// Script that loads `data-fetch-url` fragments, served by this app.
pub const APP_SCRIPT: &str = include_str!("../static/app.js");

/// Subresource integrity hash of [APP_SCRIPT].
pub const APP_SCRIPT_INTEGRITY: &str =
    "sha384-kcu1AJEqo6G817mmy2zcEjaGb+1Bblv+elHkpRk76L+P6c/qhj4OtxAqsfrQ6fpH";

/// Wrap `content` in the HTML document shared by every page.
pub fn base(content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (APP_TITLE) }
                script src=(endpoints::APP_SCRIPT) integrity=(APP_SCRIPT_INTEGRITY) defer {}
            }
            body {
                div class="app" style="text-align: center" {
                    h1 { (APP_TITLE) }
                    (content)
                }
            }
        }
    }
}

/// The index page: the list in its loading state, set to fetch itself once
/// the page has loaded.
pub fn index(options: &DisplayOptions) -> Markup {
    let list = ExpenseList::new();
    base(&html! {
        div
            data-fetch-url=(endpoints::EXPENSE_LIST_FRAGMENT)
            data-fetch-error=(FETCH_ERROR_MESSAGE)
        {
            (list.render(options))
            noscript {
                a href=(endpoints::EXPENSE_LIST_FRAGMENT) { "Show expenses" }
            }
        }
    })
}
