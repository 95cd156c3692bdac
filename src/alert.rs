//! Alert system for displaying success and error messages to users.
//!
//! Alerts are rendered as an out-of-band swap that replaces the alert container
//! at the bottom of every page, so any htmx response can carry one.

use axum::response::{IntoResponse, Response};
use maud::{Markup, html};

/// The id of the element alerts are swapped into.
pub const ALERT_CONTAINER_ID: &str = "alert-container";

const ALERT_CONTAINER_STYLE: &str = "w-full max-w-md px-4";

const ALERT_CONTAINER_POSITION: &str =
    "position: fixed; bottom: 1rem; left: 50%; transform: translateX(-50%); z-index: 9999;";

const SUCCESS_STYLE: &str = "flex items-start gap-3 p-4 rounded border \
    text-green-800 bg-green-50 border-green-300 dark:bg-gray-800 \
    dark:text-green-400 dark:border-green-800";

const ERROR_STYLE: &str = "flex items-start gap-3 p-4 rounded border \
    text-red-800 bg-red-50 border-red-300 dark:bg-gray-800 \
    dark:text-red-400 dark:border-red-800";

/// A message shown to the user after they have done something.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Alert {
    /// The action worked.
    Success { message: String, details: String },
    /// The action worked, no further details.
    SuccessSimple { message: String },
    /// The action failed.
    Error { message: String, details: String },
    /// The action failed for several reasons, e.g. multiple invalid form fields.
    ErrorList { message: String, items: Vec<String> },
}

impl Alert {
    /// Whether the alert reports a failure.
    pub fn is_error(&self) -> bool {
        matches!(self, Alert::Error { .. } | Alert::ErrorList { .. })
    }

    /// Render the alert as an out-of-band swap for the alert container.
    pub fn into_html(self) -> Markup {
        let style = if self.is_error() {
            ERROR_STYLE
        } else {
            SUCCESS_STYLE
        };
        let role = if self.is_error() { "alert" } else { "status" };

        let body = match self {
            Alert::Success { message, details } | Alert::Error { message, details } => html! {
                p class="font-medium" { (message) }
                @if !details.is_empty() {
                    p class="text-sm" { (details) }
                }
            },
            Alert::SuccessSimple { message } => html! {
                p class="font-medium" { (message) }
            },
            Alert::ErrorList { message, items } => html! {
                p class="font-medium" { (message) }
                ul class="mt-1 text-sm list-disc list-inside"
                {
                    @for item in &items {
                        li { (item) }
                    }
                }
            },
        };

        html! {
            div
                id=(ALERT_CONTAINER_ID)
                hx-swap-oob="true"
                class=(ALERT_CONTAINER_STYLE)
                style=(ALERT_CONTAINER_POSITION)
            {
                div class=(style) role=(role)
                {
                    div class="flex-1" { (body) }

                    button
                        type="button"
                        aria-label="Dismiss"
                        class="text-sm font-medium opacity-70 hover:opacity-100"
                        onclick="this.closest('[role]').remove()"
                    {
                        "×"
                    }
                }
            }
        }
    }
}

impl IntoResponse for Alert {
    fn into_response(self) -> Response {
        self.into_html().into_response()
    }
}
