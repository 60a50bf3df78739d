//! Alert fragments swapped into the page's `#alert-container`.

use axum::response::{IntoResponse, Response};
use maud::{Markup, html};

/// A dismissible alert shown at the bottom of the page.
///
/// Alerts render with `hx-swap-oob` so they always land in the page's
/// `#alert-container`, regardless of which element the triggering request
/// targeted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Alert {
    /// A success alert with only a headline.
    SuccessSimple {
        /// The headline of the alert.
        message: String,
    },
    /// An error alert with a headline and an explanation.
    Error {
        /// The headline of the alert.
        message: String,
        /// An explanation of what went wrong and what the user can do.
        details: String,
    },
}

impl Alert {
    /// Render the alert, wrapped in the out-of-band alert container.
    pub fn into_html(self) -> Markup {
        let (accent_style, message, details) = match self {
            Alert::SuccessSimple { message } => (
                "border-green-500 text-green-700 dark:text-green-400",
                message,
                String::new(),
            ),
            Alert::Error { message, details } => (
                "border-red-500 text-red-700 dark:text-red-400",
                message,
                details,
            ),
        };

        html!(
            div
                id="alert-container"
                hx-swap-oob="true"
                class="w-full max-w-md px-4"
                style="position: fixed; bottom: 1rem; left: 50%; transform: translateX(-50%); z-index: 9999;"
            {
                div
                    class={ "rounded border-l-4 bg-white p-4 shadow-lg dark:bg-gray-800 "
                        (accent_style) }
                    role="alert"
                {
                    p class="font-semibold" { (message) }

                    @if !details.is_empty() {
                        p class="text-sm text-gray-700 dark:text-gray-300" { (details) }
                    }
                }
            }
        )
    }
}

impl IntoResponse for Alert {
    fn into_response(self) -> Response {
        self.into_html().into_response()
    }
}
