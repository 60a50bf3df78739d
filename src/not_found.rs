//! Defines the template and route handler for the 404 Not Found page.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::html::error_view;

/// The 404 Not Found page.
pub struct NotFoundError;

impl IntoResponse for NotFoundError {
    fn into_response(self) -> Response {
        (
            StatusCode::NOT_FOUND,
            error_view(
                "Not Found",
                "404",
                "The page you are looking for does not exist.",
                "Check the address for typos or head back to the product list.",
            ),
        )
            .into_response()
    }
}

/// Route handler for requests that match no route.
pub async fn get_404_not_found() -> Response {
    NotFoundError.into_response()
}
