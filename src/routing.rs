//! Sets up the app's routes.

use axum::{
    Router,
    response::Redirect,
    routing::{delete, get, post, put},
};
use tower_http::services::ServeDir;

use crate::{
    AppState, endpoints,
    not_found::get_404_not_found,
    product::{
        create_product_endpoint, delete_product_endpoint, get_edit_product_page,
        get_new_product_page, get_products_page, update_product_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::PRODUCTS_VIEW, get(get_products_page))
        .route(endpoints::NEW_PRODUCT_VIEW, get(get_new_product_page))
        .route(endpoints::EDIT_PRODUCT_VIEW, get(get_edit_product_page))
        .route(endpoints::POST_PRODUCT, post(create_product_endpoint))
        .route(endpoints::PUT_PRODUCT, put(update_product_endpoint))
        .route(endpoints::DELETE_PRODUCT, delete(delete_product_endpoint))
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root route sends the user straight to the product list.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::PRODUCTS_VIEW)
}
