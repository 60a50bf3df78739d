//! The product deletion endpoint.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};
use rusqlite::Connection;

use crate::{AppState, Error, alert::Alert};

use super::{
    catalog::remove_product,
    domain::{Product, ProductId},
    storage::persist_products,
};

/// The state needed for deleting a product.
#[derive(Debug, Clone)]
pub struct DeleteProductState {
    /// The in-memory product list.
    pub products: Arc<Mutex<Vec<Product>>>,
    /// The database connection backing the key-value store.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for DeleteProductState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            products: state.products.clone(),
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Handle product deletion.
///
/// Deleting an ID that is no longer in the list is treated as already done,
/// so a stale page does not produce an error.
pub async fn delete_product_endpoint(
    Path(product_id): Path<ProductId>,
    State(state): State<DeleteProductState>,
) -> Response {
    let snapshot = {
        let mut products = match state.products.lock() {
            Ok(products) => products,
            Err(error) => {
                tracing::error!("could not acquire product list lock: {error}");
                return Error::CatalogLockError.into_alert_response();
            }
        };

        if remove_product(&mut products, &product_id) {
            tracing::info!("Deleted product {product_id}.");
            Some(products.clone())
        } else {
            tracing::debug!("Product {product_id} was already gone, nothing to delete.");
            None
        }
    };

    if let Some(snapshot) = snapshot {
        persist_products(&snapshot, &state.db_connection);
    }

    Alert::SuccessSimple {
        message: "Product deleted".to_owned(),
    }
    .into_response()
}

#[cfg(test)]
mod delete_product_endpoint_tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        extract::{Path, State},
        http::StatusCode,
        response::IntoResponse,
    };
    use rusqlite::Connection;

    use crate::{
        db::initialize,
        product::{load_products, seed_products},
        test_utils::{assert_content_type, assert_valid_html, parse_html_fragment},
    };

    use super::{DeleteProductState, delete_product_endpoint};

    fn get_delete_product_state() -> DeleteProductState {
        let connection =
            Connection::open_in_memory().expect("Could not open in-memory SQLite database");
        initialize(&connection).expect("Could not initialize database");

        DeleteProductState {
            products: Arc::new(Mutex::new(seed_products())),
            db_connection: Arc::new(Mutex::new(connection)),
        }
    }

    #[tokio::test]
    async fn delete_removes_exactly_one_product() {
        let state = get_delete_product_state();
        let initial_count = state.products.lock().unwrap().len();
        let target_id = state.products.lock().unwrap()[0].id.clone();

        let response = delete_product_endpoint(Path(target_id.clone()), State(state.clone()))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_content_type(&response, "text/html; charset=utf-8");

        let html = parse_html_fragment(response).await;
        assert_valid_html(&html);

        let products = state.products.lock().unwrap();
        assert_eq!(products.len(), initial_count - 1);
        assert!(products.iter().all(|product| product.id != target_id));
    }

    #[tokio::test]
    async fn delete_is_persisted() {
        let state = get_delete_product_state();
        let target_id = state.products.lock().unwrap()[0].id.clone();

        delete_product_endpoint(Path(target_id), State(state.clone()))
            .await
            .into_response();

        let connection = state.db_connection.lock().unwrap();
        let saved = load_products(&connection).expect("Could not load products");
        let products = state.products.lock().unwrap();

        assert_eq!(saved, *products);
    }

    #[tokio::test]
    async fn delete_of_missing_product_is_a_no_op() {
        let state = get_delete_product_state();
        let original = state.products.lock().unwrap().clone();

        let response = delete_product_endpoint(Path("no-such-id".to_owned()), State(state.clone()))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);

        let products = state.products.lock().unwrap();
        assert_eq!(*products, original, "want the list unchanged");
    }
}
