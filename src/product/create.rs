//! The product creation page and endpoint.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;
use maud::{Markup, html};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    category::Category,
    endpoints,
    html::{FORM_CONTAINER_STYLE, base},
    navigation::NavBar,
};

use super::{
    catalog::{build_product, prepend_product},
    domain::{Product, ProductFormData},
    form::{ProductFormValues, product_form_fields},
    storage::persist_products,
    validation::{ProductErrors, validate_product},
};

/// The state needed for creating a product.
#[derive(Debug, Clone)]
pub struct CreateProductState {
    /// The in-memory product list.
    pub products: Arc<Mutex<Vec<Product>>>,
    /// The database connection backing the key-value store.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for CreateProductState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            products: state.products.clone(),
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Render the product creation page.
pub async fn get_new_product_page() -> Response {
    let nav_bar = NavBar::new(endpoints::NEW_PRODUCT_VIEW).into_html();
    let form = new_product_form_view(ProductFormValues::empty(), &ProductErrors::default());

    let content = html! {
        (nav_bar)
        div class=(FORM_CONTAINER_STYLE)
        {
            h1 class="text-2xl font-bold my-4" { "Add New Product" }
            (form)
        }
    };

    base("Add Product", &content).into_response()
}

/// Handle product creation form submission.
///
/// On a validation failure the form is re-rendered with per-field error
/// messages and everything the user entered still in place.
pub async fn create_product_endpoint(
    State(state): State<CreateProductState>,
    Form(draft): Form<ProductFormData>,
) -> Response {
    let errors = validate_product(&draft);
    if !errors.is_empty() {
        return new_product_form_view(ProductFormValues::from_form(&draft), &errors)
            .into_response();
    }

    let category = match Category::find(&draft.category) {
        Some(category) => category,
        None => return Error::UnknownCategory(draft.category).into_alert_response(),
    };

    let snapshot = {
        let mut products = match state.products.lock() {
            Ok(products) => products,
            Err(error) => {
                tracing::error!("could not acquire product list lock: {error}");
                return Error::CatalogLockError.into_alert_response();
            }
        };

        let product = build_product(draft, category);
        tracing::info!("Creating product {} ({}).", product.title, product.id);
        prepend_product(&mut products, product);

        products.clone()
    };

    persist_products(&snapshot, &state.db_connection);

    (
        HxRedirect(endpoints::PRODUCTS_VIEW.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}

fn new_product_form_view(values: ProductFormValues<'_>, errors: &ProductErrors) -> Markup {
    html! {
        form
            hx-post=(endpoints::POST_PRODUCT)
            hx-target="this"
            hx-swap="outerHTML"
            hx-target-error="#alert-container"
            class="w-full space-y-4 md:space-y-6"
        {
            (product_form_fields(values, errors, "Create Product"))
        }
    }
}

#[cfg(test)]
mod new_product_page_tests {
    use axum::http::StatusCode;

    use crate::{
        endpoints,
        product::create::get_new_product_page,
        test_utils::{
            assert_content_type, assert_form_input_with_value, assert_form_submit_button_with_text,
            assert_hx_endpoint, assert_valid_html, must_get_form, parse_html_document,
        },
    };

    #[tokio::test]
    async fn render_page() {
        let response = get_new_product_page().await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_content_type(&response, "text/html; charset=utf-8");

        let html = parse_html_document(response).await;
        assert_valid_html(&html);

        let form = must_get_form(&html);
        assert_hx_endpoint(&form, endpoints::POST_PRODUCT, "hx-post");
        assert_form_input_with_value(&form, "title", "text", "");
        assert_form_input_with_value(&form, "image_url", "text", "");
        assert_form_input_with_value(&form, "price", "text", "");
        assert_form_submit_button_with_text(&form, "Create Product");
    }
}
