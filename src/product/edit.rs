//! The product edit page and update endpoint.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
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
    endpoints::{self, format_endpoint},
    html::{FORM_CONTAINER_STYLE, base},
    navigation::NavBar,
};

use super::{
    catalog::replace_product,
    domain::{Product, ProductFormData, ProductId},
    form::{ProductFormValues, product_form_fields},
    storage::persist_products,
    validation::{ProductErrors, validate_product},
};

/// The state needed for editing a product.
#[derive(Debug, Clone)]
pub struct EditProductState {
    /// The in-memory product list.
    pub products: Arc<Mutex<Vec<Product>>>,
    /// The database connection backing the key-value store.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for EditProductState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            products: state.products.clone(),
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Render the edit page for the product with `product_id`.
///
/// # Errors
/// Returns [Error::NotFound] if no product has `product_id`, which renders
/// as the 404 page.
pub async fn get_edit_product_page(
    Path(product_id): Path<ProductId>,
    State(state): State<EditProductState>,
) -> Result<Response, Error> {
    let product = {
        let products = state.products.lock().map_err(|error| {
            tracing::error!("could not acquire product list lock: {error}");
            Error::CatalogLockError
        })?;

        products
            .iter()
            .find(|product| product.id == product_id)
            .cloned()
            .ok_or(Error::NotFound)?
    };

    let nav_bar = NavBar::new(endpoints::PRODUCTS_VIEW).into_html();
    let form = edit_product_form_view(
        &product.id,
        ProductFormValues::from_product(&product),
        &ProductErrors::default(),
    );

    let content = html! {
        (nav_bar)
        div class=(FORM_CONTAINER_STYLE)
        {
            h1 class="text-2xl font-bold my-4" { "Edit Product" }
            (form)
        }
    };

    Ok(base("Edit Product", &content).into_response())
}

/// Handle product update form submission.
///
/// The product keeps its identifier and its position in the list; only its
/// fields change.
pub async fn update_product_endpoint(
    Path(product_id): Path<ProductId>,
    State(state): State<EditProductState>,
    Form(draft): Form<ProductFormData>,
) -> Response {
    let errors = validate_product(&draft);
    if !errors.is_empty() {
        return edit_product_form_view(&product_id, ProductFormValues::from_form(&draft), &errors)
            .into_response();
    }

    let category = match Category::find(&draft.category) {
        Some(category) => category,
        None => return Error::UnknownCategory(draft.category).into_alert_response(),
    };

    let updated = Product {
        id: product_id.clone(),
        title: draft.title,
        description: draft.description,
        image_url: draft.image_url,
        price: draft.price,
        colors: draft.colors,
        category,
    };

    let snapshot = {
        let mut products = match state.products.lock() {
            Ok(products) => products,
            Err(error) => {
                tracing::error!("could not acquire product list lock: {error}");
                return Error::CatalogLockError.into_alert_response();
            }
        };

        if let Err(error) = replace_product(&mut products, updated) {
            tracing::debug!("Could not update product {product_id}: {error}");
            return error.into_alert_response();
        }

        products.clone()
    };

    persist_products(&snapshot, &state.db_connection);

    (
        HxRedirect(endpoints::PRODUCTS_VIEW.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}

fn edit_product_form_view(
    product_id: &ProductId,
    values: ProductFormValues<'_>,
    errors: &ProductErrors,
) -> Markup {
    let update_endpoint = format_endpoint(endpoints::PUT_PRODUCT, product_id);

    html! {
        form
            hx-put=(update_endpoint)
            hx-target="this"
            hx-swap="outerHTML"
            hx-target-error="#alert-container"
            class="w-full space-y-4 md:space-y-6"
        {
            (product_form_fields(values, errors, "Save Changes"))
        }
    }
}
