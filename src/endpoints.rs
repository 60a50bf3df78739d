//! The API endpoint URIs.
//!
//! For endpoints that take a parameter, e.g., '/products/{product_id}/edit',
//! use [format_endpoint].

/// The root route which redirects to the products page.
pub const ROOT: &str = "/";
/// The page for listing all products in the catalog.
pub const PRODUCTS_VIEW: &str = "/products";
/// The page for adding a new product.
pub const NEW_PRODUCT_VIEW: &str = "/products/new";
/// The page for editing an existing product.
pub const EDIT_PRODUCT_VIEW: &str = "/products/{product_id}/edit";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route to create a product.
pub const POST_PRODUCT: &str = "/api/products";
/// The route to update a product.
pub const PUT_PRODUCT: &str = "/api/products/{product_id}";
/// The route to delete a product.
pub const DELETE_PRODUCT: &str = "/api/products/{product_id}";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace. For
/// example, in the endpoint path '/products/{product_id}/edit',
/// '{product_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: &str) -> String {
    let mut param_start = None;
    let mut param_end = None;

    for (i, c) in endpoint_path.chars().enumerate() {
        if c == '{' {
            param_start = Some(i);
        } else if param_start.is_some() && c == '}' {
            param_end = Some(i + 1);
            break;
        }
    }

    let param_start = match param_start {
        Some(start) => start,
        None => return endpoint_path.to_string(),
    };

    let param_end = param_end.unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
