//! Everything to do with products: the record type, validation, the pages
//! for listing, creating and editing products, and the endpoints that back
//! them.

mod catalog;
mod create;
mod delete;
mod domain;
mod edit;
mod form;
mod list_page;
mod storage;
mod validation;

pub use catalog::{build_product, prepend_product, remove_product, replace_product};
pub use create::{CreateProductState, create_product_endpoint, get_new_product_page};
pub use delete::{DeleteProductState, delete_product_endpoint};
pub use domain::{COLOR_CHOICES, Product, ProductFormData, ProductId};
pub use edit::{EditProductState, get_edit_product_page, update_product_endpoint};
pub use list_page::{ProductsPageState, get_products_page};
pub use storage::{load_products, persist_products, save_products, seed_products};
pub use validation::{ProductErrors, validate_product};
