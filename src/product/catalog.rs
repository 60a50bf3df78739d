//! Pure operations on the in-memory product list.
//!
//! These never touch the store; the endpoints persist the list after calling
//! them.

use uuid::Uuid;

use crate::{Error, category::Category};

use super::domain::{Product, ProductFormData, ProductId};

/// Build a [Product] from a validated draft, assigning it a fresh ID.
pub fn build_product(draft: ProductFormData, category: Category) -> Product {
    Product {
        id: Uuid::new_v4().to_string(),
        title: draft.title,
        description: draft.description,
        image_url: draft.image_url,
        price: draft.price,
        colors: draft.colors,
        category,
    }
}

/// Add `product` to the front of the list, so the newest product is shown
/// first.
pub fn prepend_product(products: &mut Vec<Product>, product: Product) {
    products.insert(0, product);
}

/// Replace the entry whose ID matches `product.id`, leaving every other
/// entry and the overall order unchanged.
///
/// # Errors
/// Returns [Error::UpdateMissingProduct] if no entry has a matching ID.
pub fn replace_product(products: &mut [Product], product: Product) -> Result<(), Error> {
    match products.iter_mut().find(|entry| entry.id == product.id) {
        Some(entry) => {
            *entry = product;
            Ok(())
        }
        None => Err(Error::UpdateMissingProduct),
    }
}

/// Remove the entry with `product_id` from the list.
///
/// Returns whether an entry was removed. Removing an ID that is not in the
/// list is a no-op.
pub fn remove_product(products: &mut Vec<Product>, product_id: &ProductId) -> bool {
    let initial_length = products.len();
    products.retain(|product| &product.id != product_id);
    products.len() < initial_length
}
