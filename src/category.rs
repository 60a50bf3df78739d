//! The fixed set of product categories.

use serde::{Deserialize, Serialize};

/// A product category.
///
/// Categories are a fixed set and are embedded into each product by value,
/// so a product keeps the category it was saved with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// The category's ID, used as the value of the form's category picker.
    pub id: String,
    /// The display name of the category.
    pub name: String,
    /// The URL of a small image shown next to the category name.
    pub image_url: String,
}

const CATEGORY_CHOICES: &[(&str, &str, &str)] = &[
    (
        "clothing",
        "Clothing",
        "https://images.unsplash.com/photo-1489987707025-afc232f7ea0f?w=96",
    ),
    (
        "electronics",
        "Electronics",
        "https://images.unsplash.com/photo-1498049794561-7780e7231661?w=96",
    ),
    (
        "furniture",
        "Furniture",
        "https://images.unsplash.com/photo-1555041469-a586c61ea9bc?w=96",
    ),
    (
        "footwear",
        "Footwear",
        "https://images.unsplash.com/photo-1542291026-7eec264c27ff?w=96",
    ),
];

impl Category {
    /// All the categories a product can belong to, in display order.
    pub fn all() -> Vec<Category> {
        CATEGORY_CHOICES
            .iter()
            .map(|(id, name, image_url)| Category {
                id: id.to_string(),
                name: name.to_string(),
                image_url: image_url.to_string(),
            })
            .collect()
    }

    /// Look up a category by its ID.
    pub fn find(id: &str) -> Option<Category> {
        Category::all().into_iter().find(|category| category.id == id)
    }

    /// The category selected by default in a blank product form.
    pub fn default_choice() -> Category {
        Category::all()
            .into_iter()
            .next()
            .expect("the category set must not be empty")
    }
}
