//! The product record and the raw form data it is built from.

use serde::{Deserialize, Serialize};

use crate::category::Category;

/// Alias for product identifiers (UUID strings).
pub type ProductId = String;

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// The product's unique ID, assigned on creation and stable afterwards.
    pub id: ProductId,
    /// The product's title.
    pub title: String,
    /// The full description. Truncated for display on cards, stored in full.
    pub description: String,
    /// The URL of the product image.
    pub image_url: String,
    /// The price, kept as the text the user entered once it has validated as
    /// a positive number.
    pub price: String,
    /// The hex color values selected for this product, in selection order.
    pub colors: Vec<String>,
    /// The category the product was saved with.
    pub category: Category,
}

/// The hex color values offered by the form's color picker.
pub const COLOR_CHOICES: &[&str] = &[
    "#A31ACB", "#FF6E31", "#3C2A21", "#6C4AB6", "#CB1C8D", "#645CBB", "#2563EB", "#84D2C5",
    "#FF0032", "#1F2937",
];

/// The raw values submitted by the product form, before validation.
///
/// `colors` uses `#[serde(default)]` because an HTML form omits the checkbox
/// field entirely when nothing is checked.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProductFormData {
    /// The submitted title.
    pub title: String,
    /// The submitted description.
    pub description: String,
    /// The submitted image URL.
    pub image_url: String,
    /// The submitted price text.
    pub price: String,
    /// The checked color values, one form entry per checkbox.
    #[serde(default)]
    pub colors: Vec<String>,
    /// The ID of the chosen category.
    pub category: String,
}
