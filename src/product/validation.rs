//! Validation of product form submissions.

use super::domain::ProductFormData;

/// The validation error messages for a product draft, one per field.
///
/// An empty string means the field passed. [ProductErrors::is_empty] reports
/// whether the whole draft is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductErrors {
    /// The error message for the title field.
    pub title: String,
    /// The error message for the description field.
    pub description: String,
    /// The error message for the image URL field.
    pub image_url: String,
    /// The error message for the price field.
    pub price: String,
    /// The error message for the color picker.
    pub colors: String,
}

impl ProductErrors {
    /// Whether every field passed validation.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.description.is_empty()
            && self.image_url.is_empty()
            && self.price.is_empty()
            && self.colors.is_empty()
    }
}

/// Check a product draft and return the full set of error messages.
///
/// Every field is checked on every call, so the caller always gets the
/// complete picture rather than the first failure.
pub fn validate_product(draft: &ProductFormData) -> ProductErrors {
    let mut errors = ProductErrors::default();

    let title_length = draft.title.chars().count();
    if draft.title.trim().is_empty() || title_length < 10 || title_length > 80 {
        errors.title = "Product title must be between 10 and 80 characters.".to_owned();
    }

    let description_length = draft.description.chars().count();
    if draft.description.trim().is_empty() || description_length < 10 || description_length > 900 {
        errors.description =
            "Product description must be between 10 and 900 characters.".to_owned();
    }

    if draft.image_url.trim().is_empty() || !is_valid_url(&draft.image_url) {
        errors.image_url = "Valid image URL is required.".to_owned();
    }

    let price_is_positive = draft
        .price
        .trim()
        .parse::<f64>()
        .map(|price| price.is_finite() && price > 0.0)
        .unwrap_or(false);
    if draft.price.trim().is_empty() || !price_is_positive {
        errors.price = "Price must be a valid number greater than 0.".to_owned();
    }

    if draft.colors.is_empty() {
        errors.colors = "At least one color must be selected.".to_owned();
    }

    errors
}

// Accepts `scheme://rest` where the scheme is ftp, http or https and the rest
// is non-empty and free of spaces and double quotes.
fn is_valid_url(url: &str) -> bool {
    let rest = match url
        .strip_prefix("http://")
        .or_else(|| url.strip_prefix("https://"))
        .or_else(|| url.strip_prefix("ftp://"))
    {
        Some(rest) => rest,
        None => return false,
    };

    !rest.is_empty() && !rest.contains(' ') && !rest.contains('"')
}
