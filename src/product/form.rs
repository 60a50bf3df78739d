//! The shared product form renderer used by the create and edit pages.

use maud::{Markup, html};

use crate::{
    category::Category,
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, COLOR_SWATCH_LABEL_STYLE, FORM_ERROR_STYLE, FORM_LABEL_STYLE,
        FORM_TEXT_INPUT_STYLE, LINK_STYLE,
    },
};

use super::{
    domain::{COLOR_CHOICES, Product, ProductFormData},
    validation::ProductErrors,
};

/// The values used to fill in the product form's inputs.
///
/// Borrowed from either a submitted draft (re-render after a validation
/// failure, so nothing the user typed is lost) or an existing product (edit
/// page).
#[derive(Debug, Clone, Copy)]
pub(crate) struct ProductFormValues<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub image_url: &'a str,
    pub price: &'a str,
    pub colors: &'a [String],
    pub category_id: &'a str,
}

impl<'a> ProductFormValues<'a> {
    /// Blank values for a fresh create form.
    pub fn empty() -> Self {
        Self {
            title: "",
            description: "",
            image_url: "",
            price: "",
            colors: &[],
            category_id: "",
        }
    }

    /// Values from a submitted draft.
    pub fn from_form(draft: &'a ProductFormData) -> Self {
        Self {
            title: &draft.title,
            description: &draft.description,
            image_url: &draft.image_url,
            price: &draft.price,
            colors: &draft.colors,
            category_id: &draft.category,
        }
    }

    /// Values from an existing product.
    pub fn from_product(product: &'a Product) -> Self {
        Self {
            title: &product.title,
            description: &product.description,
            image_url: &product.image_url,
            price: &product.price,
            colors: &product.colors,
            category_id: &product.category.id,
        }
    }
}

/// Render the form's inputs, pickers, error messages and action row.
///
/// The caller wraps this in a `form` element carrying the htmx attributes
/// for the create or update endpoint.
pub(crate) fn product_form_fields(
    values: ProductFormValues<'_>,
    errors: &ProductErrors,
    submit_label: &str,
) -> Markup {
    let selected_category_id = if values.category_id.is_empty() {
        Category::default_choice().id
    } else {
        values.category_id.to_owned()
    };

    html! {
        div
        {
            label for="title" class=(FORM_LABEL_STYLE) { "Product Title" }

            input
                id="title"
                type="text"
                name="title"
                placeholder="Product Title"
                value=(values.title)
                autofocus
                class=(FORM_TEXT_INPUT_STYLE);

            @if !errors.title.is_empty() {
                p class=(FORM_ERROR_STYLE) { (errors.title) }
            }
        }

        div
        {
            label for="description" class=(FORM_LABEL_STYLE) { "Product Description" }

            textarea
                id="description"
                name="description"
                placeholder="Product Description"
                rows="5"
                class=(FORM_TEXT_INPUT_STYLE)
            {
                (values.description)
            }

            @if !errors.description.is_empty() {
                p class=(FORM_ERROR_STYLE) { (errors.description) }
            }
        }

        div
        {
            label for="image_url" class=(FORM_LABEL_STYLE) { "Product Image URL" }

            input
                id="image_url"
                type="text"
                name="image_url"
                placeholder="Product Image URL"
                value=(values.image_url)
                class=(FORM_TEXT_INPUT_STYLE);

            @if !errors.image_url.is_empty() {
                p class=(FORM_ERROR_STYLE) { (errors.image_url) }
            }
        }

        div
        {
            label for="price" class=(FORM_LABEL_STYLE) { "Product Price" }

            input
                id="price"
                type="text"
                name="price"
                inputmode="decimal"
                placeholder="Product Price"
                value=(values.price)
                class=(FORM_TEXT_INPUT_STYLE);

            @if !errors.price.is_empty() {
                p class=(FORM_ERROR_STYLE) { (errors.price) }
            }
        }

        div
        {
            label for="category" class=(FORM_LABEL_STYLE) { "Category" }

            select
                id="category"
                name="category"
                class=(FORM_TEXT_INPUT_STYLE)
            {
                @for category in Category::all() {
                    option
                        value=(category.id)
                        selected[category.id == selected_category_id]
                    {
                        (category.name)
                    }
                }
            }
        }

        fieldset
        {
            legend class=(FORM_LABEL_STYLE) { "Colors" }

            div class="flex flex-wrap items-center gap-2"
            {
                @for color in COLOR_CHOICES {
                    label
                        class=(COLOR_SWATCH_LABEL_STYLE)
                        style={ "background-color: " (color) }
                        title=(color)
                    {
                        input
                            type="checkbox"
                            name="colors"
                            value=(color)
                            checked[values.colors.iter().any(|selected| selected == *color)]
                            class="sr-only";
                    }
                }
            }

            @if !errors.colors.is_empty() {
                p class=(FORM_ERROR_STYLE) { (errors.colors) }
            }
        }

        div class="flex gap-4 items-center"
        {
            button type="submit" class=(BUTTON_PRIMARY_STYLE) { (submit_label) }

            a href=(endpoints::PRODUCTS_VIEW) class=(LINK_STYLE) { "Cancel" }
        }
    }
}
