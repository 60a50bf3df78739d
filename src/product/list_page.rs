//! The products page, listing every product in the catalog as a card.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    endpoints::{self, format_endpoint},
    html::{
        BUTTON_PRIMARY_STYLE, CARD_STYLE, COLOR_DOT_STYLE, LINK_STYLE, PAGE_CONTAINER_STYLE, base,
        edit_delete_action_links, truncate_with_ellipsis,
    },
    navigation::NavBar,
};

use super::domain::Product;

/// How many characters of the description a card shows.
const CARD_DESCRIPTION_LENGTH: usize = 70;

/// The state needed for displaying the products page.
#[derive(Debug, Clone)]
pub struct ProductsPageState {
    /// The in-memory product list.
    pub products: Arc<Mutex<Vec<Product>>>,
}

impl FromRef<AppState> for ProductsPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            products: state.products.clone(),
        }
    }
}

/// Render the products page.
///
/// # Errors
/// Returns an error if the product list lock cannot be acquired, which
/// renders as the 500 page.
pub async fn get_products_page(State(state): State<ProductsPageState>) -> Result<Response, Error> {
    let products = state
        .products
        .lock()
        .map_err(|error| {
            tracing::error!("could not acquire product list lock: {error}");
            Error::CatalogLockError
        })?
        .clone();

    Ok(products_view(&products).into_response())
}

fn products_view(products: &[Product]) -> Markup {
    let nav_bar = NavBar::new(endpoints::PRODUCTS_VIEW).into_html();

    let content = html! {
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="flex items-center justify-between my-4"
            {
                h1 class="text-2xl font-bold" { "Products" }

                a
                    href=(endpoints::NEW_PRODUCT_VIEW)
                    class={ (BUTTON_PRIMARY_STYLE) " max-w-fit" }
                {
                    "Add New Product"
                }
            }

            @if products.is_empty() {
                p class="my-8 text-gray-600 dark:text-gray-400"
                {
                    "The catalog is empty. "
                    a href=(endpoints::NEW_PRODUCT_VIEW) class=(LINK_STYLE)
                    {
                        "Add your first product"
                    }
                    "."
                }
            } @else {
                div class="grid gap-4 sm:grid-cols-2 lg:grid-cols-4"
                {
                    @for product in products {
                        (product_card_view(product))
                    }
                }
            }
        }
    };

    base("Products", &content)
}

fn product_card_view(product: &Product) -> Markup {
    let delete_endpoint = format_endpoint(endpoints::DELETE_PRODUCT, &product.id);
    let edit_endpoint = format_endpoint(endpoints::EDIT_PRODUCT_VIEW, &product.id);
    let confirm_message = format!(
        "Are you sure you want to delete '{}'? You won't be able to revert this!",
        product.title
    );

    html! {
        div data-product-card="true" class=(CARD_STYLE)
        {
            img
                src=(product.image_url)
                alt=(product.title)
                class="h-48 w-full rounded object-cover";

            h3 class="mt-2 text-lg font-semibold" { (product.title) }

            p class="flex-grow text-sm text-gray-600 dark:text-gray-400"
            {
                (truncate_with_ellipsis(&product.description, CARD_DESCRIPTION_LENGTH))
            }

            div class="my-2 flex items-center gap-1"
            {
                @for color in &product.colors {
                    span
                        class=(COLOR_DOT_STYLE)
                        style={ "background-color: " (color) }
                        title=(color)
                    {}
                }
            }

            div class="flex items-center justify-between"
            {
                span class="text-lg font-bold text-indigo-600 dark:text-indigo-500"
                {
                    "$" (product.price)
                }

                span class="flex items-center gap-2 text-sm"
                {
                    (product.category.name)
                    img
                        src=(product.category.image_url)
                        alt=(product.category.name)
                        class="h-8 w-8 rounded-full object-cover";
                }
            }

            div class="mt-2 flex items-center justify-between"
            {
                (edit_delete_action_links(
                    &edit_endpoint,
                    &delete_endpoint,
                    &confirm_message,
                    "closest [data-product-card]",
                    "outerHTML",
                ))
            }
        }
    }
}

#[cfg(test)]
mod products_page_tests {
    use std::sync::{Arc, Mutex};

    use axum::{extract::State, http::StatusCode, response::IntoResponse};
    use scraper::{Html, Selector};

    use crate::{
        endpoints::{self, format_endpoint},
        product::seed_products,
        test_utils::{assert_content_type, assert_valid_html, parse_html_document},
    };

    use super::{ProductsPageState, get_products_page};

    async fn render_products_page(state: ProductsPageState) -> Html {
        let response = get_products_page(State(state)).await.into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_content_type(&response, "text/html; charset=utf-8");

        let html = parse_html_document(response).await;
        assert_valid_html(&html);

        html
    }

    #[tokio::test]
    async fn shows_a_card_for_each_product() {
        let products = seed_products();
        let state = ProductsPageState {
            products: Arc::new(Mutex::new(products.clone())),
        };

        let html = render_products_page(state).await;

        let card_selector = Selector::parse("div[data-product-card]").unwrap();
        let cards: Vec<_> = html.select(&card_selector).collect();
        assert_eq!(cards.len(), products.len());

        for (card, product) in cards.iter().zip(&products) {
            let text: String = card.text().collect();
            assert!(
                text.contains(&product.title),
                "want card to contain title {:?}",
                product.title
            );
            assert!(
                text.contains(&format!("${}", product.price)),
                "want card to contain price ${}",
                product.price
            );
            assert!(text.contains(&product.category.name));
        }
    }

    #[tokio::test]
    async fn long_descriptions_are_truncated_on_cards() {
        let mut products = seed_products();
        products.truncate(1);
        products[0].description = "d".repeat(200);
        let state = ProductsPageState {
            products: Arc::new(Mutex::new(products)),
        };

        let html = render_products_page(state).await;

        let card_selector = Selector::parse("div[data-product-card]").unwrap();
        let text: String = html
            .select(&card_selector)
            .next()
            .expect("No product card found")
            .text()
            .collect();

        assert!(text.contains(&format!("{}...", "d".repeat(70))));
        assert!(!text.contains(&"d".repeat(71)));
    }

    #[tokio::test]
    async fn cards_link_to_edit_and_delete_endpoints() {
        let mut products = seed_products();
        products.truncate(1);
        let product = products[0].clone();
        let state = ProductsPageState {
            products: Arc::new(Mutex::new(products)),
        };

        let html = render_products_page(state).await;

        let edit_link_selector = Selector::parse("div[data-product-card] a").unwrap();
        let edit_href = html
            .select(&edit_link_selector)
            .next()
            .expect("No edit link found")
            .value()
            .attr("href")
            .expect("Edit link missing href");
        assert_eq!(
            edit_href,
            format_endpoint(endpoints::EDIT_PRODUCT_VIEW, &product.id)
        );

        let delete_button_selector = Selector::parse("button[hx-delete]").unwrap();
        let delete_button = html
            .select(&delete_button_selector)
            .next()
            .expect("No delete button found");
        assert_eq!(
            delete_button.value().attr("hx-delete"),
            Some(format_endpoint(endpoints::DELETE_PRODUCT, &product.id).as_str())
        );

        let confirm_message = delete_button
            .value()
            .attr("hx-confirm")
            .expect("Delete button missing hx-confirm");
        assert!(confirm_message.contains(&product.title));
        assert!(confirm_message.contains("You won't be able to revert this!"));
    }

    #[tokio::test]
    async fn empty_catalog_shows_a_call_to_action() {
        let state = ProductsPageState {
            products: Arc::new(Mutex::new(vec![])),
        };

        let html = render_products_page(state).await;

        let card_selector = Selector::parse("div[data-product-card]").unwrap();
        assert_eq!(html.select(&card_selector).count(), 0);

        let body_text: String = html
            .select(&Selector::parse("body").unwrap())
            .next()
            .expect("No body found")
            .text()
            .collect();
        assert!(body_text.contains("The catalog is empty."));
    }
}
