//! Shared layout, styles and small view helpers used across pages.

use maud::{DOCTYPE, Markup, html};
use unicode_segmentation::UnicodeSegmentation;

// Link styles
pub const LINK_STYLE: &str = "text-indigo-600 hover:text-indigo-500 \
    dark:text-indigo-500 dark:hover:text-indigo-400 underline";

// Button styles
pub const BUTTON_PRIMARY_STYLE: &str = "w-full px-4 py-2 bg-indigo-600 \
    dark:bg-indigo-700 disabled:bg-indigo-800 hover:enabled:bg-indigo-700 \
    hover:enabled:dark:bg-indigo-800 text-white rounded";

pub const BUTTON_DELETE_STYLE: &str = "text-red-600 hover:text-red-500 \
    dark:text-red-500 dark:hover:text-red-400 underline bg-transparent \
    border-none cursor-pointer";

// Form styles
pub const FORM_CONTAINER_STYLE: &str = "flex flex-col items-center px-6 py-8 \
    mx-auto lg:py-0 max-w-md text-gray-900 dark:text-white";
pub const FORM_LABEL_STYLE: &str = "block mb-2 text-sm font-medium text-gray-900 dark:text-white";
pub const FORM_TEXT_INPUT_STYLE: &str = "block w-full p-2.5 rounded text-sm \
    text-gray-900 dark:text-white disabled:text-gray-500 bg-gray-50 \
    dark:bg-gray-700 border border-gray-300 dark:border-gray-600 \
    dark:placeholder-gray-400 focus:ring-indigo-600 focus:border-indigo-600 \
    focus:dark:border-indigo-500 focus:dark:ring-indigo-500";
pub const FORM_ERROR_STYLE: &str = "text-red-600 dark:text-red-400 text-sm mt-1";

// Color swatch styles, used for the form picker and the card dots.
pub const COLOR_SWATCH_LABEL_STYLE: &str = "color-swatch inline-block h-7 w-7 rounded-full \
    border border-gray-300 dark:border-gray-600 cursor-pointer";
pub const COLOR_DOT_STYLE: &str = "inline-block h-4 w-4 rounded-full \
    border border-gray-300 dark:border-gray-600";

// Card styles
pub const CARD_STYLE: &str = "rounded-xl border border-gray-200 bg-white p-4 \
    shadow-md flex flex-col dark:border-gray-700 dark:bg-gray-800";

// Page container
pub const PAGE_CONTAINER_STYLE: &str =
    "flex flex-col px-6 py-8 mx-auto lg:py-5 text-gray-900 dark:text-white max-w-screen-xl w-full";

/// Wrap `content` in the shared page layout: head, scripts, stylesheet and
/// the alert container.
pub fn base(title: &str, content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Shopkeeper" }
                link href="/static/main.css" rel="stylesheet";

                script src="https://cdn.tailwindcss.com" {}
                script src="https://unpkg.com/htmx.org@2.0.8" {}
                script src="https://unpkg.com/htmx-ext-response-targets@2.0.4" {}
            }

            body
                hx-ext="response-targets"
                class="container max-w-full min-h-screen bg-gray-50 dark:bg-gray-900"
            {
                (content)

                // Alert container for out-of-band swaps
                div
                    id="alert-container"
                    class="hidden w-full max-w-md px-4"
                    style="position: fixed; bottom: 1rem; left: 50%; transform: translateX(-50%); z-index: 9999;"
                {}
            }
        }
    }
}

/// A full error page (404, 500) with a link back to the product list.
pub fn error_view(title: &str, header: &str, description: &str, fix: &str) -> Markup {
    let content = html!(
        section class="bg-white dark:bg-gray-900"
        {
            div class="py-8 px-4 mx-auto max-w-screen-xl lg:py-16 lg:px-6"
            {
                div class="mx-auto max-w-screen-sm text-center"
                {
                    h1
                        class="mb-4 text-7xl tracking-tight font-extrabold
                            lg:text-9xl text-indigo-600 dark:text-indigo-500"
                    {
                        (header)
                    }

                    p
                        class="mb-4 text-3xl md:text-4xl tracking-tight
                            font-bold text-gray-900 dark:text-white"
                    {
                        (description)
                    }

                    p
                        class="mb-4 text-1xl md:text-2xl tracking-tight
                            text-gray-900 dark:text-white"
                    {
                        (fix)
                    }

                    a
                        href="/"
                        class="inline-flex text-white bg-indigo-600
                            hover:bg-indigo-800 focus:ring-4 focus:outline-hidden
                            focus:ring-indigo-300 font-medium rounded text-sm px-5
                            py-2.5 text-center dark:focus:ring-indigo-900 my-4"
                    {
                        "Back to Products"
                    }
                }
            }
        }
    );

    base(title, &content)
}

/// The Edit link and Delete button shown next to each product.
///
/// The delete button asks the client for confirmation (`hx-confirm`) before
/// the DELETE request is sent; `hx_target` and `hx_swap` control which
/// element is removed from the page once the server responds.
pub fn edit_delete_action_links(
    edit_url: &str,
    delete_url: &str,
    confirm_message: &str,
    hx_target: &str,
    hx_swap: &str,
) -> Markup {
    html!(
        a href=(edit_url) class=(LINK_STYLE) { "Edit" }

        button
            type="button"
            class=(BUTTON_DELETE_STYLE)
            hx-delete=(delete_url)
            hx-confirm=(confirm_message)
            hx-target=(hx_target)
            hx-swap=(hx_swap)
            hx-target-error="#alert-container"
        {
            "Delete"
        }
    )
}

/// Shorten `text` for display in a card, appending an ellipsis when it is
/// `max_graphemes` or longer. The stored text is never modified.
pub fn truncate_with_ellipsis(text: &str, max_graphemes: usize) -> String {
    if text.graphemes(true).count() >= max_graphemes {
        let truncated: String = text.graphemes(true).take(max_graphemes).collect();
        format!("{truncated}...")
    } else {
        text.to_string()
    }
}
