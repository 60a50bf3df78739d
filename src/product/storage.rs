//! Loading and saving the product list through the key-value store.
//!
//! The whole list lives under a single key as one JSON document. It is read
//! once at startup and rewritten in full after every change.

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{Error, category::Category, store};

use super::domain::Product;

/// The store key the product list is saved under.
pub const PRODUCTS_KEY: &str = "products";

/// The products a fresh install starts with.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: "0a6e2f3c-9b1d-4f7a-8c25-5d1e9b3a7f40".to_owned(),
            title: "Classic Cotton Crewneck T-Shirt".to_owned(),
            description: "A soft, breathable crewneck tee cut from midweight \
                combed cotton. Pre-shrunk with a ribbed collar that keeps its \
                shape wash after wash."
                .to_owned(),
            image_url: "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?w=640"
                .to_owned(),
            price: "24.99".to_owned(),
            colors: vec!["#1F2937".to_owned(), "#2563EB".to_owned()],
            category: Category {
                id: "clothing".to_owned(),
                name: "Clothing".to_owned(),
                image_url: "https://images.unsplash.com/photo-1489987707025-afc232f7ea0f?w=96"
                    .to_owned(),
            },
        },
        Product {
            id: "6d8b1c52-2e4f-49a3-b7d0-91c3e5f8a216".to_owned(),
            title: "Noise Cancelling Over-Ear Headphones".to_owned(),
            description: "Wireless over-ear headphones with active noise \
                cancellation, thirty hours of battery life and a fold-flat \
                design for travel."
                .to_owned(),
            image_url: "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=640"
                .to_owned(),
            price: "199".to_owned(),
            colors: vec!["#1F2937".to_owned()],
            category: Category {
                id: "electronics".to_owned(),
                name: "Electronics".to_owned(),
                image_url: "https://images.unsplash.com/photo-1498049794561-7780e7231661?w=96"
                    .to_owned(),
            },
        },
        Product {
            id: "f3c7a9e1-5b2d-4c68-a1f4-7e9d0b6c3852".to_owned(),
            title: "Mid-Century Oak Coffee Table".to_owned(),
            description: "A solid oak coffee table with tapered legs and a \
                hand-rubbed oil finish. Assembles in minutes with the included \
                hardware."
                .to_owned(),
            image_url: "https://images.unsplash.com/photo-1532372320572-cda25653a26d?w=640"
                .to_owned(),
            price: "349.50".to_owned(),
            colors: vec!["#3C2A21".to_owned()],
            category: Category {
                id: "furniture".to_owned(),
                name: "Furniture".to_owned(),
                image_url: "https://images.unsplash.com/photo-1555041469-a586c61ea9bc?w=96"
                    .to_owned(),
            },
        },
        Product {
            id: "b1e4d7f9-8a3c-45b2-9d61-0c5f7a2e8b93".to_owned(),
            title: "Trail Running Shoes with Grip Sole".to_owned(),
            description: "Lightweight trail runners with an aggressive lugged \
                outsole, a rock plate for protection and a breathable mesh \
                upper."
                .to_owned(),
            image_url: "https://images.unsplash.com/photo-1542291026-7eec264c27ff?w=640".to_owned(),
            price: "89.95".to_owned(),
            colors: vec!["#FF6E31".to_owned(), "#1F2937".to_owned()],
            category: Category {
                id: "footwear".to_owned(),
                name: "Footwear".to_owned(),
                image_url: "https://images.unsplash.com/photo-1542291026-7eec264c27ff?w=96"
                    .to_owned(),
            },
        },
    ]
}

/// Load the product list from the store.
///
/// Falls back to [seed_products] when the key has never been written or when
/// its content cannot be parsed, so a fresh or damaged store still yields a
/// working catalog.
///
/// # Errors
/// Returns an error if the store cannot be read.
pub fn load_products(connection: &Connection) -> Result<Vec<Product>, Error> {
    let stored = store::get_item(PRODUCTS_KEY, connection)?;

    let document = match stored {
        Some(document) => document,
        None => {
            tracing::info!("No saved product list found, starting from the seed catalog.");
            return Ok(seed_products());
        }
    };

    match serde_json::from_str(&document) {
        Ok(products) => Ok(products),
        Err(error) => {
            tracing::warn!(
                "Could not parse the saved product list ({error}), \
                starting from the seed catalog."
            );
            Ok(seed_products())
        }
    }
}

/// Write the entire product list to the store, replacing the saved document.
///
/// # Errors
/// Returns an error if the list cannot be serialized or the store cannot be
/// written.
pub fn save_products(products: &[Product], connection: &Connection) -> Result<(), Error> {
    let document = serde_json::to_string(products)
        .map_err(|error| Error::JSONSerializationError(error.to_string()))?;

    store::set_item(PRODUCTS_KEY, &document, connection)?;

    Ok(())
}

/// Persist `products`, logging failures instead of propagating them.
///
/// A failed write leaves the in-memory list as the working copy, so the
/// application keeps serving requests and the user keeps their changes for
/// the session.
pub fn persist_products(products: &[Product], db_connection: &Arc<Mutex<Connection>>) {
    let connection = match db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("Could not acquire the database lock to save products: {error}");
            return;
        }
    };

    if let Err(error) = save_products(products, &connection) {
        tracing::error!("Could not save the product list: {error}");
    }
}
