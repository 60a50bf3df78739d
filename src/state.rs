//! Implements a struct that holds the state of the server.

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{
    Error,
    db,
    product::{Product, load_products},
};

/// The state of the server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The in-memory product list, the single source of truth while the
    /// server runs.
    pub products: Arc<Mutex<Vec<Product>>>,
    /// The database connection backing the key-value store.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl AppState {
    /// Create a new [AppState], setting up the store schema if needed and
    /// loading the saved product list (or the seed catalog).
    ///
    /// # Errors
    /// Returns an error if the store cannot be read.
    pub fn new(connection: Connection) -> Result<Self, Error> {
        if let Err(error) = db::initialize(&connection) {
            // The table already existing is the normal case after a restart.
            tracing::debug!("Skipping schema setup: {error}");
        }

        let products = load_products(&connection)?;
        tracing::info!("Loaded {} product(s).", products.len());

        Ok(Self {
            products: Arc::new(Mutex::new(products)),
            db_connection: Arc::new(Mutex::new(connection)),
        })
    }
}
