//! Sets up the application's database schema.

use rusqlite::{Connection, Error};

use crate::store::create_store_table;

/// Create the tables the application needs in `connection`.
///
/// # Errors
/// Returns an error if the tables already exist or if there is an SQL error.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    create_store_table(connection)?;

    Ok(())
}
