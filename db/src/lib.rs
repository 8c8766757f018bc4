pub mod ledger;
pub mod models;
pub mod store;

use common::config::Config;
use store::{JsonFileStore, StoreError};

/// Opens the file-backed store at the configured path.
///
/// The path comes from `STORE_PATH` (default `data/portal-store.json`);
/// intermediate directories are created on first open.
pub fn open() -> Result<JsonFileStore, StoreError> {
    JsonFileStore::open(Config::store_path_from_env())
}
