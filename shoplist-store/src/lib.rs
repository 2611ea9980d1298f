//! shoplist-store: data-access layer for the `shopping_list` table
//!
//! A thin, stateless repository over a caller-supplied Postgres pool.
//! Every operation is a single query; storage errors propagate unchanged
//! to the caller, and not-found surfaces as absence rather than an error.

pub mod config;
pub mod db;
pub mod error;
pub mod models;

pub use config::StoreConfig;
pub use db::repos::ItemRepo;
pub use error::{StoreError, StoreResult};
pub use models::{Category, ItemPatch, NewItem, ShoppingListItem};
