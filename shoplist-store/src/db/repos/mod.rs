//! Repository implementations for database access
//!
//! Each operation is a single query whose failure propagates unchanged;
//! not-found surfaces as `None` or an affected-count of 0, never as an
//! error.

pub mod items;

pub use items::ItemRepo;
