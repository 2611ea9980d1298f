//! Database layer - connection bootstrap and repositories
//!
//! The pool is sqlx's; this module only configures it. Repositories
//! borrow the caller's pool per call site and hold no connection of
//! their own.

pub mod pool;
pub mod repos;
pub mod schema;

pub use pool::connect;
pub use repos::ItemRepo;
