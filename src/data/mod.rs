//! Data layer module
//!
//! Holds the in-process state of the service:
//! - Entity models
//! - Insertion-ordered keyed collections
//! - The entity store (volatile, lost on restart)
//! - Password digests

mod collection;
pub mod credentials;
mod models;
mod store;

pub use collection::Collection;
pub use models::*;
pub use store::EntityStore;
