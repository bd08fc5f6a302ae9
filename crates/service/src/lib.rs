//! Service layer for the site's content collections.
//! - Input shapes and validation run before any storage access.
//! - One generic list/create/update service per record kind over a repository trait.
//! - Storage is SeaORM in production and an in-memory store in tests.

pub mod clock;
pub mod collection;
pub mod content;
pub mod errors;
pub mod inputs;
pub mod patch;
pub mod resource;
pub mod validation;
#[cfg(test)]
pub mod test_support;

pub use collection::CollectionService;
pub use content::{ContentServices, Provides};
pub use errors::ServiceError;
