//! Generic list/create/update over any [`Resource`](crate::resource::Resource):
//! repository trait, SeaORM and in-memory stores, and the service on top.

pub mod repo;
pub mod repository;
pub mod service;

pub use repository::CollectionRepository;
pub use service::CollectionService;
