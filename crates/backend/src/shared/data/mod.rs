pub mod memory;
pub mod repository;
pub mod rest;

pub use memory::InMemoryRepository;
pub use repository::{Repository, RepositoryError, RepositoryResult};
pub use rest::RestRepository;
