pub mod repository;

pub use repository::JsonUserRepository;
