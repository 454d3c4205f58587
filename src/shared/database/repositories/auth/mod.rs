// Auth repositories
pub mod memory;
pub mod token_repository;
pub mod user_repository;

pub use memory::*;
pub use token_repository::*;
pub use user_repository::*;
