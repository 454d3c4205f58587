// Auth domain models
pub mod session;
pub mod token;
pub mod user;

pub use session::*;
pub use token::*;
pub use user::*;
