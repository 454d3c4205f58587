// Auth domain handlers
pub mod kobo_auth_handler;
pub mod session_handler;

pub use kobo_auth_handler::*;
pub use session_handler::*;
