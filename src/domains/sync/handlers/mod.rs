// Sync domain handlers
pub mod sync_handler;

pub use sync_handler::*;
