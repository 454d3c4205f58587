// Sync domain models
pub mod sync;

pub use sync::*;
