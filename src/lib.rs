// Library-sync server: device token authentication for Kobo-protocol clients
pub mod domains;
pub mod routes;
pub mod shared;
