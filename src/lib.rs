pub mod handles;
pub mod init;
pub mod params;
pub mod routes;
pub mod services;
pub mod utils;
