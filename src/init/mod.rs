pub mod logging;
pub mod routes;
pub mod config;

pub use config::init_config;
pub use logging::init_logging;
pub use routes::init_routes;
