pub mod auth;
pub mod config;
pub mod container;
pub mod database;
pub mod external_services;

pub use config::Settings;
pub use container::Container;
