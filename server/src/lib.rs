pub mod config;
pub mod db;
pub mod error;
pub mod geo;
pub mod handlers;

pub use handlers::router;
