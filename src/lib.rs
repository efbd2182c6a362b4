pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod security;
pub mod validators;

pub use config::Config;
pub use error::{AppError, Result};
