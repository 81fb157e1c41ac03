pub mod config;
pub mod dispatch;
pub mod error;
pub mod geocode;
pub mod inference;
pub mod server;

pub use error::{Error, Result};
