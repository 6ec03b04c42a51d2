pub mod config;
pub mod error;
pub mod form;
pub mod predictor;
pub mod server;

pub use error::{Error, Result};
