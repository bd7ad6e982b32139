pub mod commands;
pub mod error;
pub mod form;
pub mod parser;
pub mod session;

pub use error::{Error, Result};
