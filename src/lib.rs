#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod parsers;
pub mod services;

pub use cli::run_from_env;
pub use error::{GenerateError, Result};
