pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::CliConfig;
pub use crate::core::query;
pub use crate::domain::model::Student;
pub use crate::utils::error::{Result, RosterError};
