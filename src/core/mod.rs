pub mod query;

pub use crate::domain::model::Student;
