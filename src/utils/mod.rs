pub mod query;
pub mod validation;
