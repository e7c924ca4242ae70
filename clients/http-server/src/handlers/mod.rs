pub mod admin;
pub mod records;
