pub mod admin;
pub mod directory;
pub mod employee;
pub mod user;
