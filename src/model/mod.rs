pub mod all_entry;
pub mod employee;
pub mod kind;
pub mod user;
