pub mod db_utils;
pub mod registration;
