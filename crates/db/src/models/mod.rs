pub mod class_client;
pub mod user;
