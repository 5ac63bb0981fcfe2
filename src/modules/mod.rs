pub mod admin_client;
pub mod auth;
pub mod group;
pub mod membership;
pub mod user;
