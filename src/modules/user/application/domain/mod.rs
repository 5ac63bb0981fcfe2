pub mod user_policy;
