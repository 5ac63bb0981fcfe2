pub mod membership_use_cases;
pub mod ports;
pub mod services;
