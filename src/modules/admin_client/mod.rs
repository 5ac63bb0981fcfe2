//! Typed HTTP client for the administration API.
//!
//! [`adapter::ApiClient`] issues one request per call; the coordinators in
//! [`application`] fan single-item calls out over lists of ids.

pub mod adapter;
pub mod application;
