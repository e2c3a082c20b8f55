#![doc = "The `taskvault` library crate."]
#![doc = ""]
#![doc = "This crate contains the core business logic for the taskvault API:"]
#![doc = "authentication (password hashing, token issuance and verification,"]
#![doc = "identity resolution), owner-scoped task storage, routing configuration,"]
#![doc = "and error handling. It is used by the main binary (`main.rs`) to"]
#![doc = "construct and run the application."]

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod store;
