//! Client core for the talent board: job listing filters, the authentication
//! session, and the profile, registration and vacancy forms.
//!
//! Remote collaborators (identity provider, document store, file picker) are
//! traits handed to the components at construction.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
