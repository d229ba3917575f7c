pub mod auth;
pub mod listing;
pub mod profile;
pub mod vacancy;

mod validation;
