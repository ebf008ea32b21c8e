//! HTTP surface of the agency site: the axum router, page handlers, maud
//! views and the contact API.

pub mod errors;
pub mod pages;
pub mod routes;
pub mod startup;
pub mod state;
pub mod views;

pub use startup::run;
