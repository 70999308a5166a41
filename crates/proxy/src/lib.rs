//! Browser-facing proxy: serves the index page and relays log requests to the
//! log store service without interpreting their payloads.

pub mod errors;
pub mod upstream;
pub mod routes;
pub mod startup;

pub use startup::run;
