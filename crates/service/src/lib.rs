//! Service layer for log entries.
//! - `log_store` owns how storage handles are acquired and released per request.
//! - `log_entry_service` holds the create/list operations on top of `models`.

pub mod errors;
pub mod log_store;
pub mod log_entry_service;
#[cfg(test)]
pub mod test_support;
