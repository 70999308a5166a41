pub mod errors;
pub mod db;
pub mod log_entry;

#[cfg(test)]
mod tests;
