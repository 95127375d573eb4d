pub mod client;
pub mod errors;
#[cfg(test)]
pub mod mock_crm;
pub mod service;
