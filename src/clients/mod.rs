#[macro_use]
mod macros;
mod manager_client;

pub use manager_client::ProductManagerClient;
