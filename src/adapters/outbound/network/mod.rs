/// Network adapters for the assessment backend
mod sentinel_api_client;

pub use sentinel_api_client::SentinelApiClient;
