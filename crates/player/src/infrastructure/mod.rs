//! Infrastructure adapters for the outbound ports

pub mod clock;
pub mod http_client;

#[cfg(test)]
pub mod testing;

pub use clock::SystemClock;
pub use http_client::HttpApiAdapter;
