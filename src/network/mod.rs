pub mod api;
pub mod client;
#[cfg(test)]
pub(crate) mod test_server;

pub use api::ChatApiClient;
pub use client::ChatTransport;
