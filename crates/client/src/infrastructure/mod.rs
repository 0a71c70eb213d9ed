#[cfg(target_arch = "wasm32")]
pub mod dom;
pub mod http_client;
pub mod listener;

pub mod testing;

pub use http_client::HttpClient;
