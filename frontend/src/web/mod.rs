//! Browser implementations of the core's platform traits.

mod http;
mod storage;

pub use http::FetchHttpClient;
pub use storage::BrowserTokenStore;
