mod fetcher;
mod http;

pub use fetcher::Fetcher;
pub use http::{BoxStream, HttpClient, Response};

#[cfg(feature = "reqwest")]
pub use http::ReqwestClient;
