pub mod http;
pub mod types;

pub use http::HttpPageSource;
pub use types::PageSource;
