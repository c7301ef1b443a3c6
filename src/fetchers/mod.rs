pub mod browser;
pub mod http;
pub mod mock;

mod fetcher;

pub use browser::BrowserFetcher;
pub use fetcher::Fetcher;
pub use http::HttpFetcher;
pub use mock::{MockFetcher, MockPage};
