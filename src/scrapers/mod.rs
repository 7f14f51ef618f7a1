pub mod crawl;
pub mod finn;
pub mod http;
pub mod observer;
pub mod traits;
pub mod types;

pub use crawl::{Crawler, ListingFailurePolicy};
pub use finn::{FinnParser, ParsedListing};
pub use http::HttpFetcher;
pub use observer::TracingObserver;
pub use traits::{FetchResponse, Fetcher, ListingObserver};
pub use types::SearchParams;
