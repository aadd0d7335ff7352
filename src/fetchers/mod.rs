mod request;

pub use request::{FetchedPage, RequestFetcher};
