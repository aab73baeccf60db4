pub mod archive;
pub mod error;
pub mod fetcher;
pub mod history;
pub mod http;
