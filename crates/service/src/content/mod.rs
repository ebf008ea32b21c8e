//! Content Client: fetch entries from the Content Store and hand pages plain,
//! defaulted records.

pub mod client;
pub mod query;
pub mod repository;

pub use client::CmsClient;
pub use query::ContentQuery;
pub use repository::{mock, CmsContentRepository, ContentRepository};
