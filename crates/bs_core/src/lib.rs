pub mod error;
pub mod format;
pub mod types;

pub use error::Error;
pub use types::{Article, BlogInfo, BlogListing, StatsSummary};
pub type Result<T> = std::result::Result<T, Error>;
