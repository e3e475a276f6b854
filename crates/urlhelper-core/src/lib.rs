pub mod builder;
pub mod config;
pub mod error;
pub mod logging;
pub mod query;

pub use builder::{UrlBuilder, UrlHelper};
pub use error::{Error, Result};
pub use query::{MultiParams, QueryParams, SimpleParams};
