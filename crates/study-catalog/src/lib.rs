pub mod catalog;
pub mod data;
pub mod error;
pub mod filter;
pub mod mcp_api;
pub mod model;
pub mod validate;

pub use catalog::Catalog;
pub use filter::{GuideFilter, LinkFilter};
pub use model::{ExternalLink, Guide, Level};
