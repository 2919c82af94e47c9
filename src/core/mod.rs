pub mod engine;
pub mod filter;
pub mod pagination;
pub mod rng;
pub mod shuffle;
pub mod slug;

pub use crate::domain::model::{DirectoryView, Listing};
pub use crate::domain::ports::{ConfigProvider, ListingStore};
pub use crate::utils::error::Result;
