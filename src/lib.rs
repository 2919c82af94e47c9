pub mod adapters;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::http_store::HttpListingStore;
pub use crate::core::engine::{DirectoryEngine, DirectoryState};
pub use crate::core::filter::{Facet, FilterCriteria};
pub use crate::core::pagination::PageWindow;
pub use crate::core::rng::{daily_seed, SeededRng};
pub use crate::core::shuffle::seeded_shuffle;
pub use crate::core::slug::{decode_slug, listing_slug, SLUG_MARKER};
pub use domain::model::{DirectoryView, Listing};
pub use domain::ports::{ConfigProvider, ListingStore};
pub use utils::error::{DirectoryError, Result};
