//! Eventra marketplace API client

pub mod api;
pub mod marketplace;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod pagination;
pub mod parallel;

pub use api::{AuthApi, CatalogApi, OrderApi, OrganizerApi};
pub use marketplace::{DEFAULT_API_HOST, MarketplaceClient};
#[cfg(test)]
#[allow(unused_imports)]
pub use mock::MockMarketplaceClient;
pub use pagination::{DEFAULT_PAGE_SIZE, Page, PageParams};
pub use parallel::fetch_remaining_pages;
