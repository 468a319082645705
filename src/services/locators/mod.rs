//! Location sources
//!
//! A locator resolves the caller's position exactly once per call. There is no
//! watch/subscription mode and no retry: a failure is returned to the caller,
//! which decides whether to ask again.

use crate::{error::GeolocationError, models::Coordinates};

pub mod fixed;
pub mod ip_api;

pub use fixed::FixedLocator;
pub use ip_api::IpApiLocator;

/// Trait for single-shot position lookups
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait Locator: Send + Sync {
    /// Resolves the current position or reports why it could not
    async fn acquire(&self) -> Result<Coordinates, GeolocationError>;

    /// Locator name for logging and debugging
    fn name(&self) -> &'static str;
}
