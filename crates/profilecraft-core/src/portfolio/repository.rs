//! Portfolio repository trait.

use async_trait::async_trait;

use super::model::Portfolio;
use crate::error::Result;

/// Read-side source of portfolio data for the dashboard and public page.
#[async_trait]
pub trait PortfolioRepository: Send + Sync {
    /// Loads the portfolio published under `username`.
    async fn load(&self, username: &str) -> Result<Portfolio>;
}
