//! Infrastructure layer for ProfileCraft.
//!
//! Concrete adapters behind the domain traits: the demo data source and
//! the TOML configuration service.

pub mod config_service;
pub mod demo_portfolio_repository;

pub use config_service::{ConfigService, CraftConfig};
pub use demo_portfolio_repository::{demo_portfolio, DemoPortfolioRepository};
