//! Portfolio aggregate and repository trait.

mod model;
mod repository;

pub use model::Portfolio;
pub use repository::PortfolioRepository;
