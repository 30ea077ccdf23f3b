//! Portfolio and session types.

#[allow(clippy::module_inception)]
mod portfolio;
mod session;

pub use portfolio::Portfolio;
pub use session::PortfolioSession;
