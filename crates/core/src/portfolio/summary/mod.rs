//! Portfolio-wide aggregation of holdings.

mod summary_calculator;
mod summary_model;

pub use summary_calculator::aggregate;
pub use summary_model::{pnl_percentage, PortfolioSummary};
