//! Display-ready views of holdings and the portfolio summary.

mod view_model;

pub use view_model::{HoldingRow, SummaryView};
