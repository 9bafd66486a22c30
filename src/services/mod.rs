//! Business logic layer for till-report
//!
//! - `line_items`: the mutable state of the day being edited
//! - `aggregation`: read-only totals over that state
//! - `day`: loading and saving days through storage

pub mod aggregation;
pub mod day;
pub mod line_items;

pub use aggregation::{category_subtotal, daily_totals, denomination_total, grand_total, DailyTotals};
pub use day::DayService;
pub use line_items::LineItemStore;
