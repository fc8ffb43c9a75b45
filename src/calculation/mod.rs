//! Calculation logic for the Bonus Calculation Engine.
//!
//! This module contains the pure functions for deriving the current fiscal
//! quarter, computing the worked-day attendance ratio, and calculating the
//! annual and quarterly bonus amounts from the configured coefficient tables.

mod annual_bonus;
mod attendance;
mod quarter;
mod quarterly_bonus;

pub use annual_bonus::calculate_annual_bonus;
pub use attendance::attendance_ratio;
pub use quarter::quarter_from_month0;
pub use quarterly_bonus::calculate_quarterly_bonus;
