//! Quarterly bonus calculation.

use rust_decimal::Decimal;

use crate::config::BonusConfig;
use crate::error::BonusResult;
use crate::models::Positions;

use super::attendance::attendance_ratio;

/// Calculates the quarterly bonus for a managerial employee.
///
/// The amount is `salary × bonus × quarterly_coefficient(position) ×
/// quarter_weight(quarter) × attendance_ratio(work_days)`, with every
/// coefficient taken from the table effective for `current_year`. The
/// quarter is zero-based (see
/// [`quarter_from_month0`](super::quarter_from_month0)); weights ramp
/// through the year so later quarters pay more.
///
/// Only invoked for positions where
/// [`Positions::is_manager`](crate::models::Positions::is_manager) holds;
/// the gate belongs to the orchestrator, not to this function.
///
/// # Arguments
///
/// * `position` - The employee's position; selects the quarterly coefficient
/// * `salary` - The employee's salary
/// * `bonus` - The bonus multiplier
/// * `work_days` - Days worked; zero yields a zero bonus
/// * `current_year` - Selects the effective coefficient table
/// * `quarter` - Zero-based fiscal quarter, `0..=3`
/// * `config` - The loaded configuration
///
/// # Returns
///
/// Returns the quarterly bonus amount, or an error if no table is effective
/// for the year, the table carries no entry for the position, or the
/// quarter is out of range.
pub fn calculate_quarterly_bonus(
    position: Positions,
    salary: Decimal,
    bonus: Decimal,
    work_days: u32,
    current_year: i32,
    quarter: u32,
    config: &BonusConfig,
) -> BonusResult<Decimal> {
    let table = config.table_for_year(current_year)?;
    let coefficients = table.coefficients(position)?;
    let weight = table.quarter_weight(quarter)?;
    let ratio = attendance_ratio(work_days, table.quarterly_qualifying_days);

    Ok(salary * bonus * coefficients.quarterly * weight * ratio)
}
