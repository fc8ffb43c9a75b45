//! Annual bonus calculation.

use rust_decimal::Decimal;

use crate::config::BonusConfig;
use crate::error::BonusResult;
use crate::models::Positions;

use super::attendance::attendance_ratio;

/// Calculates the annual bonus for an employee.
///
/// The amount is `salary × bonus × annual_coefficient(position) ×
/// attendance_ratio(work_days)`, with every coefficient taken from the
/// table effective for `current_year`. Deterministic and free of I/O:
/// identical inputs always produce identical output.
///
/// # Arguments
///
/// * `position` - The employee's position; selects the annual coefficient
/// * `salary` - The employee's salary
/// * `bonus` - The bonus multiplier
/// * `work_days` - Days worked; zero yields a zero bonus
/// * `current_year` - Selects the effective coefficient table
/// * `config` - The loaded configuration
///
/// # Returns
///
/// Returns the annual bonus amount, or an error if no table is effective
/// for the year or the table carries no entry for the position. Both are
/// configuration defects, not request failures: the loader validates table
/// completeness at startup.
///
/// # Examples
///
/// ```no_run
/// use bonus_engine::calculation::calculate_annual_bonus;
/// use bonus_engine::config::ConfigLoader;
/// use bonus_engine::models::Positions;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let loader = ConfigLoader::load("./config/bonus").unwrap();
/// let amount = calculate_annual_bonus(
///     Positions::Dev,
///     Decimal::from_str("80000.00").unwrap(),
///     Decimal::from_str("2.0").unwrap(),
///     250,
///     2024,
///     loader.config(),
/// )
/// .unwrap();
/// println!("Annual bonus: {amount}");
/// ```
pub fn calculate_annual_bonus(
    position: Positions,
    salary: Decimal,
    bonus: Decimal,
    work_days: u32,
    current_year: i32,
    config: &BonusConfig,
) -> BonusResult<Decimal> {
    let table = config.table_for_year(current_year)?;
    let coefficients = table.coefficients(position)?;
    let ratio = attendance_ratio(work_days, table.annual_qualifying_days);

    Ok(salary * bonus * coefficients.annual * ratio)
}
