//! Worked-day attendance ratio.

use rust_decimal::Decimal;

/// Computes the attendance ratio for a worked-day count.
///
/// The ratio is `min(work_days, qualifying_days) / qualifying_days`: the
/// full bonus is earned at or above the qualifying threshold, a prorated
/// share below it, and nothing at zero worked days. There is never a
/// division by the worked-day count itself.
///
/// A zero threshold is rejected at configuration load; if one slips
/// through, the ratio is zero rather than a division error.
///
/// # Example
///
/// ```
/// use bonus_engine::calculation::attendance_ratio;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(attendance_ratio(250, 250), Decimal::ONE);
/// assert_eq!(attendance_ratio(300, 250), Decimal::ONE);
/// assert_eq!(attendance_ratio(125, 250), Decimal::from_str("0.5").unwrap());
/// assert_eq!(attendance_ratio(0, 250), Decimal::ZERO);
/// ```
pub fn attendance_ratio(work_days: u32, qualifying_days: u32) -> Decimal {
    if qualifying_days == 0 {
        return Decimal::ZERO;
    }

    let counted = work_days.min(qualifying_days);
    Decimal::from(counted) / Decimal::from(qualifying_days)
}
