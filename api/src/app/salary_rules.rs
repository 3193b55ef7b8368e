//! Salary adjustment rules
//!
//! Pure computation of a candidate salary from a performance score and tenure.
//! Nothing here reads the clock or touches storage; callers decide whether the
//! result is committed.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

pub use crate::domain::entities::SALARY_SCALE;

/// Lowest accepted performance score
pub const MIN_PERFORMANCE_SCORE: i32 = 0;

/// Highest accepted performance score
pub const MAX_PERFORMANCE_SCORE: i32 = 100;

/// Score at or above which the top raise applies
pub const HIGH_PERFORMANCE_SCORE: i32 = 90;

/// Raise percentage for high performers
pub const HIGH_PERFORMANCE_RAISE_PERCENT: u32 = 15;

/// Score at or above which the standard raise applies
pub const SOLID_PERFORMANCE_SCORE: i32 = 70;

/// Raise percentage for solid performers
pub const SOLID_PERFORMANCE_RAISE_PERCENT: u32 = 10;

/// Tenure must be strictly greater than this many whole years for the bonus
pub const TENURE_BONUS_MIN_YEARS: u32 = 5;

/// Flat raise percentage for long tenure
pub const TENURE_BONUS_PERCENT: u32 = 5;

/// No salary may be raised above this amount
pub const SALARY_CAP: u32 = 200_000;

/// Total raise percentage for a score and tenure
///
/// Performance tiers are exclusive; the tenure bonus stacks on top.
pub fn raise_percent(performance_score: i32, tenure_years: u32) -> u32 {
    let performance = if performance_score >= HIGH_PERFORMANCE_SCORE {
        HIGH_PERFORMANCE_RAISE_PERCENT
    } else if performance_score >= SOLID_PERFORMANCE_SCORE {
        SOLID_PERFORMANCE_RAISE_PERCENT
    } else {
        0
    };

    let tenure = if tenure_years > TENURE_BONUS_MIN_YEARS {
        TENURE_BONUS_PERCENT
    } else {
        0
    };

    performance + tenure
}

/// Compute the candidate salary after applying the raise rules
///
/// The raise fraction and the product are both rounded half-up to cents, and
/// the result is clamped to [`SALARY_CAP`].
pub fn compute_new_salary(
    current_salary: Decimal,
    performance_score: i32,
    tenure_years: u32,
) -> Decimal {
    let percent = Decimal::from(raise_percent(performance_score, tenure_years));
    let fraction = (percent / Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(SALARY_SCALE, RoundingStrategy::MidpointAwayFromZero);

    let new_salary = (current_salary * (Decimal::ONE + fraction))
        .round_dp_with_strategy(SALARY_SCALE, RoundingStrategy::MidpointAwayFromZero);

    new_salary.min(Decimal::from(SALARY_CAP))
}

/// Whole years elapsed between `joining_date` and `today`
///
/// A joining date in the future counts as zero years.
pub fn tenure_years(joining_date: NaiveDate, today: NaiveDate) -> u32 {
    today.years_since(joining_date).unwrap_or(0)
}
