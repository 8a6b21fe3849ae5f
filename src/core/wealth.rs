use super::tables::INFLATION_RATE;
use super::types::{InputProfile, WealthProjection};

pub const ACCUMULATION_BASE_RETURN: f64 = 0.03;
pub const ACCUMULATION_RISK_SCALE: f64 = 0.08;
pub const DRAWDOWN_EXPENSE_RATIO: f64 = 0.90;
pub const INSURANCE_INCOME_MULTIPLE: f64 = 12.0;

pub const UNLIMITED_RUNWAY: f64 = f64::INFINITY;

pub fn years_to_retirement(profile: &InputProfile) -> u32 {
    profile.retirement_age_goal.saturating_sub(profile.age)
}

pub fn accumulation_return(risk_tolerance: f64) -> f64 {
    ACCUMULATION_BASE_RETURN + (risk_tolerance / 10.0) * ACCUMULATION_RISK_SCALE
}

pub fn real_monthly_rate(annual_return: f64) -> f64 {
    ((1.0 + annual_return) / (1.0 + INFLATION_RATE) - 1.0) / 12.0
}

// Single power term, so long horizons carry no per-month rounding error.
pub fn accumulate(principal: f64, monthly_contribution: f64, monthly_rate: f64, months: f64) -> f64 {
    if monthly_rate == 0.0 {
        return principal + monthly_contribution * months;
    }
    let growth = (1.0 + monthly_rate).powf(months);
    principal * growth + monthly_contribution * ((growth - 1.0) / monthly_rate)
}

pub fn runway_age(retirement_age: u32, retirement_wealth: f64, monthly_expenses: f64) -> f64 {
    let annual_burn = monthly_expenses * DRAWDOWN_EXPENSE_RATIO * 12.0;
    if annual_burn <= 0.0 {
        return UNLIMITED_RUNWAY;
    }
    retirement_age as f64 + retirement_wealth / annual_burn
}

pub fn insurance_gap(profile: &InputProfile) -> f64 {
    (profile.income * INSURANCE_INCOME_MULTIPLE - profile.insurance_coverage.total()).max(0.0)
}

pub fn compute_wealth(profile: &InputProfile) -> WealthProjection {
    let months = f64::from(years_to_retirement(profile)) * 12.0;
    let monthly_rate = real_monthly_rate(accumulation_return(profile.risk_tolerance));
    let wealth = accumulate(
        profile.savings,
        profile.monthly_investment,
        monthly_rate,
        months,
    );
    let runway = runway_age(profile.retirement_age_goal, wealth, profile.monthly_expenses);

    WealthProjection {
        retirement_wealth: wealth.round(),
        runway_age: round_to_tenth(runway),
        insurance_gap: insurance_gap(profile),
    }
}

fn round_to_tenth(value: f64) -> f64 {
    if value.is_finite() {
        (value * 10.0).round() / 10.0
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{CoverageKind, InsuranceCoverage};
    use proptest::prelude::{prop_assert, proptest};

    const EPS: f64 = 1e-6;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPS,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn risk_tolerance_maps_linearly_onto_return() {
        assert_approx(accumulation_return(0.0), 0.03);
        assert_approx(accumulation_return(6.0), 0.078);
        assert_approx(accumulation_return(10.0), 0.11);
    }

    #[test]
    fn zero_rate_falls_back_to_linear_accumulation() {
        let value = accumulate(10_000.0, 500.0, 0.0, 120.0);
        assert!(value.is_finite());
        assert_approx(value, 70_000.0);
    }

    #[test]
    fn accumulation_matches_explicit_monthly_walk() {
        let rate = real_monthly_rate(accumulation_return(6.0));
        let mut walked = 82_000.0;
        for _ in 0..24 {
            walked = walked * (1.0 + rate) + 1_500.0;
        }
        assert!((accumulate(82_000.0, 1_500.0, rate, 24.0) - walked).abs() < 1e-6);
    }

    #[test]
    fn reference_profile_projection() {
        let p = InputProfile::default();
        let projection = compute_wealth(&p);
        let rate = real_monthly_rate(0.078);
        let expected = accumulate(82_000.0, 1_500.0, rate, 27.0 * 12.0);
        assert_eq!(projection.retirement_wealth, expected.round());
        assert!(projection.retirement_wealth > 82_000.0 + 1_500.0 * 324.0);

        let expected_runway = 65.0 + expected / (4_200.0 * 0.9 * 12.0);
        assert!((projection.runway_age - expected_runway).abs() <= 0.05 + 1e-9);
        assert_approx(projection.insurance_gap, 105_000.0 * 12.0 - 550_000.0);
    }

    #[test]
    fn retirement_goal_already_passed_keeps_current_savings() {
        let mut p = InputProfile::default();
        p.age = 70;
        p.retirement_age_goal = 65;
        assert_eq!(years_to_retirement(&p), 0);
        let projection = compute_wealth(&p);
        assert_eq!(projection.retirement_wealth, 82_000.0);
    }

    #[test]
    fn zero_income_and_zero_coverage_leaves_no_gap() {
        let mut p = InputProfile::default();
        p.income = 0.0;
        p.insurance_coverage = InsuranceCoverage::default();
        assert_eq!(compute_wealth(&p).insurance_gap, 0.0);
    }

    #[test]
    fn coverage_beyond_target_is_not_a_negative_gap() {
        let mut p = InputProfile::default();
        p.set_coverage(CoverageKind::LongTermCare, 2_000_000.0);
        assert_eq!(insurance_gap(&p), 0.0);
    }

    #[test]
    fn zero_expenses_yield_unlimited_runway() {
        let mut p = InputProfile::default();
        p.monthly_expenses = 0.0;
        let projection = compute_wealth(&p);
        assert_eq!(projection.runway_age, UNLIMITED_RUNWAY);
        assert!(projection.retirement_wealth.is_finite());

        p.savings = 0.0;
        p.monthly_investment = 0.0;
        assert_eq!(compute_wealth(&p).runway_age, UNLIMITED_RUNWAY);
    }

    #[test]
    fn enormous_retirement_goal_saturates_instead_of_overflowing() {
        let mut p = InputProfile::default();
        p.retirement_age_goal = 400_000_000;
        let projection = compute_wealth(&p);
        assert!(!projection.retirement_wealth.is_nan());
        assert!(projection.retirement_wealth > 82_000.0);
        assert!(projection.runway_age >= 400_000_000.0);
    }

    #[test]
    fn runway_is_rounded_to_one_decimal() {
        let runway = round_to_tenth(runway_age(65, 100_000.0, 3_000.0));
        assert_approx(runway, 68.1);
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(48))]

        #[test]
        fn prop_projection_is_finite_and_non_negative(
            age in 18u32..90,
            goal in 30u32..90,
            savings in 0.0f64..5_000_000.0,
            investment in 0.0f64..20_000.0,
            expenses in 1.0f64..30_000.0,
            risk in 0.0f64..10.0
        ) {
            let mut p = InputProfile::default();
            p.age = age;
            p.retirement_age_goal = goal;
            p.savings = savings;
            p.monthly_investment = investment;
            p.monthly_expenses = expenses;
            p.risk_tolerance = risk;

            let projection = compute_wealth(&p);
            prop_assert!(projection.retirement_wealth.is_finite());
            prop_assert!(projection.retirement_wealth >= 0.0);
            prop_assert!(projection.runway_age >= goal as f64);
            prop_assert!(projection.insurance_gap >= 0.0);
        }
    }
}
