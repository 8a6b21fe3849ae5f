use super::types::{IncomeBreakdown, InputProfile};

pub const HIGH_INCOME_THRESHOLD: f64 = 120_000.0;
pub const HIGH_INCOME_TAX_RATE: f64 = 0.30;
pub const STANDARD_TAX_RATE: f64 = 0.22;

pub fn effective_tax_rate(annual_income: f64) -> f64 {
    if annual_income > HIGH_INCOME_THRESHOLD {
        HIGH_INCOME_TAX_RATE
    } else {
        STANDARD_TAX_RATE
    }
}

pub fn compute_income_breakdown(profile: &InputProfile) -> IncomeBreakdown {
    let monthly_income = profile.income / 12.0;
    let taxes = monthly_income * effective_tax_rate(profile.income);
    let savings = profile.monthly_investment;
    let essential = profile.monthly_expenses;
    let discretionary = (monthly_income - taxes - savings - essential).max(0.0);

    IncomeBreakdown {
        essential,
        discretionary,
        savings,
        taxes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::{prop_assert, proptest};

    const EPS: f64 = 1e-6;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPS,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn reference_profile_breakdown() {
        let b = compute_income_breakdown(&InputProfile::default());
        assert_approx(b.taxes, 1_925.0);
        assert_approx(b.savings, 1_500.0);
        assert_approx(b.essential, 4_200.0);
        assert_approx(b.discretionary, 8_750.0 - 1_925.0 - 1_500.0 - 4_200.0);
    }

    #[test]
    fn tax_bracket_switches_strictly_above_threshold() {
        assert_eq!(effective_tax_rate(120_000.0), STANDARD_TAX_RATE);
        assert_eq!(effective_tax_rate(120_000.01), HIGH_INCOME_TAX_RATE);

        let mut p = InputProfile::default();
        p.income = 240_000.0;
        assert_approx(compute_income_breakdown(&p).taxes, 6_000.0);
    }

    #[test]
    fn overcommitted_budget_reports_zero_discretionary() {
        let mut p = InputProfile::default();
        p.income = 36_000.0;
        p.monthly_expenses = 3_500.0;
        let b = compute_income_breakdown(&p);
        assert_eq!(b.discretionary, 0.0);
        assert!(b.essential + b.savings + b.taxes > p.income / 12.0);
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(64))]

        #[test]
        fn prop_discretionary_is_never_negative(
            income in 0.0f64..1_000_000.0,
            investment in 0.0f64..50_000.0,
            expenses in 0.0f64..50_000.0
        ) {
            let mut p = InputProfile::default();
            p.income = income;
            p.monthly_investment = investment;
            p.monthly_expenses = expenses;
            prop_assert!(compute_income_breakdown(&p).discretionary >= 0.0);
        }
    }
}
