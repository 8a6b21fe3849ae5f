use super::budget::compute_income_breakdown;
use super::longevity::{MIN_LONGEVITY_SHIFT, compute_longevity_shift};
use super::risk::compute_health_risks;
use super::tables::baseline_longevity;
use super::types::{AnalysisResult, InputProfile};
use super::wealth::compute_wealth;

pub const MIN_SURVIVAL_PROBABILITY: f64 = 0.4;
const HEALTH_RISK_SCALE: f64 = 1.4;

pub fn run_full_analysis(profile: &InputProfile) -> AnalysisResult {
    let shift = compute_longevity_shift(profile);
    let expected_lifespan = baseline_longevity(profile.gender) + shift;
    let wealth = compute_wealth(profile);

    AnalysisResult {
        estimated_longevity_shift: shift,
        baseline_longevity: expected_lifespan,
        financial_runway_age: wealth.runway_age,
        wealth_at_retirement: wealth.retirement_wealth,
        savings_shortfall: savings_shortfall(
            expected_lifespan,
            wealth.runway_age,
            profile.monthly_expenses,
        ),
        health_risk_score: health_risk_score(shift),
        insurance_gap: wealth.insurance_gap,
        probability_of_survival_to_retirement: survival_probability(profile.age, shift),
        income_breakdown: compute_income_breakdown(profile),
        health_risk_breakdown: compute_health_risks(profile),
    }
}

pub fn savings_shortfall(expected_lifespan: f64, runway_age: f64, monthly_expenses: f64) -> f64 {
    if !runway_age.is_finite() {
        return 0.0;
    }
    ((expected_lifespan - runway_age) * monthly_expenses * 12.0).max(0.0)
}

pub fn health_risk_score(shift: f64) -> f64 {
    (100.0 - (shift - MIN_LONGEVITY_SHIFT) * HEALTH_RISK_SCALE).max(0.0)
}

pub fn survival_probability(age: u32, shift: f64) -> f64 {
    (1.0 - age as f64 / 115.0 + shift / 110.0).max(MIN_SURVIVAL_PROBABILITY)
}
