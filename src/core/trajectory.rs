use super::tables::INFLATION_RATE;
use super::types::{AnalysisResult, InputProfile, TrajectoryPoint};

pub const TRAJECTORY_BASE_RETURN: f64 = 0.03;
// Differs from the accumulation formula's 0.08 scale; both are kept as-is.
pub const TRAJECTORY_RISK_SCALE: f64 = 0.07;
pub const RETIREMENT_EXPENSE_RATIO: f64 = 0.85;
pub const MIN_PROJECTION_END_AGE: f64 = 90.0;
pub const PROJECTION_TAIL_YEARS: f64 = 10.0;
pub const MAX_TRAJECTORY_AGE: u32 = 105;

pub fn trajectory_return(risk_tolerance: f64) -> f64 {
    TRAJECTORY_BASE_RETURN + (risk_tolerance / 10.0) * TRAJECTORY_RISK_SCALE
}

pub fn trajectory_end_age(profile: &InputProfile, results: &AnalysisResult) -> u32 {
    let furthest = results
        .baseline_longevity
        .max(results.financial_runway_age)
        .max(MIN_PROJECTION_END_AGE);
    let end = furthest + PROJECTION_TAIL_YEARS;
    let capped = if end >= MAX_TRAJECTORY_AGE as f64 {
        MAX_TRAJECTORY_AGE
    } else {
        end.floor() as u32
    };
    capped.max(profile.age)
}

pub fn project_wealth_trajectory(
    profile: &InputProfile,
    results: &AnalysisResult,
) -> Vec<TrajectoryPoint> {
    let end_age = trajectory_end_age(profile, results);
    let growth = 1.0 + trajectory_return(profile.risk_tolerance);
    let annual_investment = profile.monthly_investment * 12.0;
    let base_burn = profile.monthly_expenses * RETIREMENT_EXPENSE_RATIO * 12.0;

    let mut wealth = profile.savings;
    let mut points = Vec::with_capacity((end_age - profile.age + 1) as usize);
    for age in profile.age..=end_age {
        let years_elapsed = (age - profile.age) as i32;
        wealth = if age < profile.retirement_age_goal {
            wealth * growth + annual_investment
        } else {
            wealth * growth - base_burn * (1.0 + INFLATION_RATE).powi(years_elapsed)
        };
        wealth = wealth.max(0.0);
        points.push(TrajectoryPoint {
            age,
            wealth: wealth.round(),
        });
    }
    points
}
