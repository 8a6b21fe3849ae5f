use serde::{Deserialize, Serialize};

use super::engine::run_full_analysis;
use super::types::{AnalysisResult, InputProfile};

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScenarioAdjustments {
    pub exercise_hours: Option<f64>,
    pub diet_score: Option<f64>,
    pub monthly_investment: Option<f64>,
    pub retirement_age_goal: Option<u32>,
}

impl ScenarioAdjustments {
    pub fn apply(&self, profile: &InputProfile) -> InputProfile {
        let mut adjusted = profile.clone();
        if let Some(v) = self.exercise_hours {
            adjusted.exercise_hours = v;
        }
        if let Some(v) = self.diet_score {
            adjusted.diet_score = v;
        }
        if let Some(v) = self.monthly_investment {
            adjusted.monthly_investment = v;
        }
        if let Some(v) = self.retirement_age_goal {
            adjusted.retirement_age_goal = v;
        }
        adjusted
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioComparison {
    pub current: AnalysisResult,
    pub simulated: AnalysisResult,
    pub simulated_profile: InputProfile,
    pub longevity_delta: f64,
    pub wealth_delta: f64,
}

pub fn compare_scenario(profile: &InputProfile, adjustments: &ScenarioAdjustments) -> ScenarioComparison {
    let simulated_profile = adjustments.apply(profile);
    let current = run_full_analysis(profile);
    let simulated = run_full_analysis(&simulated_profile);

    ScenarioComparison {
        longevity_delta: simulated.baseline_longevity - current.baseline_longevity,
        wealth_delta: simulated.wealth_at_retirement - current.wealth_at_retirement,
        current,
        simulated,
        simulated_profile,
    }
}
