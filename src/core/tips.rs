use serde::Serialize;

use super::types::{AnalysisResult, DietaryPattern, InputProfile};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub enum TipCategory {
    Health,
    Wealth,
    Environment,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub enum TipPriority {
    High,
    Medium,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tip {
    pub category: TipCategory,
    pub priority: TipPriority,
    pub title: String,
    pub text: String,
}

impl Tip {
    fn new(category: TipCategory, priority: TipPriority, title: &str, text: String) -> Self {
        Self {
            category,
            priority,
            title: title.to_string(),
            text,
        }
    }
}

const LOW_VO2_MAX: f64 = 35.0;
const POOR_SLEEP_QUALITY: f64 = 6.0;
const LARGE_INSURANCE_GAP: f64 = 500_000.0;
const TARGET_SAVINGS_RATE: f64 = 0.15;
const LARGE_SHORTFALL: f64 = 100_000.0;
const POOR_AIR_QUALITY: f64 = 3.0;

pub fn improvement_tips(profile: &InputProfile, results: &AnalysisResult) -> Vec<Tip> {
    use TipCategory::{Environment, Health, Wealth};
    use TipPriority::{High, Medium};

    let mut tips = Vec::new();

    if profile.smoker {
        tips.push(Tip::new(
            Health,
            High,
            "Cessation Multiplier",
            "Stopping smoking is the largest single lever in this model and can restore up to \
             10 years of projected lifespan."
                .to_string(),
        ));
    }

    if profile.vo2_max < LOW_VO2_MAX && profile.age < 50 {
        tips.push(Tip::new(
            Health,
            High,
            "Cardiovascular Reserve",
            "VO2 max sits below the range associated with longevity. Progressive aerobic \
             training is recommended."
                .to_string(),
        ));
    }

    if profile.sleep_quality < POOR_SLEEP_QUALITY {
        tips.push(Tip::new(
            Health,
            Medium,
            "Neural Restoration",
            "Poor sleep quality erodes cognitive reserve. A screen-free hour before bed is a \
             low-cost first step."
                .to_string(),
        ));
    }

    if profile.dietary_pattern == DietaryPattern::Western {
        tips.push(Tip::new(
            Health,
            High,
            "Metabolic Pivot",
            "Moving from a Western pattern towards Mediterranean or DASH eating lowers \
             systemic inflammation."
                .to_string(),
        ));
    }

    if results.insurance_gap > LARGE_INSURANCE_GAP {
        tips.push(Tip::new(
            Wealth,
            High,
            "Catastrophic Risk Gap",
            format!(
                "A coverage gap of ${:.0}k leaves dependants exposed if income stops.",
                results.insurance_gap / 1_000.0
            ),
        ));
    }

    if profile.income > 0.0 && profile.age < 55 {
        let savings_rate = profile.monthly_investment * 12.0 / profile.income;
        if savings_rate < TARGET_SAVINGS_RATE {
            tips.push(Tip::new(
                Wealth,
                Medium,
                "Saving Rate Calibration",
                format!(
                    "Saving {:.1}% of income is below the 15% benchmark for long-term security.",
                    savings_rate * 100.0
                ),
            ));
        }
    }

    if results.savings_shortfall > LARGE_SHORTFALL {
        tips.push(Tip::new(
            Wealth,
            High,
            "Longevity Funding Shortfall",
            "Projected lifespan runs well past the point where funds deplete. A phased \
             retirement would narrow the gap."
                .to_string(),
        ));
    }

    if profile.air_quality_rating < POOR_AIR_QUALITY {
        tips.push(Tip::new(
            Environment,
            Medium,
            "Particulate Mitigation",
            "Poor local air quality adds respiratory stress. Home HEPA filtration can reduce \
             inflammatory load."
                .to_string(),
        ));
    }

    tips
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine::run_full_analysis;

    fn tips_for(profile: &InputProfile) -> Vec<Tip> {
        improvement_tips(profile, &run_full_analysis(profile))
    }

    fn titles(tips: &[Tip]) -> Vec<&str> {
        tips.iter().map(|tip| tip.title.as_str()).collect()
    }

    #[test]
    fn reference_profile_flags_wealth_gaps_only() {
        let tips = tips_for(&InputProfile::default());
        assert_eq!(
            titles(&tips),
            vec!["Catastrophic Risk Gap", "Longevity Funding Shortfall"]
        );
        assert_eq!(tips[0].text, "A coverage gap of $710k leaves dependants exposed if income stops.");
    }

    #[test]
    fn unhealthy_profile_collects_health_tips_in_order() {
        let mut p = InputProfile::default();
        p.smoker = true;
        p.vo2_max = 30.0;
        p.sleep_quality = 4.0;
        p.dietary_pattern = DietaryPattern::Western;
        p.air_quality_rating = 2.0;
        let tips = tips_for(&p);
        assert_eq!(
            titles(&tips),
            vec![
                "Cessation Multiplier",
                "Cardiovascular Reserve",
                "Neural Restoration",
                "Metabolic Pivot",
                "Catastrophic Risk Gap",
                "Particulate Mitigation",
            ]
        );
        assert_eq!(tips.last().map(|tip| tip.category), Some(TipCategory::Environment));
    }

    #[test]
    fn low_savings_rate_is_quoted_with_one_decimal() {
        let mut p = InputProfile::default();
        p.monthly_investment = 500.0;
        let tips = tips_for(&p);
        let tip = tips
            .iter()
            .find(|tip| tip.title == "Saving Rate Calibration")
            .expect("savings tip");
        assert_eq!(tip.priority, TipPriority::Medium);
        assert!(tip.text.starts_with("Saving 5.7% of income"));
    }

    #[test]
    fn zero_income_skips_savings_rate_rule() {
        let mut p = InputProfile::default();
        p.income = 0.0;
        assert!(!titles(&tips_for(&p)).contains(&"Saving Rate Calibration"));
    }

    #[test]
    fn large_shortfall_triggers_funding_tip() {
        let mut p = InputProfile::default();
        p.savings = 0.0;
        p.monthly_investment = 200.0;
        let results = run_full_analysis(&p);
        assert!(results.savings_shortfall > LARGE_SHORTFALL);
        assert!(titles(&improvement_tips(&p, &results)).contains(&"Longevity Funding Shortfall"));
    }
}
