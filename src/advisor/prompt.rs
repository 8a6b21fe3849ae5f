use std::fmt::Write as _;

use serde::Serialize;

use crate::core::{AnalysisResult, InputProfile};

#[derive(Serialize)]
struct NarrativeContext<'a> {
    profile: &'a InputProfile,
    results: &'a AnalysisResult,
}

const TASKS: [&str; 4] = [
    "HEALTH-WEALTH SWAP: pick one habit change and estimate both its lifespan gain and its \
     financial return.",
    "BIOMETRIC INTERVENTION: target the most concerning vital sign or genetic marker.",
    "ENVIRONMENTAL ADAPTATION: suggest a change based on location, climate risk or \
     occupational hazard.",
    "PORTFOLIO CALIBRATION: adjust the financial strategy to the projected lifespan window.",
];

pub fn build_prompt(profile: &InputProfile, results: &AnalysisResult) -> String {
    let context = NarrativeContext { profile, results };
    let context_json = serde_json::to_string_pretty(&context).unwrap_or_else(|_| "{}".to_string());
    let (dominant_risk, dominant_score) = results.health_risk_breakdown.dominant();

    let mut prompt = String::new();
    prompt.push_str(
        "You are an actuarial consultant and longevity scientist. Give four specific, \
         actionable and quantified recommendations for the person described below.\n\n",
    );

    prompt.push_str("KEY RESULTS:\n");
    let _ = writeln!(
        prompt,
        "- Estimated lifespan: {:.1} years (shift {:+.1} years)",
        results.baseline_longevity, results.estimated_longevity_shift
    );
    let _ = writeln!(
        prompt,
        "- Wealth at retirement (age {}): ${:.0}",
        profile.retirement_age_goal, results.wealth_at_retirement
    );
    if results.financial_runway_age.is_finite() {
        let _ = writeln!(
            prompt,
            "- Funds run out at age {:.1}",
            results.financial_runway_age
        );
    } else {
        prompt.push_str("- Funds never run out under current expenses\n");
    }
    if results.has_longevity_gap() {
        let _ = writeln!(
            prompt,
            "- Savings shortfall over the expected lifespan: ${:.0}",
            results.savings_shortfall
        );
    }
    let _ = writeln!(prompt, "- Insurance gap: ${:.0}", results.insurance_gap);
    let _ = writeln!(
        prompt,
        "- Survival to retirement: {:.0}%",
        results.probability_of_survival_to_retirement * 100.0
    );
    let _ = writeln!(
        prompt,
        "- Highest risk lens: {dominant_risk} ({dominant_score:.0}/100)"
    );

    prompt.push_str("\nTASKS:\n");
    for (index, task) in TASKS.iter().enumerate() {
        let _ = writeln!(prompt, "{}. {}", index + 1, task);
    }

    prompt.push_str(
        "\nAnswer with a JSON array only. Each element must have the fields \"category\" \
         (one of \"Health\", \"Wealth\", \"Environment\"), \"title\", \"description\" and \
         \"impact\" (a quantitative estimate such as \"+2.4 Years\" or \"+$120k Portfolio\").\n",
    );

    prompt.push_str("\nPROFILE AND RESULTS:\n");
    prompt.push_str(&context_json);
    prompt.push('\n');
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::run_full_analysis;

    #[test]
    fn prompt_embeds_serialized_profile_and_results() {
        let profile = InputProfile::default();
        let results = run_full_analysis(&profile);
        let prompt = build_prompt(&profile, &results);

        assert!(prompt.contains("\"profile\""));
        assert!(prompt.contains("\"results\""));
        assert!(prompt.contains("\"estimatedLongevityShift\""));
        assert!(prompt.contains("\"dietaryPattern\": \"Mediterranean\""));
        assert!(prompt.contains("Highest risk lens: environmental (48/100)"));
        assert!(prompt.contains("4. PORTFOLIO CALIBRATION"));
        assert!(prompt.contains("- Savings shortfall over the expected lifespan: $"));
    }

    #[test]
    fn unlimited_runway_is_described_in_words() {
        let mut profile = InputProfile::default();
        profile.monthly_expenses = 0.0;
        let results = run_full_analysis(&profile);
        let prompt = build_prompt(&profile, &results);
        assert!(prompt.contains("Funds never run out"));
        assert!(!prompt.contains("Savings shortfall"));
        assert!(prompt.contains("\"financialRunwayAge\": null"));
    }
}
