use std::fmt::Write as _;

use crate::core::ScenarioComparison;

const TITLE: &str = "HEALTH & WEALTH IMPACT REPORT";

pub fn render_impact_report(comparison: &ScenarioComparison) -> String {
    let current = &comparison.current;
    let simulated = &comparison.simulated;
    let adjusted = &comparison.simulated_profile;

    let mut out = String::new();
    let _ = writeln!(out, "{TITLE}");
    let _ = writeln!(out, "{}", "-".repeat(TITLE.len() + 10));
    let _ = writeln!(
        out,
        "Current Est. Lifespan: {:.1} years",
        current.baseline_longevity
    );
    let _ = writeln!(
        out,
        "Simulated Est. Lifespan: {:.1} years",
        simulated.baseline_longevity
    );
    let _ = writeln!(
        out,
        "Longevity Change: {}{:.1} years",
        sign(comparison.longevity_delta),
        comparison.longevity_delta
    );
    out.push('\n');
    let _ = writeln!(
        out,
        "Current Wealth at Retirement: ${}",
        group_thousands(current.wealth_at_retirement)
    );
    let _ = writeln!(
        out,
        "Simulated Wealth at Retirement: ${}",
        group_thousands(simulated.wealth_at_retirement)
    );
    let _ = writeln!(
        out,
        "Wealth Change: {}${}",
        if comparison.wealth_delta < 0.0 { "-" } else { "+" },
        group_thousands(comparison.wealth_delta.abs())
    );
    out.push('\n');
    out.push_str("KEY SIMULATION ADJUSTMENTS:\n");
    let _ = writeln!(out, "- Weekly Exercise: {} hrs", adjusted.exercise_hours);
    let _ = writeln!(out, "- Sleep Quality: {}/10", adjusted.sleep_quality);
    let _ = writeln!(
        out,
        "- Monthly Investment: ${}",
        group_thousands(adjusted.monthly_investment)
    );
    let _ = writeln!(out, "- Retirement Age: {}", adjusted.retirement_age_goal);
    out
}

// Negative values already carry their own sign when formatted.
fn sign(value: f64) -> &'static str {
    if value >= 0.0 { "+" } else { "" }
}

/// Whole-unit amount with comma thousands separators, e.g. `1,384,079`.
pub fn group_thousands(amount: f64) -> String {
    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0.0 {
        grouped.insert(0, '-');
    }
    grouped
}
