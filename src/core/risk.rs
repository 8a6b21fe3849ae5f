use super::types::{DietaryPattern, HealthRiskBreakdown, InputProfile};

const MAX_RISK: f64 = 100.0;

// Each lens is scored on its own; none of them feed the longevity shift.
pub fn compute_health_risks(profile: &InputProfile) -> HealthRiskBreakdown {
    HealthRiskBreakdown {
        cardiovascular: bounded(cardiovascular_risk(profile)),
        metabolic: bounded(metabolic_risk(profile)),
        psychological: bounded(psychological_risk(profile)),
        environmental: bounded(environmental_risk(profile)),
    }
}

fn bounded(score: f64) -> f64 {
    score.clamp(0.0, MAX_RISK)
}

fn cardiovascular_risk(p: &InputProfile) -> f64 {
    let pressure = if p.blood_pressure_sys > 140.0 { 30.0 } else { 5.0 };
    let smoking = if p.smoker { 40.0 } else { 0.0 };
    let cholesterol = if p.cholesterol_level > 240.0 { 25.0 } else { 0.0 };
    pressure + smoking + cholesterol
}

fn metabolic_risk(p: &InputProfile) -> f64 {
    let weight = if p.bmi > 30.0 { 30.0 } else { 5.0 };
    let glucose = if p.blood_sugar_level > 125.0 { 45.0 } else { 5.0 };
    let diet = if p.dietary_pattern == DietaryPattern::Western {
        20.0
    } else {
        0.0
    };
    weight + glucose + diet
}

fn psychological_risk(p: &InputProfile) -> f64 {
    (10.0 - p.mental_health_status) * 10.0 + (10.0 - p.social_connection_level) * 6.0
}

fn environmental_risk(p: &InputProfile) -> f64 {
    (6.0 - p.air_quality_rating) * 12.0 + p.climate_change_impact_risk * 12.0
}
