use super::tables::{baseline_longevity, diet_shift, education_shift};
use super::types::{DrugUse, InputProfile};

pub const MIN_LONGEVITY_SHIFT: f64 = -35.0;
pub const MAX_LONGEVITY_SHIFT: f64 = 25.0;

const SMOKING_PENALTY: f64 = 10.0;
const ALCOHOL_WEEKLY_LIMIT: f64 = 14.0;

pub fn compute_longevity_shift(profile: &InputProfile) -> f64 {
    let shift = vitals_terms(profile)
        + genetic_terms(profile)
        + behavioral_terms(profile)
        + utilization_terms(profile)
        + macro_terms(profile)
        + lifestyle_terms(profile)
        + medical_terms(profile)
        + environment_terms(profile)
        + education_shift(profile.education_level);

    shift.clamp(MIN_LONGEVITY_SHIFT, MAX_LONGEVITY_SHIFT)
}

fn vitals_terms(p: &InputProfile) -> f64 {
    let mut shift = 0.0;
    if p.bmi < 18.5 || p.bmi > 30.0 {
        shift -= 2.0;
    }
    if p.blood_pressure_sys > 140.0 || p.blood_pressure_dia > 90.0 {
        shift -= 3.5;
    }
    if p.blood_sugar_level > 110.0 {
        shift -= 2.5;
    }
    shift += if p.vo2_max > 40.0 { 2.5 } else { -1.0 };
    shift += (p.daily_steps / 5_000.0) * 0.8;
    shift += (p.sleep_quality / 10.0) * 1.5;
    shift += p.diet_score - 6.0;
    shift
}

fn genetic_terms(p: &InputProfile) -> f64 {
    let mut shift = -p.epigenetic_age_delta * 0.6 + (p.telomere_length_scale - 5.0) * 0.5;
    if p.has_genetic_mutations {
        shift -= 4.5;
    }
    shift
}

fn behavioral_terms(p: &InputProfile) -> f64 {
    (p.social_connection_level - 5.0) * 1.5
        - (10.0 - p.mental_health_status) * 0.6
        - (p.risk_taking_behavior / 10.0) * 2.0
}

fn utilization_terms(p: &InputProfile) -> f64 {
    let checkups = if p.checkup_frequency > 0.0 { 1.0 } else { -1.0 };
    checkups + (p.medication_adherence / 10.0) * 2.0 + (p.preventive_care_access - 3.0)
}

fn macro_terms(p: &InputProfile) -> f64 {
    (p.regional_mortality_trend - 3.0) * 0.8 - (p.climate_change_impact_risk - 1.0) * 0.5
        + (p.technological_access - 3.0) * 0.6
}

fn lifestyle_terms(p: &InputProfile) -> f64 {
    let mut shift = diet_shift(p.dietary_pattern);
    if p.religious_spiritual_practice {
        shift += 1.5;
    }
    shift += (p.exercise_hours / 3.0) * 1.5;
    if p.smoker {
        shift -= SMOKING_PENALTY;
    }
    if p.alcohol_units > ALCOHOL_WEEKLY_LIMIT {
        shift -= (p.alcohol_units - ALCOHOL_WEEKLY_LIMIT) * 0.2;
    }
    if p.recreational_drug_use == DrugUse::Regular {
        shift -= 6.0;
    }
    shift
}

fn medical_terms(p: &InputProfile) -> f64 {
    let chronic = if p.has_chronic_disease { -5.0 } else { 0.0 };
    chronic + (p.family_longevity - baseline_longevity(p.gender)) * 0.35
}

fn environment_terms(p: &InputProfile) -> f64 {
    (p.air_quality_rating - 3.0) * 0.6
        - (p.pollution_exposure - 1.0) * 0.5
        - (p.stress_level / 10.0) * 2.5
}
