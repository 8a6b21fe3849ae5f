use serde::{Deserialize, Serialize, Serializer};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Deserialize, Serialize)]
pub enum Gender {
    Male,
    Female,
    #[serde(rename = "Non-binary", alias = "NonBinary", alias = "non-binary")]
    NonBinary,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum Ethnicity {
    White,
    Black,
    Asian,
    Hispanic,
    Other,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Deserialize, Serialize)]
pub enum Education {
    #[serde(rename = "High School", alias = "HighSchool", alias = "high-school")]
    HighSchool,
    Bachelors,
    Masters,
    #[serde(rename = "PhD/MD", alias = "PhD", alias = "phd")]
    PhD,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum EmploymentType {
    #[serde(rename = "Full-time", alias = "FullTime")]
    FullTime,
    #[serde(rename = "Part-time", alias = "PartTime")]
    PartTime,
    #[serde(rename = "Self-employed", alias = "SelfEmployed")]
    SelfEmployed,
    Unemployed,
    Retired,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Deserialize, Serialize)]
pub enum DietaryPattern {
    Mediterranean,
    #[serde(rename = "DASH", alias = "Dash")]
    Dash,
    Vegan,
    Vegetarian,
    Pescatarian,
    Keto,
    Paleo,
    Western,
    #[serde(rename = "Low-carb", alias = "LowCarb")]
    LowCarb,
    Flexitarian,
    Carnivore,
    Whole30,
    Other,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum DrugUse {
    None,
    Occasional,
    Regular,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum CoverageKind {
    Life,
    Health,
    Disability,
    CriticalIllness,
    LongTermCare,
}

impl CoverageKind {
    pub const ALL: [CoverageKind; 5] = [
        CoverageKind::Life,
        CoverageKind::Health,
        CoverageKind::Disability,
        CoverageKind::CriticalIllness,
        CoverageKind::LongTermCare,
    ];
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InsuranceCoverage {
    pub life: f64,
    pub health: f64,
    pub disability: f64,
    pub critical_illness: f64,
    pub long_term_care: f64,
}

impl InsuranceCoverage {
    pub fn get(&self, kind: CoverageKind) -> f64 {
        match kind {
            CoverageKind::Life => self.life,
            CoverageKind::Health => self.health,
            CoverageKind::Disability => self.disability,
            CoverageKind::CriticalIllness => self.critical_illness,
            CoverageKind::LongTermCare => self.long_term_care,
        }
    }

    pub fn set(&mut self, kind: CoverageKind, amount: f64) {
        let slot = match kind {
            CoverageKind::Life => &mut self.life,
            CoverageKind::Health => &mut self.health,
            CoverageKind::Disability => &mut self.disability,
            CoverageKind::CriticalIllness => &mut self.critical_illness,
            CoverageKind::LongTermCare => &mut self.long_term_care,
        };
        *slot = amount;
    }

    pub fn total(&self) -> f64 {
        CoverageKind::ALL.iter().map(|kind| self.get(*kind)).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InputProfile {
    pub age: u32,
    pub gender: Gender,
    pub ethnicity: Ethnicity,
    pub marital_status: String,
    pub location: String,

    pub dietary_pattern: DietaryPattern,
    pub diet_score: f64,
    pub exercise_hours: f64,
    pub sleep_hours: f64,
    pub sleep_quality: f64,
    pub smoker: bool,
    pub alcohol_units: f64,
    pub recreational_drug_use: DrugUse,
    pub religious_spiritual_practice: bool,

    pub bmi: f64,
    pub waist_to_hip_ratio: f64,
    pub blood_pressure_sys: f64,
    pub blood_pressure_dia: f64,
    pub cholesterol_level: f64,
    pub blood_sugar_level: f64,
    pub resting_heart_rate: f64,
    pub vo2_max: f64,
    pub daily_steps: f64,
    pub heart_rate_variability: f64,

    pub has_chronic_disease: bool,
    pub genetic_predisposition: f64,
    pub family_longevity: f64,
    pub epigenetic_age_delta: f64,
    pub telomere_length_scale: f64,
    pub has_genetic_mutations: bool,

    pub mental_health_status: f64,
    pub cognitive_function_score: f64,
    pub social_connection_level: f64,
    pub risk_taking_behavior: f64,

    pub air_quality_rating: f64,
    pub pollution_exposure: f64,
    pub healthcare_access: f64,
    pub occupational_hazard: f64,
    pub stress_level: f64,

    pub checkup_frequency: f64,
    pub vaccination_history_scale: f64,
    pub medication_adherence: f64,
    pub preventive_care_access: f64,

    pub regional_mortality_trend: f64,
    pub climate_change_impact_risk: f64,
    pub technological_access: f64,

    pub education_level: Education,
    pub employment_type: EmploymentType,

    pub income: f64,
    pub savings: f64,
    pub monthly_investment: f64,
    pub monthly_expenses: f64,
    pub retirement_age_goal: u32,
    pub risk_tolerance: f64,
    pub insurance_coverage: InsuranceCoverage,
}

impl InputProfile {
    pub fn set_coverage(&mut self, kind: CoverageKind, amount: f64) {
        self.insurance_coverage.set(kind, amount);
    }
}

impl Default for InputProfile {
    fn default() -> Self {
        Self {
            age: 38,
            gender: Gender::Female,
            ethnicity: Ethnicity::Asian,
            marital_status: "Married".to_string(),
            location: "North America (USA/Canada)".to_string(),

            dietary_pattern: DietaryPattern::Mediterranean,
            diet_score: 9.0,
            exercise_hours: 4.0,
            sleep_hours: 7.5,
            sleep_quality: 8.0,
            smoker: false,
            alcohol_units: 3.0,
            recreational_drug_use: DrugUse::None,
            religious_spiritual_practice: true,

            bmi: 22.5,
            waist_to_hip_ratio: 0.82,
            blood_pressure_sys: 118.0,
            blood_pressure_dia: 78.0,
            cholesterol_level: 185.0,
            blood_sugar_level: 92.0,
            resting_heart_rate: 62.0,
            vo2_max: 42.0,
            daily_steps: 8_500.0,
            heart_rate_variability: 55.0,

            has_chronic_disease: false,
            genetic_predisposition: 2.0,
            family_longevity: 84.0,
            epigenetic_age_delta: -1.5,
            telomere_length_scale: 7.0,
            has_genetic_mutations: false,

            mental_health_status: 8.0,
            cognitive_function_score: 92.0,
            social_connection_level: 8.0,
            risk_taking_behavior: 3.0,

            air_quality_rating: 4.0,
            pollution_exposure: 2.0,
            healthcare_access: 5.0,
            occupational_hazard: 1.0,
            stress_level: 4.0,

            checkup_frequency: 1.0,
            vaccination_history_scale: 9.0,
            medication_adherence: 9.0,
            preventive_care_access: 4.0,

            regional_mortality_trend: 4.0,
            climate_change_impact_risk: 2.0,
            technological_access: 4.0,

            education_level: Education::Bachelors,
            employment_type: EmploymentType::FullTime,

            income: 105_000.0,
            savings: 82_000.0,
            monthly_investment: 1_500.0,
            monthly_expenses: 4_200.0,
            retirement_age_goal: 65,
            risk_tolerance: 6.0,
            insurance_coverage: InsuranceCoverage {
                life: 500_000.0,
                health: 50_000.0,
                disability: 0.0,
                critical_illness: 0.0,
                long_term_care: 0.0,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeBreakdown {
    pub essential: f64,
    pub discretionary: f64,
    pub savings: f64,
    pub taxes: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthRiskBreakdown {
    pub cardiovascular: f64,
    pub metabolic: f64,
    pub psychological: f64,
    pub environmental: f64,
}

impl HealthRiskBreakdown {
    pub fn dominant(&self) -> (&'static str, f64) {
        [
            ("cardiovascular", self.cardiovascular),
            ("metabolic", self.metabolic),
            ("psychological", self.psychological),
            ("environmental", self.environmental),
        ]
        .into_iter()
        .fold(("cardiovascular", f64::NEG_INFINITY), |best, next| {
            if next.1 > best.1 { next } else { best }
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WealthProjection {
    pub retirement_wealth: f64,
    #[serde(serialize_with = "finite_or_null")]
    pub runway_age: f64,
    pub insurance_gap: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub estimated_longevity_shift: f64,
    pub baseline_longevity: f64,
    #[serde(serialize_with = "finite_or_null")]
    pub financial_runway_age: f64,
    pub wealth_at_retirement: f64,
    pub savings_shortfall: f64,
    pub health_risk_score: f64,
    pub insurance_gap: f64,
    pub probability_of_survival_to_retirement: f64,
    pub income_breakdown: IncomeBreakdown,
    pub health_risk_breakdown: HealthRiskBreakdown,
}

impl AnalysisResult {
    pub fn has_longevity_gap(&self) -> bool {
        self.financial_runway_age < self.baseline_longevity
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrajectoryPoint {
    pub age: u32,
    pub wealth: f64,
}

pub(crate) fn finite_or_null<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else {
        serializer.serialize_none()
    }
}
