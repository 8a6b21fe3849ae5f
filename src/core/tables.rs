use super::types::{DietaryPattern, Education, Gender};

pub const DEFAULT_BASELINE_LONGEVITY: f64 = 78.0;

pub const BASELINE_LONGEVITY: [(Gender, f64); 3] = [
    (Gender::Male, 76.3),
    (Gender::Female, 81.2),
    (Gender::NonBinary, 78.5),
];

// Other is deliberately absent and falls through to the zero default.
pub const DIET_SHIFTS: [(DietaryPattern, f64); 12] = [
    (DietaryPattern::Mediterranean, 3.0),
    (DietaryPattern::Dash, 2.5),
    (DietaryPattern::Vegan, 2.0),
    (DietaryPattern::Vegetarian, 1.5),
    (DietaryPattern::Pescatarian, 2.0),
    (DietaryPattern::Keto, -0.5),
    (DietaryPattern::Paleo, 1.0),
    (DietaryPattern::Western, -3.0),
    (DietaryPattern::LowCarb, 0.5),
    (DietaryPattern::Flexitarian, 1.5),
    (DietaryPattern::Carnivore, -2.0),
    (DietaryPattern::Whole30, 1.0),
];

pub const EDUCATION_SHIFTS: [(Education, f64); 4] = [
    (Education::HighSchool, -1.5),
    (Education::Bachelors, 0.0),
    (Education::Masters, 2.0),
    (Education::PhD, 3.5),
];

pub const INFLATION_RATE: f64 = 0.025;

fn lookup<K: PartialEq + Copy>(table: &[(K, f64)], key: K, default: f64) -> f64 {
    table
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, value)| *value)
        .unwrap_or(default)
}

pub fn baseline_longevity(gender: Gender) -> f64 {
    lookup(&BASELINE_LONGEVITY, gender, DEFAULT_BASELINE_LONGEVITY)
}

pub fn diet_shift(pattern: DietaryPattern) -> f64 {
    lookup(&DIET_SHIFTS, pattern, 0.0)
}

pub fn education_shift(level: Education) -> f64 {
    lookup(&EDUCATION_SHIFTS, level, 0.0)
}
