mod budget;
mod engine;
mod longevity;
mod risk;
mod scenario;
mod tables;
mod tips;
mod trajectory;
mod types;
mod wealth;

pub use budget::compute_income_breakdown;
pub use engine::{MIN_SURVIVAL_PROBABILITY, run_full_analysis};
pub use longevity::{MAX_LONGEVITY_SHIFT, MIN_LONGEVITY_SHIFT, compute_longevity_shift};
pub use risk::compute_health_risks;
pub use scenario::{ScenarioAdjustments, ScenarioComparison, compare_scenario};
pub use tables::{DEFAULT_BASELINE_LONGEVITY, INFLATION_RATE, baseline_longevity};
pub use tips::{Tip, TipCategory, TipPriority, improvement_tips};
pub use trajectory::{MAX_TRAJECTORY_AGE, project_wealth_trajectory};
pub use types::{
    AnalysisResult, CoverageKind, DietaryPattern, DrugUse, Education, EmploymentType, Ethnicity,
    Gender, HealthRiskBreakdown, IncomeBreakdown, InputProfile, InsuranceCoverage,
    TrajectoryPoint, WealthProjection,
};
pub use wealth::{UNLIMITED_RUNWAY, compute_wealth};

pub(crate) use types::finite_or_null;
