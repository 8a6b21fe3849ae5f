use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router,
    extract::{Json, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

use crate::advisor::{CommandGenerator, Recommendations, recommend};
use crate::core::{
    AnalysisResult, CoverageKind, InputProfile, ScenarioAdjustments, ScenarioComparison, Tip,
    TrajectoryPoint, compare_scenario, improvement_tips, project_wealth_trajectory,
    run_full_analysis,
};
use crate::report::render_impact_report;

#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
    pub port: u16,
    pub narrative_command: Option<String>,
}

#[derive(Debug)]
struct AppState {
    narrative: CommandGenerator,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ScenarioPayload {
    profile: InputProfile,
    adjustments: ScenarioAdjustments,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzeResponse {
    results: AnalysisResult,
    tips: Vec<Tip>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TrajectoryResponse {
    retirement_age: u32,
    baseline_longevity: f64,
    #[serde(serialize_with = "crate::core::finite_or_null")]
    runway_age: f64,
    points: Vec<TrajectoryPoint>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScenarioResponse {
    #[serde(flatten)]
    comparison: ScenarioComparison,
    report: String,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

pub const MAX_PROFILE_AGE: u32 = 120;

pub fn validate_profile(profile: &InputProfile) -> Result<(), String> {
    let numeric = [
        ("dietScore", profile.diet_score),
        ("exerciseHours", profile.exercise_hours),
        ("sleepHours", profile.sleep_hours),
        ("sleepQuality", profile.sleep_quality),
        ("alcoholUnits", profile.alcohol_units),
        ("bmi", profile.bmi),
        ("waistToHipRatio", profile.waist_to_hip_ratio),
        ("bloodPressureSys", profile.blood_pressure_sys),
        ("bloodPressureDia", profile.blood_pressure_dia),
        ("cholesterolLevel", profile.cholesterol_level),
        ("bloodSugarLevel", profile.blood_sugar_level),
        ("restingHeartRate", profile.resting_heart_rate),
        ("vo2Max", profile.vo2_max),
        ("dailySteps", profile.daily_steps),
        ("heartRateVariability", profile.heart_rate_variability),
        ("geneticPredisposition", profile.genetic_predisposition),
        ("familyLongevity", profile.family_longevity),
        ("epigeneticAgeDelta", profile.epigenetic_age_delta),
        ("telomereLengthScale", profile.telomere_length_scale),
        ("mentalHealthStatus", profile.mental_health_status),
        ("cognitiveFunctionScore", profile.cognitive_function_score),
        ("socialConnectionLevel", profile.social_connection_level),
        ("riskTakingBehavior", profile.risk_taking_behavior),
        ("airQualityRating", profile.air_quality_rating),
        ("pollutionExposure", profile.pollution_exposure),
        ("healthcareAccess", profile.healthcare_access),
        ("occupationalHazard", profile.occupational_hazard),
        ("stressLevel", profile.stress_level),
        ("checkupFrequency", profile.checkup_frequency),
        ("vaccinationHistoryScale", profile.vaccination_history_scale),
        ("medicationAdherence", profile.medication_adherence),
        ("preventiveCareAccess", profile.preventive_care_access),
        ("regionalMortalityTrend", profile.regional_mortality_trend),
        ("climateChangeImpactRisk", profile.climate_change_impact_risk),
        ("technologicalAccess", profile.technological_access),
        ("riskTolerance", profile.risk_tolerance),
    ];
    for (name, value) in numeric {
        if !value.is_finite() {
            return Err(format!("{name} must be a finite number"));
        }
    }

    for (name, value) in [
        ("age", profile.age),
        ("retirementAgeGoal", profile.retirement_age_goal),
    ] {
        if value > MAX_PROFILE_AGE {
            return Err(format!("{name} must be at most {MAX_PROFILE_AGE}"));
        }
    }

    let currency = [
        ("income", profile.income),
        ("savings", profile.savings),
        ("monthlyInvestment", profile.monthly_investment),
        ("monthlyExpenses", profile.monthly_expenses),
    ];
    for (name, value) in currency {
        if !value.is_finite() || value < 0.0 {
            return Err(format!("{name} must be >= 0"));
        }
    }

    for kind in CoverageKind::ALL {
        let amount = profile.insurance_coverage.get(kind);
        if !amount.is_finite() || amount < 0.0 {
            return Err(format!("insuranceCoverage.{kind:?} must be >= 0"));
        }
    }

    Ok(())
}

fn validate_adjustments(adjustments: &ScenarioAdjustments) -> Result<(), String> {
    for (name, value) in [
        ("exerciseHours", adjustments.exercise_hours),
        ("dietScore", adjustments.diet_score),
        ("monthlyInvestment", adjustments.monthly_investment),
    ] {
        if let Some(v) = value {
            if !v.is_finite() || v < 0.0 {
                return Err(format!("adjustments.{name} must be >= 0"));
            }
        }
    }
    if let Some(goal) = adjustments.retirement_age_goal {
        if goal > MAX_PROFILE_AGE {
            return Err(format!(
                "adjustments.retirementAgeGoal must be at most {MAX_PROFILE_AGE}"
            ));
        }
    }
    Ok(())
}

fn build_analyze_response(profile: &InputProfile) -> AnalyzeResponse {
    let results = run_full_analysis(profile);
    let tips = improvement_tips(profile, &results);
    AnalyzeResponse { results, tips }
}

fn build_trajectory_response(profile: &InputProfile) -> TrajectoryResponse {
    let results = run_full_analysis(profile);
    TrajectoryResponse {
        retirement_age: profile.retirement_age_goal,
        baseline_longevity: results.baseline_longevity,
        runway_age: results.financial_runway_age,
        points: project_wealth_trajectory(profile, &results),
    }
}

fn build_scenario_response(payload: &ScenarioPayload) -> ScenarioResponse {
    let comparison = compare_scenario(&payload.profile, &payload.adjustments);
    let report = render_impact_report(&comparison);
    ScenarioResponse { comparison, report }
}

pub fn router(config: &ServerConfig) -> Router {
    let narrative = CommandGenerator::new(config.narrative_command.clone());
    if !narrative.is_configured() {
        log::info!("no narrative command configured, recommendations will use the fallback set");
    }
    let state = Arc::new(AppState { narrative });

    Router::new()
        .route("/api/profile/default", get(default_profile_handler))
        .route("/api/analyze", post(analyze_handler))
        .route("/api/trajectory", post(trajectory_handler))
        .route("/api/scenario", post(scenario_handler))
        .route("/api/recommendations", post(recommendations_handler))
        .fallback(not_found_handler)
        .with_state(state)
}

pub async fn run_http_server(config: ServerConfig) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let app = router(&config);

    let listener = TcpListener::bind(addr).await?;
    log::info!("longevity HTTP API listening on http://{addr}");

    axum::serve(listener, app).await
}

async fn default_profile_handler() -> Response {
    json_response(StatusCode::OK, InputProfile::default())
}

async fn analyze_handler(body: Result<Json<InputProfile>, JsonRejection>) -> Response {
    let profile = match accept_profile(body) {
        Ok(profile) => profile,
        Err(response) => return response,
    };
    log::debug!("analyze request for age {}", profile.age);
    json_response(StatusCode::OK, build_analyze_response(&profile))
}

async fn trajectory_handler(body: Result<Json<InputProfile>, JsonRejection>) -> Response {
    let profile = match accept_profile(body) {
        Ok(profile) => profile,
        Err(response) => return response,
    };
    log::debug!("trajectory request for age {}", profile.age);
    json_response(StatusCode::OK, build_trajectory_response(&profile))
}

async fn scenario_handler(body: Result<Json<ScenarioPayload>, JsonRejection>) -> Response {
    let Json(payload) = match body {
        Ok(payload) => payload,
        Err(rejection) => return rejection_response(rejection),
    };
    log::debug!("scenario request with {:?}", payload.adjustments);
    if let Err(msg) =
        validate_profile(&payload.profile).and_then(|()| validate_adjustments(&payload.adjustments))
    {
        return error_response(StatusCode::BAD_REQUEST, &msg);
    }
    json_response(StatusCode::OK, build_scenario_response(&payload))
}

async fn recommendations_handler(
    State(state): State<Arc<AppState>>,
    body: Result<Json<InputProfile>, JsonRejection>,
) -> Response {
    let profile = match accept_profile(body) {
        Ok(profile) => profile,
        Err(response) => return response,
    };
    log::debug!("recommendation request for age {}", profile.age);
    let results = run_full_analysis(&profile);
    let recommendations: Recommendations = recommend(&state.narrative, &profile, &results).await;
    json_response(StatusCode::OK, recommendations)
}

fn accept_profile(body: Result<Json<InputProfile>, JsonRejection>) -> Result<InputProfile, Response> {
    let Json(profile) = body.map_err(rejection_response)?;
    validate_profile(&profile).map_err(|msg| error_response(StatusCode::BAD_REQUEST, &msg))?;
    Ok(profile)
}

fn rejection_response(rejection: JsonRejection) -> Response {
    log::debug!("rejected request body: {rejection}");
    error_response(StatusCode::BAD_REQUEST, &rejection.body_text())
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        header::HeaderValue::from_static("no-store"),
    );
    response
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}
