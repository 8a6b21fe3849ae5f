use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::advisor::{CommandGenerator, recommend};
use crate::api::{ServerConfig, run_http_server, validate_profile};
use crate::core::{
    AnalysisResult, InputProfile, ScenarioAdjustments, Tip, TrajectoryPoint, compare_scenario,
    improvement_tips, project_wealth_trajectory, run_full_analysis,
};
use crate::report::render_impact_report;

const NARRATIVE_ENV: &str = "LONGEVITY_NARRATIVE_CMD";

#[derive(Parser, Debug)]
#[command(
    name = "longevity",
    about = "Longevity shift and coupled retirement wealth projection"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the JSON API over HTTP.
    Serve {
        #[arg(long, default_value_t = 8080)]
        port: u16,
        #[arg(
            long,
            env = NARRATIVE_ENV,
            help = "Command that reads a prompt on stdin and prints recommendations as JSON"
        )]
        narrative_command: Option<String>,
    },
    /// Print the full analysis for a profile.
    Analyze {
        #[arg(long, help = "JSON profile; missing fields use the reference profile")]
        profile: Option<PathBuf>,
        #[arg(long, help = "Also print the year-by-year wealth trajectory")]
        trajectory: bool,
    },
    /// Print narrative recommendations, or the fallback set.
    Recommend {
        #[arg(long)]
        profile: Option<PathBuf>,
        #[arg(long, env = NARRATIVE_ENV)]
        narrative_command: Option<String>,
    },
    /// Print the text impact report for a what-if scenario.
    Report {
        #[arg(long, help = "JSON scenario adjustments")]
        scenario: PathBuf,
        #[arg(long)]
        profile: Option<PathBuf>,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzeOutput {
    results: AnalysisResult,
    tips: Vec<Tip>,
    #[serde(skip_serializing_if = "Option::is_none")]
    trajectory: Option<Vec<TrajectoryPoint>>,
}

pub async fn run() -> Result<(), String> {
    let cli = Cli::parse();
    match cli.command {
        Command::Serve {
            port,
            narrative_command,
        } => run_http_server(ServerConfig {
            port,
            narrative_command,
        })
        .await
        .map_err(|e| format!("server error: {e}")),
        Command::Analyze {
            profile,
            trajectory,
        } => {
            let profile = load_profile(profile.as_deref())?;
            let results = run_full_analysis(&profile);
            let output = AnalyzeOutput {
                results,
                tips: improvement_tips(&profile, &results),
                trajectory: trajectory.then(|| project_wealth_trajectory(&profile, &results)),
            };
            print_json(&output)
        }
        Command::Recommend {
            profile,
            narrative_command,
        } => {
            let profile = load_profile(profile.as_deref())?;
            let results = run_full_analysis(&profile);
            let generator = CommandGenerator::new(narrative_command);
            let recommendations = recommend(&generator, &profile, &results).await;
            print_json(&recommendations)
        }
        Command::Report { scenario, profile } => {
            let profile = load_profile(profile.as_deref())?;
            let adjustments: ScenarioAdjustments = read_json(&scenario)?;
            let comparison = compare_scenario(&profile, &adjustments);
            print!("{}", render_impact_report(&comparison));
            Ok(())
        }
    }
}

fn load_profile(path: Option<&Path>) -> Result<InputProfile, String> {
    let profile = match path {
        Some(path) => read_json(path)?,
        None => InputProfile::default(),
    };
    validate_profile(&profile)?;
    Ok(profile)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, String> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    serde_json::from_str(&text).map_err(|e| format!("invalid JSON in {}: {e}", path.display()))
}

fn print_json<T: Serialize>(value: &T) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value).map_err(|e| format!("cannot encode output: {e}"))?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("longevity-{}-{name}", std::process::id()));
        let mut file = fs::File::create(&path).expect("create temp file");
        file.write_all(contents.as_bytes()).expect("write temp file");
        path
    }

    #[test]
    fn parses_subcommands() {
        let cli = Cli::try_parse_from(["longevity", "serve", "--port", "9000"]).expect("valid args");
        assert!(matches!(cli.command, Command::Serve { port: 9000, .. }));

        let cli = Cli::try_parse_from(["longevity", "analyze", "--trajectory"]).expect("valid args");
        assert!(matches!(
            cli.command,
            Command::Analyze {
                profile: None,
                trajectory: true
            }
        ));

        assert!(Cli::try_parse_from(["longevity", "report"]).is_err());
    }

    #[test]
    fn missing_profile_path_uses_reference_profile() {
        assert_eq!(load_profile(None), Ok(InputProfile::default()));
    }

    #[test]
    fn profile_file_overrides_defaults() {
        let path = temp_file("profile.json", r#"{"age": 45, "monthlyExpenses": 3000}"#);
        let profile = load_profile(Some(&path)).expect("valid profile");
        assert_eq!(profile.age, 45);
        assert_eq!(profile.monthly_expenses, 3_000.0);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn invalid_profile_file_reports_path() {
        let path = temp_file("broken.json", "{ not json");
        let err = load_profile(Some(&path)).expect_err("must fail");
        assert!(err.starts_with("invalid JSON in"));
        let _ = fs::remove_file(path);

        let missing = Path::new("/nonexistent/longevity/profile.json");
        assert!(load_profile(Some(missing)).expect_err("must fail").starts_with("cannot read"));
    }
}
