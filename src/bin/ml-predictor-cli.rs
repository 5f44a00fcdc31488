//! Command-line access to the prediction service used by the desktop app.

use ml_predictor::config;
use ml_predictor::form::display::{format_confidence, format_prediction};
use ml_predictor::form::{FeatureInputs, PredictionState, PredictorForm};
use ml_predictor::logging;
use ml_predictor::prediction::{FEATURE_COUNT, FeatureVector, PredictionClient};
use std::path::PathBuf;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

#[derive(Debug, PartialEq)]
enum Command {
    Info,
    Health,
    Predict(Vec<String>),
    Batch(PathBuf),
}

#[derive(Debug, PartialEq)]
struct CliOptions {
    base_url: Option<String>,
    command: Command,
}

fn run() -> Result<(), String> {
    let Some(options) = parse_args(std::env::args().skip(1).collect())? else {
        return Ok(());
    };
    if let Err(err) = logging::init_stderr() {
        eprintln!("Logging disabled: {err}");
    }

    let mut settings = config::load_or_default().map_err(|err| err.to_string())?;
    settings
        .apply_base_url_override(options.base_url.as_deref())
        .map_err(|err| err.to_string())?;
    let client = PredictionClient::from_settings(&settings);

    match options.command {
        Command::Info => {
            let info = client
                .fetch_model_info()
                .ok_or_else(|| format!("Model info unavailable from {}", client.base_url()))?;
            println!("Model: {}", info.model_type);
            println!("Features: {}", info.feature_count);
            println!("Version: {}", info.version);
            if let Some(trees) = info.n_estimators {
                println!("Estimators: {trees}");
            }
            if !info.feature_names.is_empty() {
                println!("Feature names: {}", info.feature_names.join(", "));
            }
        }
        Command::Health => {
            let health = client.check_health().map_err(|err| err.to_string())?;
            println!("Status: {}", health.status);
            println!("Model loaded: {}", health.model_loaded);
            if !health.is_ready() {
                return Err("Service is not ready".to_string());
            }
        }
        Command::Predict(fields) => {
            let inputs = FeatureInputs::from_fields(fields)
                .ok_or_else(|| format!("predict expects exactly {FEATURE_COUNT} values"))?;
            let mut form = PredictorForm::new();
            for (index, value) in inputs.iter().enumerate() {
                form.set_feature(index, value);
            }
            match form.predict_with(&client) {
                PredictionState::Success(result) => {
                    println!("Predicted value: {}", format_prediction(result.predicted_value));
                    println!("Confidence: {}", format_confidence(result.confidence));
                }
                PredictionState::Error(message) => return Err(message.clone()),
                PredictionState::Idle | PredictionState::Loading => {
                    return Err("Prediction did not complete".to_string());
                }
            }
        }
        Command::Batch(path) => {
            let text = std::fs::read_to_string(&path)
                .map_err(|err| format!("Failed to read {}: {err}", path.display()))?;
            let records = parse_batch(&text)?;
            if records.is_empty() {
                return Err(format!("No records found in {}", path.display()));
            }
            let predictions = client
                .predict_batch(&records)
                .map_err(|err| err.to_string())?;
            for (index, prediction) in predictions.iter().enumerate() {
                let features = prediction
                    .input_features
                    .iter()
                    .map(|value| value.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                println!(
                    "{:>4}  [{features}] -> {}",
                    index + 1,
                    format_prediction(prediction.prediction)
                );
            }
            println!("{} records", predictions.len());
        }
    }
    Ok(())
}

fn parse_args(args: Vec<String>) -> Result<Option<CliOptions>, String> {
    let mut base_url: Option<String> = None;
    let mut positional = Vec::new();
    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "-h" | "--help" => {
                println!("{}", help_text());
                return Ok(None);
            }
            "--base-url" => {
                idx += 1;
                let value = args
                    .get(idx)
                    .ok_or_else(|| "--base-url requires a value".to_string())?;
                base_url = Some(value.clone());
            }
            flag if flag.starts_with("--") => {
                return Err(format!("Unknown argument: {flag}\n\n{}", help_text()));
            }
            value => positional.push(value.to_string()),
        }
        idx += 1;
    }

    let mut positional = positional.into_iter();
    let command = match positional.next().as_deref() {
        Some("info") => Command::Info,
        Some("health") => Command::Health,
        Some("predict") => Command::Predict(positional.by_ref().collect()),
        Some("batch") => {
            let path = positional
                .next()
                .ok_or_else(|| "batch requires a file path".to_string())?;
            Command::Batch(PathBuf::from(path))
        }
        Some(other) => return Err(format!("Unknown command: {other}\n\n{}", help_text())),
        None => return Err(help_text()),
    };
    if let Some(extra) = positional.next() {
        return Err(format!("Unexpected argument: {extra}"));
    }
    Ok(Some(CliOptions { base_url, command }))
}

/// One record per non-empty line; `#` starts a comment line.
fn parse_batch(text: &str) -> Result<Vec<FeatureVector>, String> {
    let mut records = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let fields = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|field| !field.is_empty());
        let inputs = FeatureInputs::from_fields(fields).ok_or_else(|| {
            format!("Line {}: expected {FEATURE_COUNT} values", line_no + 1)
        })?;
        let features = inputs
            .parse()
            .map_err(|err| format!("Line {}: {err}", line_no + 1))?;
        records.push(features);
    }
    Ok(records)
}

fn help_text() -> String {
    [
        "ml-predictor-cli",
        "",
        "Usage:",
        "  ml-predictor-cli [--base-url <url>] info",
        "  ml-predictor-cli [--base-url <url>] health",
        "  ml-predictor-cli [--base-url <url>] predict <f1> <f2> <f3> <f4> <f5>",
        "  ml-predictor-cli [--base-url <url>] batch <file>",
        "",
        "Batch files hold one record per line: five numbers separated by commas or spaces.",
        "The base URL defaults to config.toml, then ML_PREDICTOR_BASE_URL.",
    ]
    .join("\n")
}
