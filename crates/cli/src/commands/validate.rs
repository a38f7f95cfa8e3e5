//! `validate` command implementation.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use contracts::LoadPlan;

use crate::cli::ValidateArgs;

/// Validation result for JSON output
#[derive(Serialize)]
struct ValidationResult {
    valid: bool,
    config_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    warnings: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<ConfigSummary>,
}

#[derive(Serialize)]
struct ConfigSummary {
    endpoint: String,
    has_token: bool,
    fact_count: usize,
    passes: usize,
    queue_capacity: usize,
    total_submissions: usize,
}

/// Execute the `validate` command
pub fn run_validate(args: &ValidateArgs) -> Result<()> {
    info!(config = %args.config.display(), "Validating configuration");

    let result = validate_config(args);

    if args.json {
        let json = serde_json::to_string_pretty(&result)
            .context("Failed to serialize validation result")?;
        println!("{}", json);
    } else {
        print_validation_result(&result);
    }

    if result.valid {
        Ok(())
    } else {
        anyhow::bail!("Configuration validation failed")
    }
}

fn validate_config(args: &ValidateArgs) -> ValidationResult {
    let config_path = args.config.display().to_string();

    if !args.config.exists() {
        return ValidationResult {
            valid: false,
            config_path,
            error: Some(format!("File not found: {}", args.config.display())),
            warnings: None,
            summary: None,
        };
    }

    match config_loader::ConfigLoader::load_from_path(&args.config) {
        Ok(plan) => {
            let warnings = collect_warnings(&plan);
            ValidationResult {
                valid: true,
                config_path,
                error: None,
                warnings: if warnings.is_empty() {
                    None
                } else {
                    Some(warnings)
                },
                summary: Some(ConfigSummary {
                    endpoint: plan.api.endpoint.clone(),
                    has_token: plan.api.token.is_some(),
                    fact_count: plan.facts.count,
                    passes: plan.dispatch.passes,
                    queue_capacity: plan.queue_capacity(),
                    total_submissions: plan.total_submissions(),
                }),
            }
        }
        Err(e) => ValidationResult {
            valid: false,
            config_path,
            error: Some(e.to_string()),
            warnings: None,
            summary: None,
        },
    }
}

/// Collect configuration warnings (non-fatal issues)
fn collect_warnings(plan: &LoadPlan) -> Vec<String> {
    let mut warnings = Vec::new();

    if plan.api.token.is_some() {
        warnings.push(
            "api.token is stored in the config file - prefer FACT_LOADER_TOKEN".to_string(),
        );
    }

    if plan.facts.count == 0 {
        warnings.push("facts.count is 0 - nothing will be submitted".to_string());
    }

    if plan.api.endpoint.starts_with("http://") {
        warnings.push("api.endpoint uses plain http - the token is sent unencrypted".to_string());
    }

    warnings
}

fn print_validation_result(result: &ValidationResult) {
    if result.valid {
        println!("✓ Configuration is valid: {}", result.config_path);

        if let Some(ref summary) = result.summary {
            println!("\n  Endpoint: {}", summary.endpoint);
            println!("  Token in file: {}", summary.has_token);
            println!("  Facts per pass: {}", summary.fact_count);
            println!("  Passes: {}", summary.passes);
            println!("  Queue capacity: {}", summary.queue_capacity);
            println!("  Total submissions: {}", summary.total_submissions);
        }

        if let Some(ref warnings) = result.warnings {
            println!("\n⚠ Warnings:");
            for warning in warnings {
                println!("  - {}", warning);
            }
        }
    } else {
        println!("✗ Configuration is invalid: {}", result.config_path);
        if let Some(ref error) = result.error {
            println!("\n  Error: {}", error);
        }
    }
}
