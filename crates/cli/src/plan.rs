//! Effective load plan: config file or defaults, then CLI overrides.

use anyhow::{Context, Result};
use contracts::{Credential, LoadPlan};
use tracing::info;

use crate::cli::PlanArgs;
use crate::error::CliError;

/// Endpoint used when neither a config file nor `--endpoint` names one
pub const DEFAULT_ENDPOINT: &str = "https://development.kpi-drive.ru/_api/facts/save_fact";

/// Build and validate the plan described by `args`
pub fn resolve_plan(args: &PlanArgs) -> Result<LoadPlan> {
    let mut plan = match &args.config {
        Some(path) => {
            if !path.exists() {
                return Err(CliError::config_not_found(path).into());
            }
            info!(config = %path.display(), "Loading configuration");
            config_loader::ConfigLoader::load_from_path(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?
        }
        None => LoadPlan::with_endpoint(DEFAULT_ENDPOINT),
    };

    apply_overrides(&mut plan, args);
    config_loader::validate(&plan).context("Invalid load plan after CLI overrides")?;
    Ok(plan)
}

fn apply_overrides(plan: &mut LoadPlan, args: &PlanArgs) {
    if let Some(ref endpoint) = args.endpoint {
        info!(endpoint = %endpoint, "Overriding endpoint from CLI");
        plan.api.endpoint = endpoint.clone();
    }
    if let Some(ref token) = args.token {
        plan.api.token = Some(Credential::bearer(token.clone()));
    }
    if let Some(count) = args.count {
        info!(count, "Overriding fact count from CLI");
        plan.facts.count = count;
    }
    if let Some(passes) = args.passes {
        info!(passes, "Overriding passes from CLI");
        plan.dispatch.passes = passes;
    }
    if let Some(capacity) = args.queue_capacity {
        plan.dispatch.queue_capacity = Some(capacity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_without_config() {
        let plan = resolve_plan(&PlanArgs::default()).unwrap();
        assert_eq!(plan.api.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(plan.facts.count, contracts::DEFAULT_FACT_COUNT);
        assert_eq!(plan.dispatch.passes, contracts::DEFAULT_PASSES);
        assert!(plan.api.token.is_none());
    }

    #[test]
    fn test_cli_overrides_config_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(
            br#"
[api]
endpoint = "https://from-file.test/save"
token = "file-token"

[facts]
count = 3
"#,
        )
        .unwrap();

        let args = PlanArgs {
            config: Some(file.path().to_path_buf()),
            token: Some("cli-token".to_string()),
            passes: Some(4),
            ..Default::default()
        };
        let plan = resolve_plan(&args).unwrap();

        assert_eq!(plan.api.endpoint, "https://from-file.test/save");
        assert_eq!(
            plan.api.token.as_ref().map(Credential::expose),
            Some("cli-token")
        );
        assert_eq!(plan.facts.count, 3);
        assert_eq!(plan.dispatch.passes, 4);
    }

    #[test]
    fn test_invalid_override_rejected() {
        let args = PlanArgs {
            passes: Some(0),
            ..Default::default()
        };
        assert!(resolve_plan(&args).is_err());
    }

    #[test]
    fn test_missing_config_file() {
        let args = PlanArgs {
            config: Some("/definitely/not/here.toml".into()),
            ..Default::default()
        };
        let err = resolve_plan(&args).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}
