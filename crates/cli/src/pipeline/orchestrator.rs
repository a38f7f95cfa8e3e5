//! Load run orchestrator - generator, submitter and dispatcher wired together.

use anyhow::Result;
use contracts::{Credential, LoadPlan};
use dispatcher::{DispatchReport, Dispatcher, DispatcherConfig, FactSubmitter};
use generator::FactGenerator;
use submitter::{HttpSubmitter, LogSubmitter};
use tracing::info;

use crate::error::CliError;

/// Load run configuration
#[derive(Debug, Clone)]
pub struct LoadRunConfig {
    /// The effective load plan
    pub plan: LoadPlan,

    /// Log facts instead of sending them
    pub dry_run: bool,

    /// Metrics server port (None = disabled)
    pub metrics_port: Option<u16>,
}

/// One complete load run
pub struct LoadRun {
    config: LoadRunConfig,
}

impl LoadRun {
    pub fn new(config: LoadRunConfig) -> Self {
        Self { config }
    }

    /// Generate the fact set, dispatch it and return the report
    pub async fn run(self) -> Result<DispatchReport> {
        let LoadRunConfig {
            plan,
            dry_run,
            metrics_port,
        } = self.config;

        if let Some(port) = metrics_port {
            observability::init_metrics_only(port)?;
            info!("Metrics endpoint available on port {}", port);
        }

        let credential = resolve_credential(&plan, dry_run)?;
        let facts = FactGenerator::new(plan.facts.template.clone()).generate(plan.facts.count);
        info!(
            facts = facts.len(),
            passes = plan.dispatch.passes,
            total = plan.total_submissions(),
            "Fact set generated"
        );

        let config = DispatcherConfig::from(plan.dispatch);
        if dry_run {
            let submitter = LogSubmitter::new("dry_run");
            dispatch_with(submitter, credential, config, &facts).await
        } else {
            let submitter = HttpSubmitter::new("save_fact", &plan.api.endpoint)?;
            dispatch_with(submitter, credential, config, &facts).await
        }
    }
}

fn resolve_credential(plan: &LoadPlan, dry_run: bool) -> Result<Credential, CliError> {
    match (&plan.api.token, dry_run) {
        (Some(token), _) => Ok(token.clone()),
        (None, true) => Ok(Credential::bearer("dry-run")),
        (None, false) => Err(CliError::MissingToken),
    }
}

async fn dispatch_with<S: FactSubmitter + Send + 'static>(
    submitter: S,
    credential: Credential,
    config: DispatcherConfig,
    facts: &[contracts::Fact],
) -> Result<DispatchReport> {
    let report = Dispatcher::new(submitter, credential, config)
        .run(facts)
        .await
        .map_err(CliError::from)?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn small_plan(endpoint: &str) -> LoadPlan {
        let mut plan = LoadPlan::with_endpoint(endpoint);
        plan.facts.count = 4;
        plan.dispatch.passes = 2;
        plan
    }

    #[tokio::test]
    async fn test_dry_run_needs_no_token() {
        let report = LoadRun::new(LoadRunConfig {
            plan: small_plan("https://unused.test/save"),
            dry_run: true,
            metrics_port: None,
        })
        .run()
        .await
        .unwrap();

        assert_eq!(report.attempted, 8);
        assert!(report.is_clean());
    }

    #[tokio::test]
    async fn test_real_run_requires_token() {
        let err = LoadRun::new(LoadRunConfig {
            plan: small_plan("https://unused.test/save"),
            dry_run: false,
            metrics_port: None,
        })
        .run()
        .await
        .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::MissingToken)
        ));
    }

    #[tokio::test]
    async fn test_run_against_mock_server() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(header("authorization", "Bearer secret"))
            .respond_with(ResponseTemplate::new(200))
            .expect(8)
            .mount(&server)
            .await;

        let mut plan = small_plan(&format!("{}/save", server.uri()));
        plan.api.token = Some(Credential::bearer("secret"));

        let report = LoadRun::new(LoadRunConfig {
            plan,
            dry_run: false,
            metrics_port: None,
        })
        .run()
        .await
        .unwrap();

        assert_eq!(report.succeeded, 8);
    }
}
