//! LoadPlan - Config Loader output
//!
//! Describes a complete load run: target API, generated facts, dispatch passes.

use serde::{Deserialize, Serialize};

use crate::Credential;

/// Facts generated per run unless configured otherwise
pub const DEFAULT_FACT_COUNT: usize = 1000;

/// Full passes over the fact set unless configured otherwise
pub const DEFAULT_PASSES: usize = 10;

/// Complete run configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadPlan {
    /// Target API
    pub api: ApiConfig,

    /// Generated fact set
    #[serde(default)]
    pub facts: FactsConfig,

    /// Dispatch settings
    #[serde(default)]
    pub dispatch: DispatchSettings,
}

impl LoadPlan {
    /// Plan with every default applied and the given endpoint
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                endpoint: endpoint.into(),
                token: None,
            },
            facts: FactsConfig::default(),
            dispatch: DispatchSettings::default(),
        }
    }

    /// Effective queue capacity: configured value, or one full fact set
    ///
    /// Never less than 1.
    pub fn queue_capacity(&self) -> usize {
        self.dispatch
            .queue_capacity
            .unwrap_or(self.facts.count)
            .max(1)
    }

    /// Total submissions the plan will attempt
    pub fn total_submissions(&self) -> usize {
        self.facts.count.saturating_mul(self.dispatch.passes)
    }
}

/// Remote API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Full URL of the save-fact endpoint
    pub endpoint: String,

    /// Bearer token (may instead come from the CLI / environment)
    #[serde(default, skip_serializing)]
    pub token: Option<Credential>,
}

/// How many facts to generate and what they look like
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactsConfig {
    /// Facts per pass
    #[serde(default = "default_count")]
    pub count: usize,

    /// Constant fields shared by every generated fact
    #[serde(flatten)]
    pub template: FactTemplate,
}

impl Default for FactsConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_FACT_COUNT,
            template: FactTemplate::default(),
        }
    }
}

fn default_count() -> usize {
    DEFAULT_FACT_COUNT
}

/// Constant part of every generated fact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactTemplate {
    pub period_start: String,
    pub period_end: String,
    pub period_key: String,
    pub indicator_to_mo_id: u64,
    pub fact_time: String,
    pub auth_user_id: u64,
    /// Comment becomes `"<prefix>: <index>"`
    pub comment_prefix: String,
}

impl Default for FactTemplate {
    fn default() -> Self {
        Self {
            period_start: "2024-05-01".to_string(),
            period_end: "2024-05-31".to_string(),
            period_key: "month".to_string(),
            indicator_to_mo_id: 227373,
            fact_time: "2024-05-31".to_string(),
            auth_user_id: 40,
            comment_prefix: "Buffer".to_string(),
        }
    }
}

/// Dispatch pipeline settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchSettings {
    /// Full passes over the fact set
    #[serde(default = "default_passes")]
    pub passes: usize,

    /// Queue capacity (None = one full fact set)
    #[serde(default)]
    pub queue_capacity: Option<usize>,
}

impl Default for DispatchSettings {
    fn default() -> Self {
        Self {
            passes: DEFAULT_PASSES,
            queue_capacity: None,
        }
    }
}

fn default_passes() -> usize {
    DEFAULT_PASSES
}
